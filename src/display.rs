use std::io::Write;

use console::measure_text_width;
use nu_ansi_term::Color::{Blue, Green, Yellow};

use crate::constants::display::REPLACEMENT_CHAR;
use crate::error::*;
use crate::runner::TransformResult;
use crate::transforms::TransformRegistry;

/// Selects the results worth showing to the user.
///
/// Unless `show_all` is set, results without a value and results containing
/// the U+FFFD replacement character (bytes that were not valid text) are
/// dropped. The runner never filters; this is a presentation choice.
///
/// # Examples
///
/// ```
/// use textmorph::display::visible_results;
/// use textmorph::runner::run;
///
/// let results = run("not json");
/// let shown = visible_results(&results, false);
/// assert!(shown.iter().all(|r| !r.value.is_empty()));
/// assert!(shown.len() < results.len());
/// ```
pub fn visible_results(results: &[TransformResult], show_all: bool) -> Vec<&TransformResult> {
    results
        .iter()
        .filter(|result| {
            show_all || !(result.value.is_empty() || result.value.contains(REPLACEMENT_CHAR))
        })
        .collect()
}

/// Writes the results as a labeled list.
///
/// Single-line values are printed next to their label, labels padded to the
/// widest one. Multi-line values are printed under their label followed by a
/// blank line.
///
/// # Arguments
/// * `results` - The results to print
/// * `output` - Where to write them
/// * `colored` - Whether labels are painted
///
/// # Returns
/// A `Result` indicating success or failure.
pub fn print_results(
    results: &[&TransformResult],
    output: &mut dyn Write,
    colored: bool,
) -> Result<()> {
    let width = results
        .iter()
        .map(|result| measure_text_width(&result.label))
        .max()
        .unwrap_or_default();

    for result in results {
        if result.value.contains('\n') {
            writeln!(output, "{}", paint_label(&result.label, colored))?;
            writeln!(output, "{}", result.value)?;
            writeln!(output)?;
        } else {
            let padding = " ".repeat(width - measure_text_width(&result.label));
            writeln!(
                output,
                "{}{}  {}",
                paint_label(&result.label, colored),
                padding,
                result.value
            )?;
        }
    }

    Ok(())
}

/// Writes the results as a pretty JSON array of `{ "label", "value" }` objects.
pub fn print_json(results: &[&TransformResult], output: &mut dyn Write) -> Result<()> {
    writeln!(output, "{}", serde_json::to_string_pretty(results)?)?;
    Ok(())
}

/// Writes the catalog labels grouped by family, in catalog order.
pub fn print_catalog(
    registry: &TransformRegistry,
    output: &mut dyn Write,
    colored: bool,
) -> Result<()> {
    let mut current_family = None;

    for entry in registry.entries() {
        if current_family != Some(entry.family) {
            if current_family.is_some() {
                writeln!(output)?;
            }
            let header = entry.family.to_string();
            if colored {
                writeln!(output, "{}", Blue.bold().paint(header))?;
            } else {
                writeln!(output, "{}", header)?;
            }
            current_family = Some(entry.family);
        }
        if colored {
            writeln!(output, "  {}", Green.paint(&entry.label))?;
        } else {
            writeln!(output, "  {}", entry.label)?;
        }
    }

    Ok(())
}

fn paint_label(label: &str, colored: bool) -> String {
    if colored {
        Yellow.paint(label).to_string()
    } else {
        label.to_string()
    }
}
