use std::io::{self, IsTerminal, Read, Write};

use crate::clap_app;
use clap::ArgMatches;
use textmorph::{
    debug,
    display::{print_catalog, print_json, print_results, visible_results},
    error::*,
    runner,
    transforms::TransformManager,
};

pub struct App {
    pub matches: ArgMatches,
    interactive_output: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
            interactive_output,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Retrieves the text to transform, either from the command line arguments
    /// (joined with spaces) or from the standard input.
    ///
    /// # Returns
    /// A `Result` containing the input text.
    fn read_input(&self) -> Result<String> {
        if let Some(values) = self.matches.get_many::<String>("text") {
            return Ok(values.map(|s| s.as_str()).collect::<Vec<&str>>().join(" "));
        }

        let mut input = String::new();
        io::stdin().lock().read_to_string(&mut input)?;
        Ok(strip_trailing_newline(input))
    }

    /// Start the application, reading the input and printing the transform results.
    ///
    /// # Returns
    /// A `Result` indicating whether the application produced the requested output.
    pub fn start(&self) -> Result<bool> {
        let manager = TransformManager::get();
        let colored = self.interactive_output && !clap_app::env_no_color();
        let stdout = io::stdout();
        let mut output = stdout.lock();

        if self.matches.get_flag("list") {
            print_catalog(&manager.share(), &mut output, colored)?;
            return Ok(true);
        }

        let input = self.read_input()?;
        debug!("Read {} bytes of input", input.len());

        if let Some(label) = self.matches.get_one::<String>("transform") {
            let entry = manager.get_transform(label).ok_or_else(|| {
                Error::ArgsProcessingError(format!(
                    "Unknown transform \"{}\" (use --list to see the available transforms)",
                    label
                ))
            })?;
            let result = runner::evaluate(&entry.label, entry.transform.as_ref(), &input);
            writeln!(output, "{}", result.value)?;
            return Ok(!result.is_empty());
        }

        let results = manager.run(&input);
        let shown = visible_results(&results, self.matches.get_flag("all"));
        if self.matches.get_flag("json") {
            print_json(&shown, &mut output)?;
        } else {
            print_results(&shown, &mut output, colored)?;
        }
        output.flush()?;

        Ok(true)
    }
}

/// Removes a single trailing newline (`\n` or `\r\n`), as added by `echo` or editors.
fn strip_trailing_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}
