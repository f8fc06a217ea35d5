use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, ColorChoice, Command,
};

pub fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .arg(
        arg!([text] ... "Text to transform (read from standard input when omitted)")
        .long_help(
            "Text to transform. Multiple values are joined with a single space. \
                    When omitted, the whole standard input is read and a single trailing \
                    newline is removed.",
        ),
    )
    .arg(
        arg!(-t --transform <LABEL> "Prints only the value of the given transform.")
        .long_help(
            "Applies a single transform and prints its raw value. The label must match \
                    one of the labels shown by --list (case-insensitive when unambiguous). \
                    Exits with an error status when the transform yields no value.",
        ),
    )
    .arg(
        arg!(-a --all "Shows every transform, including the ones without a value.")
        .long_help(
            "By default, transforms with an empty value or with a value containing \
                    invalid characters are hidden. This flag shows all of them.",
        ),
    )
    .arg(
        arg!(-j --json "Prints the results as a JSON array.")
        .long_help("Prints the (filtered) results as a pretty JSON array of label/value objects."),
    )
    .arg(
        arg!(-l --list "Lists the available transforms.")
        .long_help("Lists the labels of every transform in catalog order, grouped by family."),
    )
}
