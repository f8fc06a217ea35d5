mod app;
mod clap_app;

use std::io;
use std::panic;
use std::process;

use app::App;
use textmorph::debug;
use textmorph::error::*;

/// Reports panics through the debug log only.
///
/// Every transform runs isolated, so a panicking one already shows up as an
/// empty result; the default hook would still print its message to stderr
/// in the middle of the output.
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        debug!("{}", info);
    }));
}

/// Returns `Err(..)` upon fatal errors, `Ok(false)` when the requested
/// transform produced no value and `Ok(true)` otherwise.
fn run() -> Result<bool> {
    App::new()?.start()
}

fn main() {
    install_panic_hook();

    let code = match run() {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            default_error_handler(&error, &mut io::stderr().lock());
            1
        }
    };
    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmorph::runner::evaluate;

    #[test]
    fn test_quiet_hook_keeps_panics_isolated() {
        install_panic_hook();
        let panicking = |_: &str| -> Result<String> { panic!("broken transform") };
        let result = evaluate("Broken", &panicking, "input");
        let _ = panic::take_hook();

        assert_eq!(result.label, "Broken");
        assert!(result.is_empty());
    }
}
