use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("TEXTMORPH_DEBUG")
        .map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Logs a debug message with optional formatted arguments to stderr.
///
/// Standard output is reserved for transform results, so debug traces never
/// mix with them.
///
/// # Examples
///
/// ```
/// use textmorph::debug;
///
/// // Only printed (in yellow) when TEXTMORPH_DEBUG is "true" or "1"
/// debug!("Catalog ready");
/// debug!("Transform \"{}\" failed: {}", "Hex decode", "odd length");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
