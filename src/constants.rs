//! Module for shared constants used across the codebase

pub mod numeric {
    /// Number of binary digits per space-separated group
    pub const BINARY_GROUP_WIDTH: usize = 8;
}

pub mod jwt {
    /// Registered claims holding NumericDate values that get an ISO8601 companion field
    pub const TIME_CLAIMS: [&str; 3] = ["iat", "nbf", "exp"];

    /// Suffix appended to a time claim name for its ISO8601 companion field
    pub const ISO_SUFFIX: &str = "_iso8601";
}

pub mod time {
    /// Maximum number of units listed in a humanized duration
    pub const MAX_DURATION_UNITS: usize = 3;

    /// Unit names and their length in seconds, largest first
    pub const DURATION_UNITS: [(&str, i64); 6] = [
        ("year", 365 * 24 * 60 * 60),
        ("month", 30 * 24 * 60 * 60),
        ("day", 24 * 60 * 60),
        ("hour", 60 * 60),
        ("minute", 60),
        ("second", 1),
    ];
}

pub mod form {
    /// Highest array index honoured when rebuilding arrays from bracketed keys
    pub const MAX_ARRAY_INDEX: usize = 20;

    /// Bracket segments split off a key; anything deeper stays one literal segment
    pub const MAX_DEPTH: usize = 5;
}

pub mod display {
    /// Character produced by lossy UTF-8 decoding, hidden by the default view
    pub const REPLACEMENT_CHAR: char = '\u{FFFD}';
}
