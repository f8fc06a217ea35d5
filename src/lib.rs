//! `textmorph` is a library to show every useful interpretation of a piece of text.
//!
//! It applies a fixed, ordered catalog of independent transforms (encodings,
//! hashing, case conversion, numeric base conversion, timestamp conversion,
//! JSON/URL/JWT reformatting) to one input and returns one labeled result per
//! transform. A transform that cannot make sense of the input yields an empty
//! value instead of an error, so callers can simply hide it.
//!
//! The main entry point is [`runner::run`]. If you need more control (a
//! custom catalog, single transforms) start with
//! [`transforms::TransformRegistry`].
//!
//! "Hello world" example:
//! ```
//! use textmorph::runner::run;
//!
//! for result in run("Hello world").iter().filter(|r| !r.value.is_empty()) {
//!     println!("{}: {}", result.label, result.value);
//! }
//!
//! let results = run("Hello world");
//! let snake = results.iter().find(|r| r.label == "snake_case").unwrap();
//! assert_eq!(snake.value, "hello_world");
//! ```

pub mod constants;
pub mod display;
pub mod error;
pub mod log;
pub mod runner;
pub mod string_utils;
pub mod tokenizer;
pub mod transforms;

/// The textmorph prelude
///
/// This module re-exports the most commonly used items from textmorph.
/// You can use it with `use textmorph::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::error::Result;
    pub use crate::runner::TransformResult;
    pub use crate::transforms::{Family, TransformManager, TransformRegistry};

    // Re-export commonly used functions
    pub use crate::runner::run;
    pub use crate::tokenizer::split_into_words;
}
