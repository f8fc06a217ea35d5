use crate::error::Result;
use strum_macros::Display;

pub mod case;
pub mod encoding;
pub mod form;
pub mod hash;
pub mod json;
pub mod jwt;
pub mod numeric;
pub mod registry;
pub mod time;
pub mod url_parser;

pub use registry::{TransformManager, TransformRegistry};

/// Trait for the text transformations listed in the catalog
///
/// Every transform is a pure function of its input: it holds no state and
/// has no side effects, so the same input always yields the same output.
pub trait Transform: Send + Sync {
    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// The transformed text, an empty string when there is no meaningful
    /// result, or an error if the input cannot be interpreted
    fn transform(&self, text: &str) -> Result<String>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn transform(&self, text: &str) -> Result<String> {
        self(text)
    }
}

/// Groups of related transforms, in catalog order
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    #[strum(serialize = "Identity")]
    Identity,
    #[strum(serialize = "Binary encodings")]
    BinaryEncoding,
    #[strum(serialize = "Web encodings")]
    WebEncoding,
    #[strum(serialize = "URL parsing")]
    UrlParsing,
    #[strum(serialize = "Time conversions")]
    Time,
    #[strum(serialize = "JSON")]
    Json,
    #[strum(serialize = "Form")]
    Form,
    #[strum(serialize = "JWT")]
    Jwt,
    #[strum(serialize = "Hashing")]
    Hashing,
    #[strum(serialize = "Case conversion")]
    Case,
    #[strum(serialize = "Numeric base conversion")]
    Numeric,
}

/// Returns the input unchanged.
pub fn raw(text: &str) -> Result<String> {
    Ok(text.to_string())
}
