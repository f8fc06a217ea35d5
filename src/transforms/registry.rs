use super::{case, encoding, form, hash, json, jwt, numeric, time, url_parser};
use super::{Family, Transform};
use crate::debug;
use crate::error::{Error, Result};
use crate::runner::{self, TransformResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

type TransformFn = fn(&str) -> Result<String>;

/// The built-in catalog, in display order
const DEFAULT_CATALOG: &[(&str, Family, TransformFn)] = &[
    ("Raw", Family::Identity, super::raw),
    ("Hex encode", Family::BinaryEncoding, encoding::hex_encode),
    ("Hex decode", Family::BinaryEncoding, encoding::hex_decode),
    ("Base64 encode", Family::BinaryEncoding, encoding::base64_encode),
    ("Base64 decode", Family::BinaryEncoding, encoding::base64_decode),
    ("URL encode", Family::WebEncoding, encoding::url_encode),
    ("URL decode", Family::WebEncoding, encoding::url_decode),
    ("HTML encode", Family::WebEncoding, encoding::html_encode),
    ("HTML decode", Family::WebEncoding, encoding::html_decode),
    ("Parse URL", Family::UrlParsing, url_parser::parse_url),
    ("UNIX (sec) to ISO8601", Family::Time, time::unix_seconds_to_iso8601),
    ("ISO8601 to UNIX (sec)", Family::Time, time::iso8601_to_unix_seconds),
    ("UNIX (ms) to ISO8601", Family::Time, time::unix_millis_to_iso8601),
    ("ISO8601 to UNIX (ms)", Family::Time, time::iso8601_to_unix_millis),
    ("Duration from now", Family::Time, time::duration_from_now),
    ("Prettify JSON", Family::Json, json::prettify_json),
    ("Minify JSON", Family::Json, json::minify_json),
    ("Escape as JSON string", Family::Json, json::escape_json_string),
    ("JSON to query string", Family::Form, form::json_to_query_string),
    ("Query string to JSON", Family::Form, form::query_string_to_json),
    ("Extract JWT", Family::Jwt, jwt::extract_jwt),
    ("Extract and Decode JWT", Family::Jwt, jwt::extract_and_decode_jwt),
    ("MD5", Family::Hashing, hash::md5),
    ("SHA1", Family::Hashing, hash::sha1),
    ("SHA256", Family::Hashing, hash::sha256),
    ("camelCase", Family::Case, case::camel_case),
    ("PascalCase", Family::Case, case::pascal_case),
    ("kebab-case", Family::Case, case::kebab_case),
    ("KEBAB-CASE", Family::Case, case::upper_kebab_case),
    ("snake_case", Family::Case, case::snake_case),
    ("SNAKE_CASE", Family::Case, case::upper_snake_case),
    ("dot.case", Family::Case, case::dot_case),
    ("lowercase", Family::Case, case::lowercase),
    ("UPPERCASE", Family::Case, case::uppercase),
    ("words lowercase", Family::Case, case::words_lowercase),
    ("First word capitalized", Family::Case, case::first_word_capitalized),
    ("Words Capitalized", Family::Case, case::words_capitalized),
    ("Fuzzy search regex", Family::Case, case::fuzzy_search_regex),
    ("Hex to decimal", Family::Numeric, numeric::hex_to_decimal),
    ("Decimal to hex", Family::Numeric, numeric::decimal_to_hex),
    ("Hex to binary", Family::Numeric, numeric::hex_to_binary),
    ("Binary to hex", Family::Numeric, numeric::binary_to_hex),
    ("Decimal to binary", Family::Numeric, numeric::decimal_to_binary),
    ("Binary to decimal", Family::Numeric, numeric::binary_to_decimal),
];

/// A transform registered under a unique label
pub struct Entry {
    pub label: String,
    pub family: Family,
    pub transform: Arc<dyn Transform>,
}

pub struct TransformRegistry {
    positions: HashMap<String, usize>,
    order: Vec<Entry>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Initializes the transform registry with the built-in catalog
    /// - Identity, binary and web encodings
    /// - URL parsing, time conversions, JSON and form reformatting
    /// - JWT extraction, hashing
    /// - Case conversions and numeric base conversions
    pub fn init(&mut self) -> Result<()> {
        for (label, family, transform) in DEFAULT_CATALOG {
            self.register(label, *family, *transform)?;
        }
        Ok(())
    }

    /// Appends a transform at the end of the catalog
    ///
    /// # Arguments
    /// * `label` - The unique label of the transform
    /// * `family` - The family the transform belongs to
    /// * `transform` - The transform itself
    ///
    /// # Returns
    /// An error if a transform with the same label is already registered
    pub fn register<T: Transform + 'static>(
        &mut self,
        label: &str,
        family: Family,
        transform: T,
    ) -> Result<()> {
        if self.positions.contains_key(label) {
            return Err(Error::DuplicateTransform(label.to_string()));
        }
        self.positions.insert(label.to_string(), self.order.len());
        self.order.push(Entry {
            label: label.to_string(),
            family,
            transform: Arc::new(transform),
        });
        Ok(())
    }

    /// Gets a transform by its exact label
    pub fn get(&self, label: &str) -> Option<&Arc<dyn Transform>> {
        self.positions
            .get(label)
            .map(|&position| &self.order[position].transform)
    }

    /// Finds an entry by label, falling back to a case-insensitive match
    /// when it designates a single entry (e.g. "sha256" but not "kebab-case"
    /// vs "KEBAB-CASE" typed in another case)
    pub fn find(&self, label: &str) -> Option<&Entry> {
        if let Some(&position) = self.positions.get(label) {
            return Some(&self.order[position]);
        }
        let mut matches = self
            .order
            .iter()
            .filter(|entry| entry.label.eq_ignore_ascii_case(label));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Some(entry),
            _ => None,
        }
    }

    /// Returns the registered entries in catalog order
    pub fn entries(&self) -> &[Entry] {
        &self.order
    }

    pub fn labels(&self) -> Vec<&str> {
        self.order.iter().map(|entry| entry.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Applies every registered transform to the text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// One result per registered transform, in catalog order. Failed
    /// transforms yield an empty value.
    pub fn run(&self, text: &str) -> Vec<TransformResult> {
        self.order
            .iter()
            .map(|entry| runner::evaluate(&entry.label, entry.transform.as_ref(), text))
            .collect()
    }
}

/// Global transform manager that provides thread-safe access to the shared transform registry
pub struct TransformManager {
    registry: Arc<TransformRegistry>,
}

impl TransformManager {
    /// Gets a reference to the global transform manager
    pub fn get() -> &'static TransformManager {
        static INSTANCE: Lazy<TransformManager> = Lazy::new(|| {
            let mut registry = TransformRegistry::new();
            if let Err(err) = registry.init() {
                debug!("Unable to build the default catalog: {}", err);
            }
            TransformManager {
                registry: Arc::new(registry),
            }
        });
        &INSTANCE
    }

    /// Gets a clone of the shared registry
    pub fn share(&self) -> Arc<TransformRegistry> {
        Arc::clone(&self.registry)
    }

    /// Applies every transform of the default catalog to the text
    pub fn run(&self, text: &str) -> Vec<TransformResult> {
        self.registry.run(text)
    }

    /// Gets a transform by label
    pub fn get_transform(&self, label: &str) -> Option<&Entry> {
        self.registry.find(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_catalog_order() {
        let registry = TransformManager::get().share();
        assert_eq!(registry.len(), DEFAULT_CATALOG.len());
        assert_eq!(registry.len(), 44);

        let labels = registry.labels();
        assert_eq!(
            labels[..6].to_vec(),
            vec!["Raw", "Hex encode", "Hex decode", "Base64 encode", "Base64 decode", "URL encode"]
        );
        assert_eq!(labels[15], "Prettify JSON");
        assert_eq!(labels[20], "Extract JWT");
        assert_eq!(labels[21], "Extract and Decode JWT");
        assert_eq!(labels[24], "SHA256");
        assert_eq!(labels.last(), Some(&"Binary to decimal"));
    }

    #[test]
    fn test_default_catalog_labels_are_unique() {
        let mut registry = TransformRegistry::new();
        assert!(registry.init().is_ok());
        assert!(matches!(
            registry.init(),
            Err(Error::DuplicateTransform(label)) if label == "Raw"
        ));
    }

    #[test]
    fn test_register_custom_transform() {
        let mut registry = TransformRegistry::new();
        assert!(registry.is_empty());
        registry
            .register("Reverse", Family::Identity, |text: &str| -> Result<String> {
                Ok(text.chars().rev().collect())
            })
            .unwrap();
        registry
            .register("Always fails", Family::Identity, |_: &str| -> Result<String> {
                Err(Error::Msg("nope".to_string()))
            })
            .unwrap();

        let results = registry.run("abc");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].value, "cba");
        assert_eq!(results[1].label, "Always fails");
        assert_eq!(results[1].value, "");
        assert_eq!(
            registry.get("Reverse").unwrap().transform("xy").unwrap(),
            "yx"
        );
    }

    #[test]
    fn test_find_by_label() {
        let manager = TransformManager::get();
        assert_eq!(manager.get_transform("SHA256").unwrap().label, "SHA256");
        assert_eq!(manager.get_transform("sha256").unwrap().label, "SHA256");
        assert_eq!(
            manager.get_transform("KEBAB-CASE").unwrap().family,
            Family::Case
        );
        assert!(manager.get_transform("Kebab-Case").is_none());
        assert!(manager.get_transform("unknown").is_none());
    }
}
