//! Applies the whole catalog to one input, isolating every transform.

use crate::debug;
use crate::transforms::{Transform, TransformManager};
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

/// The outcome of one transform for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub label: String,
    /// The transform output, empty when there is no meaningful result
    pub value: String,
}

impl TransformResult {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Applies every transform of the default catalog to the input.
///
/// Never fails: a transform returning an error (or panicking) contributes an
/// empty value, and the result list always has one entry per catalog entry,
/// in catalog order.
///
/// # Examples
///
/// ```
/// use textmorph::runner::run;
///
/// let results = run("not json");
/// let pretty = results.iter().find(|r| r.label == "Prettify JSON").unwrap();
/// assert_eq!(pretty.value, "");
/// assert_eq!(results[0].label, "Raw");
/// assert_eq!(results[0].value, "not json");
/// ```
pub fn run(input: &str) -> Vec<TransformResult> {
    TransformManager::get().run(input)
}

/// Applies a single transform, turning any failure into an empty value.
///
/// Panics are caught here, but the process-wide panic hook still runs first;
/// callers that do not want the default hook's message on stderr must
/// replace it (the `textmorph` binary routes it to the debug log).
pub fn evaluate(label: &str, transform: &dyn Transform, input: &str) -> TransformResult {
    let value = match panic::catch_unwind(AssertUnwindSafe(|| transform.transform(input))) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            debug!("Transform \"{}\" failed: {}", label, err);
            String::new()
        }
        Err(_) => {
            debug!("Transform \"{}\" panicked", label);
            String::new()
        }
    };

    TransformResult {
        label: label.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn value_of<'a>(results: &'a [TransformResult], label: &str) -> &'a str {
        results
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let catalog = TransformManager::get().share();
        for input in ["", "hello", "{\"a\":1}", "\u{0}\u{FFFF}%%%"] {
            let results = run(input);
            let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
            assert_eq!(labels, catalog.labels());
        }
    }

    #[test]
    fn test_empty_input() {
        let results = run("");
        assert_eq!(value_of(&results, "Raw"), "");
        assert_eq!(value_of(&results, "Escape as JSON string"), "\"\"");
        assert_eq!(
            value_of(&results, "MD5"),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(value_of(&results, "Prettify JSON"), "");
        assert_eq!(value_of(&results, "Parse URL"), "");
    }

    #[test]
    fn test_malformed_input_yields_empty_values() {
        let results = run("not json");
        assert_eq!(value_of(&results, "Prettify JSON"), "");
        assert_eq!(value_of(&results, "Minify JSON"), "");
        assert_eq!(value_of(&results, "JSON to query string"), "");
        assert_eq!(value_of(&results, "Hex decode"), "");
        assert_eq!(value_of(&results, "Hex to decimal"), "");
        assert_eq!(value_of(&results, "Extract JWT"), "");
        assert_eq!(value_of(&results, "kebab-case"), "not-json");
        assert_eq!(value_of(&results, "SNAKE_CASE"), "NOT_JSON");
    }

    #[test]
    fn test_jwt_entries() {
        let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.sig";
        let results = run(&format!("prefix {} suffix", token));
        assert_eq!(value_of(&results, "Extract JWT"), token);

        let decoded: serde_json::Value =
            serde_json::from_str(value_of(&results, "Extract and Decode JWT")).unwrap();
        assert_eq!(decoded["header"]["alg"], "HS256");
        assert_eq!(decoded["payload"]["sub"], "1234567890");
    }

    #[test]
    fn test_hash_entries() {
        let results = run("abc");
        assert_eq!(
            value_of(&results, "SHA256"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_evaluate_isolates_panics() {
        let panicking = |_: &str| -> Result<String> { panic!("broken transform") };
        let result = evaluate("Broken", &panicking, "input");
        assert_eq!(result.label, "Broken");
        assert!(result.is_empty());

        let failing = |_: &str| -> Result<String> { Err(Error::Msg("bad".to_string())) };
        assert!(evaluate("Failing", &failing, "input").is_empty());
    }

    proptest! {
        #[test]
        fn prop_one_result_per_entry(input in any::<String>()) {
            let results = run(&input);
            prop_assert_eq!(results.len(), TransformManager::get().share().len());
            prop_assert_eq!(results[0].value.as_str(), input.as_str());
        }
    }
}
