//! Word tokenizer shared by the case conversion transforms.
//!
//! The scanner classifies every grapheme by its base character, so combining
//! marks stay attached to the letter they decorate, and cuts the input at:
//! - runs of non-alphanumeric characters (dropped)
//! - lowercase → uppercase transitions (`fooBar` → `foo`, `Bar`)
//! - letter ↔ digit transitions (`v2beta` → `v`, `2`, `beta`)
//! - the last capital of an acronym followed by a lowercase letter
//!   (`HTTPServer` → `HTTP`, `Server`)

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    /// Lowercase letters and letters without case
    Lower,
    Digit,
    Separator,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_numeric() {
            CharClass::Digit
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_alphabetic() {
            CharClass::Lower
        } else {
            CharClass::Separator
        }
    }

    fn of_grapheme(grapheme: &str) -> Self {
        grapheme
            .chars()
            .next()
            .map_or(CharClass::Separator, CharClass::of)
    }

    fn is_letter(self) -> bool {
        matches!(self, CharClass::Upper | CharClass::Lower)
    }
}

/// Splits the given text into case and boundary aware words.
///
/// # Arguments
/// * `text` - Any text, possibly empty
///
/// # Returns
/// The ordered, non-empty word tokens found in the text
///
/// # Examples
///
/// ```
/// use textmorph::tokenizer::split_into_words;
///
/// assert_eq!(split_into_words("HTTPServer"), vec!["HTTP", "Server"]);
/// assert_eq!(split_into_words("foo_bar-baz"), vec!["foo", "bar", "baz"]);
/// assert!(split_into_words("  --  ").is_empty());
/// ```
pub fn split_into_words(text: &str) -> Vec<String> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = CharClass::Separator;

    for (i, &grapheme) in graphemes.iter().enumerate() {
        let class = CharClass::of_grapheme(grapheme);

        if class == CharClass::Separator {
            flush(&mut words, &mut current);
            prev = class;
            continue;
        }

        let boundary = match (prev, class) {
            (CharClass::Lower, CharClass::Upper) => true,
            (CharClass::Digit, next) if next.is_letter() => true,
            (last, CharClass::Digit) if last.is_letter() => true,
            (CharClass::Upper, CharClass::Upper) => graphemes
                .get(i + 1)
                .is_some_and(|&next| CharClass::of_grapheme(next) == CharClass::Lower),
            _ => false,
        };

        if boundary {
            flush(&mut words, &mut current);
        }
        current.push_str(grapheme);
        prev = class;
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
