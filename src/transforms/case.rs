//! Case conversions built on top of the word tokenizer.

use crate::error::Result;
use crate::string_utils::capitalize;
use crate::tokenizer::split_into_words;

/// Tokenizes the text, maps every word and joins them with the separator
fn convert_words<F>(text: &str, separator: &str, mut convert: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    split_into_words(text)
        .iter()
        .enumerate()
        .map(|(i, word)| convert(i, word))
        .collect::<Vec<String>>()
        .join(separator)
}

/// `fooBar`: first word lowercased, following words capitalized.
pub fn camel_case(text: &str) -> Result<String> {
    Ok(convert_words(text, "", |i, word| {
        if i == 0 {
            word.to_lowercase()
        } else {
            capitalize(word)
        }
    }))
}

pub fn pascal_case(text: &str) -> Result<String> {
    Ok(convert_words(text, "", |_, word| capitalize(word)))
}

pub fn kebab_case(text: &str) -> Result<String> {
    Ok(convert_words(text, "-", |_, word| word.to_lowercase()))
}

pub fn upper_kebab_case(text: &str) -> Result<String> {
    Ok(convert_words(text, "-", |_, word| word.to_uppercase()))
}

pub fn snake_case(text: &str) -> Result<String> {
    Ok(convert_words(text, "_", |_, word| word.to_lowercase()))
}

pub fn upper_snake_case(text: &str) -> Result<String> {
    Ok(convert_words(text, "_", |_, word| word.to_uppercase()))
}

pub fn dot_case(text: &str) -> Result<String> {
    Ok(convert_words(text, ".", |_, word| word.to_lowercase()))
}

pub fn lowercase(text: &str) -> Result<String> {
    Ok(text.to_lowercase())
}

pub fn uppercase(text: &str) -> Result<String> {
    Ok(text.to_uppercase())
}

pub fn words_lowercase(text: &str) -> Result<String> {
    Ok(convert_words(text, " ", |_, word| word.to_lowercase()))
}

/// Capitalizes the first word only, leaving the rest untouched.
pub fn first_word_capitalized(text: &str) -> Result<String> {
    Ok(convert_words(text, " ", |i, word| {
        if i == 0 {
            capitalize(word)
        } else {
            word.to_string()
        }
    }))
}

pub fn words_capitalized(text: &str) -> Result<String> {
    Ok(convert_words(text, " ", |_, word| capitalize(word)))
}

/// Joins the words with `.*`, handy for fuzzy searching in editors.
pub fn fuzzy_search_regex(text: &str) -> Result<String> {
    Ok(convert_words(text, ".*", |_, word| word.to_string()))
}
