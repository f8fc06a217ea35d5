//! Byte-level and web encodings: hex, base64, percent-encoding and HTML entities.

use crate::error::{Error, Result};
use crate::string_utils::strip_whitespace;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn hex_encode(text: &str) -> Result<String> {
    Ok(hex::encode(text.as_bytes()))
}

/// Decodes hex digits (either case) into text, replacing invalid UTF-8 with U+FFFD.
pub fn hex_decode(text: &str) -> Result<String> {
    let bytes = hex::decode(text.trim())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn base64_encode(text: &str) -> Result<String> {
    Ok(STANDARD.encode(text.as_bytes()))
}

/// Decodes base64 in the standard or URL-safe alphabet, padded or not.
///
/// Whitespace anywhere in the input is ignored so that wrapped (MIME style)
/// payloads decode as well.
pub fn base64_decode(text: &str) -> Result<String> {
    let compact = strip_whitespace(text);
    let bytes = STANDARD
        .decode(&compact)
        .or_else(|err| {
            [STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD]
                .iter()
                .find_map(|engine| engine.decode(&compact).ok())
                .ok_or(err)
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Percent-encodes the UTF-8 bytes of the input like `encodeURIComponent`.
pub fn url_encode(text: &str) -> Result<String> {
    Ok(utf8_percent_encode(text, URI_COMPONENT).to_string())
}

/// Decodes percent-encoded text, rejecting truncated escapes and invalid UTF-8.
pub fn url_decode(text: &str) -> Result<String> {
    check_percent_escapes(text)?;
    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| Error::UrlDecode(err.to_string()))
}

fn check_percent_escapes(text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit)) {
                return Err(Error::UrlDecode(format!(
                    "invalid escape sequence at byte {}",
                    i
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

pub fn html_encode(text: &str) -> Result<String> {
    Ok(html_escape::encode_safe(text).into_owned())
}

pub fn html_decode(text: &str) -> Result<String> {
    Ok(html_escape::decode_html_entities(text).into_owned())
}
