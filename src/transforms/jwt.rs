//! Extraction and decoding of JSON Web Tokens embedded in arbitrary text.

use crate::constants::jwt::{ISO_SUFFIX, TIME_CLAIMS};
use crate::error::{Error, Result};
use crate::transforms::time::format_iso8601;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

// Header and payload are base64url JSON objects, so both start with "eyJ" ('{"')
static JWT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"eyJ[A-Za-z0-9_-]*\.eyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_\-+/=]*").unwrap()
});

fn find_tokens(text: &str) -> Vec<&str> {
    JWT_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Returns every JWT found in the text, one per line, or an empty string if none.
pub fn extract_jwt(text: &str) -> Result<String> {
    Ok(find_tokens(text).join("\n"))
}

/// Decodes every JWT found in the text into pretty JSON, one document per token.
///
/// Tokens that do not decode are emitted as found.
pub fn extract_and_decode_jwt(text: &str) -> Result<String> {
    Ok(find_tokens(text)
        .into_iter()
        .map(|token| decode_token(token).unwrap_or_else(|_| token.to_string()))
        .collect::<Vec<String>>()
        .join("\n"))
}

/// Decodes a single `header.payload.signature` token.
///
/// # Examples
///
/// ```
/// use textmorph::transforms::jwt::decode_token;
///
/// let json = decode_token("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.sig").unwrap();
/// let value: serde_json::Value = serde_json::from_str(&json).unwrap();
/// assert_eq!(value["header"]["alg"], "HS256");
/// assert_eq!(value["payload"]["sub"], "1234567890");
/// ```
pub fn decode_token(token: &str) -> Result<String> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(Error::Jwt(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };

    let header = decode_segment(header)?;
    let mut payload = decode_segment(payload)?;
    add_iso8601_claims(&mut payload);

    Ok(serde_json::to_string_pretty(&json!({
        "header": header,
        "payload": payload,
        "signature": signature,
    }))?)
}

fn decode_segment(segment: &str) -> Result<Value> {
    let bytes = URL_SAFE_NO_PAD.decode(segment.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn add_iso8601_claims(payload: &mut Value) {
    let Some(claims) = payload.as_object_mut() else {
        return;
    };

    for claim in TIME_CLAIMS {
        let iso = claims
            .get(claim)
            .and_then(Value::as_f64)
            .and_then(|seconds| Utc.timestamp_millis_opt((seconds * 1000.0) as i64).single())
            .map(|date| format_iso8601(&date));
        if let Some(iso) = iso {
            claims.insert(format!("{}{}", claim, ISO_SUFFIX), Value::String(iso));
        }
    }
}
