//! Conversions between JSON documents and nested (bracketed) query strings.
//!
//! Nested objects are flattened as `a[b][c]=1`, arrays as `a[0]=1&a[1]=2`.
//! Parsing goes the other way: bracketed keys build nested objects, `a[]`
//! appends to an array, repeated plain keys collect into an array and
//! objects keyed only by small indices become arrays again.

use crate::constants::form::{MAX_ARRAY_INDEX, MAX_DEPTH};
use crate::error::Result;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Value};
use url::form_urlencoded;

/// RFC 3986 unreserved characters are the only ones left as-is
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}

/// Flattens a JSON object (or array) into a nested query string.
///
/// Scalars at the top level have no key to attach to and yield an empty string.
///
/// # Examples
///
/// ```
/// use textmorph::transforms::form::json_to_query_string;
///
/// assert_eq!(
///     json_to_query_string(r#"{"a":{"b":1},"tags":["x","y"]}"#).unwrap(),
///     "a[b]=1&tags[0]=x&tags[1]=y"
/// );
/// ```
pub fn json_to_query_string(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    let mut pairs = Vec::new();

    match &value {
        Value::Object(map) => map
            .iter()
            .for_each(|(key, item)| flatten(&encode(key), item, &mut pairs)),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .for_each(|(i, item)| flatten(&i.to_string(), item, &mut pairs)),
        _ => return Ok(String::new()),
    }

    Ok(pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<String>>()
        .join("&"))
}

fn flatten(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => map.iter().for_each(|(key, item)| {
            flatten(&format!("{}[{}]", prefix, encode(key)), item, pairs)
        }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .for_each(|(i, item)| flatten(&format!("{}[{}]", prefix, i), item, pairs)),
        Value::Null => pairs.push((prefix.to_string(), String::new())),
        Value::String(s) => pairs.push((prefix.to_string(), encode(s))),
        other => pairs.push((prefix.to_string(), encode(&other.to_string()))),
    }
}

/// Parses a (possibly `?`-prefixed) query string into pretty-printed JSON.
///
/// # Examples
///
/// ```
/// use textmorph::transforms::form::query_string_to_json;
///
/// let json = query_string_to_json("?user[name]=Ada+L&ids[]=1&ids[]=2").unwrap();
/// let value: serde_json::Value = serde_json::from_str(&json).unwrap();
/// assert_eq!(value["user"]["name"], "Ada L");
/// assert_eq!(value["ids"], serde_json::json!(["1", "2"]));
/// ```
pub fn query_string_to_json(text: &str) -> Result<String> {
    let query = text.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut root = Map::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key.is_empty() {
            continue;
        }
        insert(&mut root, &split_key(&key), Value::String(value.into_owned()));
    }

    let root = root
        .into_iter()
        .map(|(key, value)| (key, compact_arrays(value)))
        .collect::<Map<String, Value>>();
    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

/// Splits `a[b][]` into `["a", "b", ""]`. Keys that are not well formed
/// bracket paths are kept whole.
///
/// At most `MAX_DEPTH` bracket segments are split off; the remainder of a
/// deeper key becomes one literal segment (`a[1][2][3][4][5][6][7]` ends
/// with `"[6][7]"`), which bounds the nesting of the parsed document.
fn split_key(key: &str) -> Vec<String> {
    let Some(open) = key.find('[').filter(|&pos| pos > 0) else {
        return vec![key.to_string()];
    };

    let mut segments = vec![key[..open].to_string()];
    let mut rest = &key[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        if segments.len() > MAX_DEPTH {
            segments.push(rest.to_string());
            return segments;
        }
        match inner.find(']') {
            Some(close) => {
                segments.push(inner[..close].to_string());
                rest = &inner[close + 1..];
            }
            None => return vec![key.to_string()],
        }
    }

    if rest.is_empty() {
        segments
    } else {
        vec![key.to_string()]
    }
}

fn insert(map: &mut Map<String, Value>, path: &[String], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        match map.get_mut(head) {
            None => {
                map.insert(head.clone(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let previous = existing.take();
                *existing = Value::Array(vec![previous, value]);
            }
        }
        return;
    }

    let node = map.entry(head.clone()).or_insert(Value::Null);
    if rest[0].is_empty() {
        let items = as_array(node);
        if rest.len() == 1 {
            items.push(value);
        } else {
            let mut child = Map::new();
            insert(&mut child, &rest[1..], value);
            items.push(Value::Object(child));
        }
    } else {
        insert(as_object(node), rest, value);
    }
}

fn as_array(node: &mut Value) -> &mut Vec<Value> {
    match node.take() {
        Value::Array(items) => *node = Value::Array(items),
        Value::Null => *node = Value::Array(Vec::new()),
        other => *node = Value::Array(vec![other]),
    }
    match node {
        Value::Array(items) => items,
        _ => unreachable!("node was just replaced with an array"),
    }
}

fn as_object(node: &mut Value) -> &mut Map<String, Value> {
    match node.take() {
        Value::Object(map) => *node = Value::Object(map),
        Value::Null => *node = Value::Object(Map::new()),
        Value::Array(items) => {
            *node = Value::Object(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item))
                    .collect(),
            )
        }
        other => *node = Value::Object(Map::from_iter([("0".to_string(), other)])),
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced with an object"),
    }
}

/// Turns objects keyed only by indices up to `MAX_ARRAY_INDEX` into arrays
/// ordered by index.
fn compact_arrays(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let indices: Option<Vec<usize>> = map
                .keys()
                .map(|key| key.parse::<usize>().ok().filter(|&i| i <= MAX_ARRAY_INDEX))
                .collect();
            match indices {
                Some(indices) if !map.is_empty() => {
                    let mut indexed: Vec<(usize, Value)> = indices
                        .into_iter()
                        .zip(map.into_iter().map(|(_, item)| compact_arrays(item)))
                        .collect();
                    indexed.sort_by_key(|(i, _)| *i);
                    Value::Array(indexed.into_iter().map(|(_, item)| item).collect())
                }
                _ => Value::Object(
                    map.into_iter()
                        .map(|(key, item)| (key, compact_arrays(item)))
                        .collect(),
                ),
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(compact_arrays).collect()),
        other => other,
    }
}
