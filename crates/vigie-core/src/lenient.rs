//! Tolerant field deserializers for intake payloads.
//!
//! Intake forms submit numbers as strings, booleans as "oui"/"non", and leave
//! fields null or missing. Every helper here maps a value it cannot read to
//! the field's default instead of failing, so a partially filled form always
//! produces a usable profile.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::intake::ScreeningRecord;

/// Integer field. Accepts numbers and numeric strings; fractions truncate.
pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).map(|n| n.trunc() as i32).unwrap_or(0))
}

/// Floating-point field. Accepts numbers and numeric strings.
pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).unwrap_or(0.0))
}

/// Boolean field. Accepts booleans, `0`/`1`, and yes/no words in English or French.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_flag(&value))
}

/// Free-text field. Numbers are rendered as text; anything else is empty.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(as_text(&value))
}

/// List of free-text entries.
///
/// Accepts an array (non-string items are dropped) or a single string holding
/// entries separated by `;` or newlines. Blank entries are removed.
pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let entries = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Value::String(s) => s
            .split([';', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };
    Ok(entries)
}

/// Enumerated field spelled as a keyword. Unrecognised or non-string values
/// fall back to the type's default (its "unknown" variant).
pub fn keyword<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> From<&'a str> + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => T::from(s.as_str()),
        _ => T::default(),
    })
}

/// Nested structure. A value of the wrong shape yields the default instead of
/// rejecting the whole payload.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Prior screenings keyed by name.
///
/// Accepts `{"name": {"date": "..."}}` as well as the shorthand
/// `{"name": "..."}`. Anything that is not an object yields an empty map.
pub fn screenings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, ScreeningRecord>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(BTreeMap::new());
    };

    let screenings = entries
        .into_iter()
        .map(|(name, entry)| {
            let date = match &entry {
                Value::Object(fields) => fields.get("date").map(as_text).unwrap_or_default(),
                other => as_text(other),
            };
            (name, ScreeningRecord { date })
        })
        .collect();
    Ok(screenings)
}

fn as_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "y" | "oui" | "o" | "1" | "on"
        ),
        _ => false,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
