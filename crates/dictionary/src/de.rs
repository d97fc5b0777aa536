//! Forgiving decoders for the loosely typed lookup payloads.
//!
//! A field holding the wrong JSON type is treated as absent and a list element
//! that does not fit is dropped, so one malformed part never discards the rest
//! of a response.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(fitting(items))),
        _ => Ok(None),
    }
}

/// Keeps the elements that decode as `T`, in order.
pub(crate) fn fitting<T>(items: Vec<Value>) -> Vec<T>
where
    T: DeserializeOwned,
{
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

pub(crate) fn or_default<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_default()
}

/// Empty strings count as missing, the same as an absent field.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}
