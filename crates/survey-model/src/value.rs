//! Loosely typed cell values.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A raw count as it appears in the document.
///
/// Counts are usually JSON numbers, but the upstream exporter occasionally
/// writes them as strings. Anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawValue {
    /// Numeric reading of the value.
    ///
    /// Text counts only when the whole trimmed string parses as a finite float.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(value) => Some(*value),
            RawValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            RawValue::Other(_) => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(value) => write!(f, "{value}"),
            RawValue::Text(text) => f.write_str(text),
            RawValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Deserialize `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
