//! Lenient decoding of JSON input fields that are nominally strings.
//!
//! Source catalogs are scraped data: fields may be absent, `null`, or a bare
//! number. All of these decode to a `String` instead of failing the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field as a string: strings verbatim, numbers and booleans as
/// their JSON text, `null`, arrays and objects as `""`.
///
/// Pair with `#[serde(default)]` so an absent field also yields `""`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
