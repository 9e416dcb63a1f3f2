//! Tolerant field deserializers for upstream payloads.
//!
//! The statistics API is not consistent about numeric encodings: the same
//! field may arrive as an integer, a float, a numeric string or `null`.
//! These helpers map anything they cannot interpret to `None` instead of
//! failing the whole payload. Pair them with a struct-level `#[serde(default)]`
//! so that missing keys become `None` too.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

/// Integer field. Whole floats and numeric strings are accepted.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(v)) => Some(v),
        Some(Loose::Float(v)) if v.is_finite() && v.fract() == 0.0 => Some(v as i64),
        Some(Loose::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Floating point field. Integers and numeric strings are accepted.
pub fn opt_num<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(v)) => Some(v as f64),
        Some(Loose::Float(v)) => Some(v),
        Some(Loose::Text(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Text field. Numbers are rendered to their decimal form (ids are sometimes numeric).
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Int(v)) => Some(v.to_string()),
        Some(Loose::Float(v)) => Some(v.to_string()),
        _ => None,
    })
}
