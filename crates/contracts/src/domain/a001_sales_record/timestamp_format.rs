//! Serde adapter for `fecha_compra`: `YYYY-MM-DD HH:MM:SS`, no timezone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(raw.trim(), FORMAT).map_err(|e| {
        serde::de::Error::custom(format!("invalid fecha_compra '{}': {}", raw, e))
    })
}
