//! Cake model definitions and wire formats.
//!
//! # Purpose
//! Defines the full cake record, the reduced list projection, and the
//! client-writable field set accepted by create and update.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full cake record as stored and returned by get/create/update.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Cake {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub image: String,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, example = "2026-01-02 15:04:05")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, example = "2026-01-02 15:04:05")]
    pub updated_at: DateTime<Utc>,
}

/// Reduced projection returned by the list endpoint. Omits description and
/// timestamps.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct CakeSummary {
    pub id: i64,
    pub title: String,
    pub rating: f64,
    pub image: String,
}

/// Client-writable fields shared by create and update.
///
/// Every field defaults so sparse bodies are accepted; unknown fields are
/// ignored. An empty title is not rejected.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default)]
pub struct CakeDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
}

/// Fixed `YYYY-MM-DD HH:MM:SS` rendering used for both cake timestamps.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&value, FORMAT).map_err(de::Error::custom)?;
        Ok(naive.and_utc())
    }
}
