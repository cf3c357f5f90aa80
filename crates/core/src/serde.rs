//! Serde helpers for the wire formats of the events API.
//!
//! Dates travel as `YYYY-MM-DD` (chrono's native format); times travel as
//! `HH:MM`, with `HH:MM:SS` tolerated on input.

/// (De)serialize a [`chrono::NaiveTime`] as `HH:MM`.
pub mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_wire_time(&s).map_err(serde::de::Error::custom)
    }

    /// Parse `HH:MM` or `HH:MM:SS`.
    pub fn parse_wire_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(s, "%H:%M").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
    }
}
