//! Timestamp parsing for persisted records.
//!
//! Files written by earlier versions of the service carry ISO-8601 local
//! timestamps without an offset (`2025-01-10T09:30:00.123456`). Those are
//! read as UTC; anything with an offset is parsed as RFC 3339.

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use serde::{Deserialize, Deserializer, de};

pub fn parse(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => raw
            .parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}

/// `deserialize_with` target for `DateTime<Utc>` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| {
        let msg = format!("invalid timestamp '{raw}': {e}");
        de::Error::custom(msg)
    })
}
