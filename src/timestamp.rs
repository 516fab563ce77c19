//! Fixed-format timestamps shared by models and the snapshot file.
//!
//! Snapshot timestamps are naive local times rendered as
//! `YYYY-MM-DDTHH:MM:SS.ffffff`. Values produced by [`now`] are truncated
//! to microseconds so they survive a format/parse cycle unchanged.

use crate::storage::StorageError;
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer};

/// chrono format string for snapshot timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time at microsecond precision.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a snapshot timestamp, rejecting anything that does not match
/// [`TIMESTAMP_FORMAT`] exactly.
pub fn parse(value: &str) -> Result<NaiveDateTime, StorageError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        StorageError::Parse(format!(
            "time data '{}' does not match format '{}': {}",
            value, TIMESTAMP_FORMAT, e
        ))
    })
}

/// `#[serde(deserialize_with = "crate::timestamp::deserialize")]` adapter for
/// models rebuilt from stored attributes.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
