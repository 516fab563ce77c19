//! The per-entity attribute mapping held by the store.
//!
//! In memory, `created_at` and `updated_at` are native timestamps; on disk
//! they are fixed-format strings and the mapping carries an extra
//! `__class__` field. [`Attributes::to_snapshot_object`] and
//! [`Attributes::from_snapshot_object`] convert between the two.

use super::errors::{StorageError, StorageResult};
use crate::timestamp;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

pub const ID: &str = "id";
pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";
/// Snapshot-only field naming the entity type.
pub const CLASS_FIELD: &str = "__class__";

const TIMESTAMP_FIELDS: [&str; 2] = [CREATED_AT, UPDATED_AT];

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Timestamp(NaiveDateTime),
    Json(Value),
}

impl AttrValue {
    pub fn as_timestamp(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            Self::Json(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// JSON form of the value; timestamps render in the snapshot format.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Timestamp(ts) => Value::String(timestamp::format(ts)),
            Self::Json(v) => v.clone(),
        }
    }
}

impl From<NaiveDateTime> for AttrValue {
    fn from(ts: NaiveDateTime) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Value> for AttrValue {
    fn from(v: Value) -> Self {
        Self::Json(v)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Json(Value::String(s.to_string()))
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Json(Value::String(s))
    }
}

/// Flat mapping from attribute name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.0.iter()
    }

    /// The `id` attribute rendered as a string, if present.
    ///
    /// Non-string ids are stringified the same way they would be printed.
    pub fn id(&self) -> Option<String> {
        match self.0.get(ID)?.to_json() {
            Value::String(s) => Some(s),
            v => Some(v.to_string()),
        }
    }

    /// JSON object with timestamps formatted, without `__class__`.
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }

    /// Converts to the on-disk entry: string timestamps plus `__class__`.
    ///
    /// Both timestamp attributes must be present and hold native timestamps.
    pub fn to_snapshot_object(&self, type_name: &str) -> StorageResult<Map<String, Value>> {
        for field in TIMESTAMP_FIELDS {
            match self.0.get(field) {
                Some(AttrValue::Timestamp(_)) => {}
                Some(AttrValue::Json(_)) => {
                    return Err(StorageError::InvalidTimestamp {
                        attribute: field.to_string(),
                    })
                }
                None => {
                    return Err(StorageError::MissingAttribute {
                        type_name: type_name.to_string(),
                        attribute: field.to_string(),
                    })
                }
            }
        }

        let mut obj = self.to_json_map();
        obj.insert(CLASS_FIELD.to_string(), Value::String(type_name.to_string()));
        Ok(obj)
    }

    /// Rebuilds a mapping from an on-disk entry, parsing both timestamps and
    /// dropping `__class__`.
    pub fn from_snapshot_object(type_name: &str, obj: Map<String, Value>) -> StorageResult<Self> {
        let mut attrs = BTreeMap::new();

        for (name, value) in obj {
            if name == CLASS_FIELD {
                continue;
            }
            let value = if TIMESTAMP_FIELDS.contains(&name.as_str()) {
                match value {
                    Value::String(raw) => AttrValue::Timestamp(timestamp::parse(&raw)?),
                    other => {
                        return Err(StorageError::Parse(format!(
                            "attribute '{}' of '{}' must be a timestamp string, got {}",
                            name, type_name, other
                        )))
                    }
                }
            } else {
                AttrValue::Json(value)
            };
            attrs.insert(name, value);
        }

        for field in TIMESTAMP_FIELDS {
            if !attrs.contains_key(field) {
                return Err(StorageError::MissingAttribute {
                    type_name: type_name.to_string(),
                    attribute: field.to_string(),
                });
            }
        }

        Ok(Self(attrs))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.to_json_map()))
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "tests/attributes_tests.rs"]
mod tests;
