//! Composite `<type name>.<id>` store keys.

use super::errors::StorageError;
use std::fmt;
use std::str::FromStr;

/// Key under which an entity's attributes live in the store.
///
/// The type name is part of the key, so entities of different types never
/// collide even when their ids are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreKey {
    type_name: String,
    id: String,
}

impl StoreKey {
    /// `type_name` must not contain `.`, otherwise the rendered key parses
    /// back with a different split. [`FileStorage::new`](super::FileStorage::new)
    /// refuses such names, so no stored key ever holds one.
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }

    /// Splits a rendered key on its first `.`; ids may themselves contain dots.
    pub fn parse(raw: &str) -> Result<Self, StorageError> {
        match raw.split_once('.') {
            Some((type_name, id)) if !type_name.is_empty() => Ok(Self::new(type_name, id)),
            _ => Err(StorageError::Parse(format!(
                "store key '{}' is not of the form <type>.<id>",
                raw
            ))),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.id)
    }
}

impl FromStr for StoreKey {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "tests/key_tests.rs"]
mod tests;
