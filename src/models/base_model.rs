use super::Model;
use crate::storage::{Attributes, CREATED_AT, ID, UPDATED_AT};
use crate::timestamp;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Identity and timestamps shared by every model, plus user-defined
/// attributes that have no fixed field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BaseModel {
    pub id: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: NaiveDateTime,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BaseModel {
    /// Fresh model with a random UUID v4 id and `created_at == updated_at`.
    pub fn new() -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for BaseModel {
    fn type_name(&self) -> &'static str {
        "BaseModel"
    }

    fn attributes(&self) -> Attributes {
        let mut attrs: Attributes = self
            .extra
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        attrs.insert(ID, self.id.as_str());
        attrs.insert(CREATED_AT, self.created_at);
        attrs.insert(UPDATED_AT, self.updated_at);
        attrs
    }

    fn base(&self) -> &BaseModel {
        self
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        self
    }
}

impl fmt::Display for BaseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
#[path = "tests/base_model_tests.rs"]
mod tests;
