use super::{BaseModel, Model};
use crate::storage::Attributes;
use serde::Deserialize;
use std::fmt;

/// A city, linked to its [`State`](super::State) by `state_id`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub state_id: String,
    #[serde(default)]
    pub name: String,
}

impl City {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for City {
    fn type_name(&self) -> &'static str {
        "City"
    }

    fn attributes(&self) -> Attributes {
        let mut attrs = self.base.attributes();
        attrs.insert("state_id", self.state_id.as_str());
        attrs.insert("name", self.name.as_str());
        attrs
    }

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
