use super::{BaseModel, Model};
use crate::storage::Attributes;
use serde::Deserialize;
use std::fmt;

/// A user's review of a place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

impl Review {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for Review {
    fn type_name(&self) -> &'static str {
        "Review"
    }

    fn attributes(&self) -> Attributes {
        let mut attrs = self.base.attributes();
        attrs.insert("place_id", self.place_id.as_str());
        attrs.insert("user_id", self.user_id.as_str());
        attrs.insert("text", self.text.as_str());
        attrs
    }

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
