use super::{BaseModel, Model};
use crate::storage::Attributes;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub name: String,
}

impl Amenity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for Amenity {
    fn type_name(&self) -> &'static str {
        "Amenity"
    }

    fn attributes(&self) -> Attributes {
        let mut attrs = self.base.attributes();
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

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
