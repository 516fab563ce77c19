use super::{BaseModel, Model};
use crate::storage::Attributes;
use serde::Deserialize;
use std::fmt;

/// A registered account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for User {
    fn type_name(&self) -> &'static str {
        "User"
    }

    fn attributes(&self) -> Attributes {
        let mut attrs = self.base.attributes();
        attrs.insert("email", self.email.as_str());
        attrs.insert("password", self.password.as_str());
        attrs.insert("first_name", self.first_name.as_str());
        attrs.insert("last_name", self.last_name.as_str());
        attrs
    }

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
