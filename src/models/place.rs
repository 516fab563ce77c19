use super::{BaseModel, Model};
use crate::storage::Attributes;
use serde::Deserialize;
use serde_json::json;
use std::fmt;

/// A rentable place, owned by a user and located in a city.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub city_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    /// Ids of linked [`Amenity`](super::Amenity) records.
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

impl Place {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for Place {
    fn type_name(&self) -> &'static str {
        "Place"
    }

    fn attributes(&self) -> Attributes {
        let mut attrs = self.base.attributes();
        attrs.insert("city_id", self.city_id.as_str());
        attrs.insert("user_id", self.user_id.as_str());
        attrs.insert("name", self.name.as_str());
        attrs.insert("description", self.description.as_str());
        attrs.insert("number_rooms", json!(self.number_rooms));
        attrs.insert("number_bathrooms", json!(self.number_bathrooms));
        attrs.insert("max_guest", json!(self.max_guest));
        attrs.insert("price_by_night", json!(self.price_by_night));
        attrs.insert("latitude", json!(self.latitude));
        attrs.insert("longitude", json!(self.longitude));
        attrs.insert("amenity_ids", json!(self.amenity_ids));
        attrs
    }

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
#[path = "tests/place_tests.rs"]
mod tests;
