//! Domain models handed to the object store.
//!
//! Every model embeds a [`BaseModel`] (id plus timestamps plus free-form
//! extra attributes) and adds its own fixed field set. The store only sees a
//! model through the [`Model`] trait: a type name and a flat [`Attributes`]
//! mapping.

mod amenity;
mod base_model;
mod city;
mod entity;
mod place;
mod review;
mod state;
mod user;

pub use amenity::Amenity;
pub use base_model::BaseModel;
pub use city::City;
pub use entity::{Entity, EntityKind};
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;

use crate::storage::{Attributes, FileStorage, StorageResult, StoreKey, CLASS_FIELD};
use crate::timestamp;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// What the store needs from an entity.
pub trait Model {
    /// Type name used as the store key prefix and as `__class__`.
    fn type_name(&self) -> &'static str;

    /// Full state as a flat mapping, timestamps as native values.
    fn attributes(&self) -> Attributes;

    fn base(&self) -> &BaseModel;

    fn base_mut(&mut self) -> &mut BaseModel;

    fn store_key(&self) -> StoreKey {
        StoreKey::new(self.type_name(), self.base().id.clone())
    }

    /// `[<type>] (<id>) <attributes>`
    fn describe(&self) -> String {
        format!(
            "[{}] ({}) {}",
            self.type_name(),
            self.base().id,
            self.attributes()
        )
    }

    /// JSON form with `__class__` and string timestamps.
    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = self.attributes().to_json_map();
        dict.insert(
            CLASS_FIELD.to_string(),
            Value::String(self.type_name().to_string()),
        );
        dict
    }

    /// Refreshes `updated_at`, registers the model and writes the snapshot.
    fn save(&mut self, storage: &mut FileStorage) -> StorageResult<()> {
        self.base_mut().updated_at = timestamp::now();
        storage.new(&*self)?;
        storage.save()
    }

    /// Sets any attribute by name. Fixed fields are type-checked; unknown
    /// names land in the free-form extras.
    fn set(&mut self, name: &str, value: Value) -> StorageResult<()>
    where
        Self: Sized + DeserializeOwned,
    {
        let mut attrs = self.attributes();
        attrs.insert(name, value);
        *self = decode(&attrs)?;
        Ok(())
    }
}

/// Rebuilds a typed model from a stored attribute mapping.
pub(crate) fn decode<M: DeserializeOwned>(attrs: &Attributes) -> StorageResult<M> {
    Ok(serde_json::from_value(Value::Object(attrs.to_json_map()))?)
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
