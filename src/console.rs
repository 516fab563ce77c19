//! Command handlers behind the `hbnb` binary.
//!
//! Each handler works against a single [`FileStorage`] that was reloaded when
//! the console was opened, so a `create` never clobbers objects written by an
//! earlier run.

use crate::models::{Entity, EntityKind, Model};
use crate::storage::{FileStorage, StorageError, CREATED_AT, ID, UPDATED_AT};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("** class doesn't exist **")]
    UnknownClass(String),

    #[error("** no instance found **")]
    NoInstance,

    #[error("** attribute '{0}' can't be updated **")]
    ReadOnlyAttribute(String),

    #[error("** value doesn't fit attribute '{0}' **")]
    InvalidValue(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

pub struct Console<'a> {
    storage: &'a mut FileStorage,
}

impl<'a> Console<'a> {
    /// Loads whatever the snapshot file already holds.
    pub fn open(storage: &'a mut FileStorage) -> ConsoleResult<Self> {
        storage.reload()?;
        Ok(Self { storage })
    }

    /// Creates and persists a new instance, returning its id.
    pub fn create(&mut self, class: &str) -> ConsoleResult<String> {
        let kind = parse_kind(class)?;
        let mut entity = Entity::new(kind);
        entity.save(self.storage)?;
        info!("created {}", entity.store_key());
        Ok(entity.base().id.clone())
    }

    pub fn show(&self, class: &str, id: &str) -> ConsoleResult<String> {
        let kind = parse_kind(class)?;
        let attrs = self
            .storage
            .get(kind.as_str(), id)
            .ok_or(ConsoleError::NoInstance)?;
        Ok(Entity::from_attributes(kind, attrs)?.to_string())
    }

    pub fn destroy(&mut self, class: &str, id: &str) -> ConsoleResult<()> {
        let kind = parse_kind(class)?;
        match self.storage.destroy(kind.as_str(), id) {
            Err(StorageError::NoSuchInstance { .. }) => Err(ConsoleError::NoInstance),
            other => Ok(other?),
        }
    }

    /// Every stored object, optionally restricted to one class.
    pub fn all(&mut self, class: Option<&str>) -> ConsoleResult<Vec<String>> {
        let kind = class.map(parse_kind).transpose()?;
        let rendered = self.storage.all()?;
        Ok(rendered
            .into_iter()
            .filter(|(key, _)| match kind {
                Some(k) => key.type_name() == k.as_str(),
                None => true,
            })
            .map(|(_, line)| line)
            .collect())
    }

    pub fn count(&self, class: &str) -> ConsoleResult<usize> {
        let kind = parse_kind(class)?;
        Ok(self
            .storage
            .objects()
            .keys()
            .filter(|key| key.type_name() == kind.as_str())
            .count())
    }

    /// Sets one attribute. `raw` is read as JSON when it parses as a number
    /// or boolean, as a plain string otherwise. The new value must fit the
    /// model's field type.
    pub fn update(&mut self, class: &str, id: &str, attribute: &str, raw: &str) -> ConsoleResult<()> {
        let kind = parse_kind(class)?;
        if [ID, CREATED_AT, UPDATED_AT].contains(&attribute) {
            return Err(ConsoleError::ReadOnlyAttribute(attribute.to_string()));
        }

        let value = parse_value(raw);
        let mut attrs = self
            .storage
            .get(kind.as_str(), id)
            .ok_or(ConsoleError::NoInstance)?
            .clone();
        attrs.insert(attribute, value.clone());
        Entity::from_attributes(kind, &attrs)
            .map_err(|_| ConsoleError::InvalidValue(attribute.to_string()))?;

        self.storage.update(attribute, value, kind.as_str(), id)?;
        Ok(())
    }
}

fn parse_kind(class: &str) -> ConsoleResult<EntityKind> {
    class
        .parse()
        .map_err(|_| ConsoleError::UnknownClass(class.to_string()))
}

fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Number(_) | Value::Bool(_))) => v,
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
