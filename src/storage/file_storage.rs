//! JSON snapshot store for model instances.
//!
//! ## Design Decisions
//!
//! - **Explicit handle**: a `FileStorage` is built once by the caller and
//!   passed by reference to everything that needs it. There is no hidden
//!   process-wide mapping.
//! - **Full snapshot**: every `save` rewrites the whole file in place. There is
//!   no temp file, no backup and no partial write.
//! - **Refresh-then-read**: [`FileStorage::all`] reloads from disk before it
//!   renders anything, replacing the in-memory mapping.
//! - **Asymmetric misses**: `destroy` on an unknown key is an error while
//!   `update` on an unknown key does nothing.

use super::attributes::{AttrValue, Attributes, CREATED_AT, ID, UPDATED_AT};
use super::errors::{StorageError, StorageResult};
use super::key::StoreKey;
use crate::config::StorageConfig;
use crate::models::Model;
use crate::timestamp;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Snapshot file used when no path is injected.
pub const DEFAULT_FILE_PATH: &str = "file.json";

#[derive(Debug, Clone)]
pub struct FileStorage {
    file_path: PathBuf,
    objects: BTreeMap<StoreKey, Attributes>,
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::with_path(DEFAULT_FILE_PATH)
    }
}

impl FileStorage {
    /// Empty store backed by `path`. Nothing is read until [`reload`](Self::reload).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
            objects: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::with_path(config.file_path.clone())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// In-memory mapping as it stands, without touching the file.
    pub fn objects(&self) -> &BTreeMap<StoreKey, Attributes> {
        &self.objects
    }

    pub fn get(&self, type_name: &str, id: &str) -> Option<&Attributes> {
        self.objects.get(&StoreKey::new(type_name, id))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Reloads from disk, then renders every entry as
    /// `[<type>] (<id>) <attributes>`.
    ///
    /// This is a side-effecting read: the in-memory mapping is replaced by the
    /// file's content whenever the file exists.
    pub fn all(&mut self) -> StorageResult<BTreeMap<StoreKey, String>> {
        self.reload()?;

        Ok(self
            .objects
            .iter()
            .map(|(key, attrs)| {
                let rendered = format!("[{}] ({}) {}", key.type_name(), key.id(), attrs);
                (key.clone(), rendered)
            })
            .collect())
    }

    /// Registers `model` under `<type name>.<id>`, overwriting any previous
    /// entry. Does not write the file.
    #[allow(clippy::new_ret_no_self)]
    pub fn new<M: Model + ?Sized>(&mut self, model: &M) -> StorageResult<StoreKey> {
        if model.type_name().contains('.') {
            return Err(StorageError::InvalidTypeName(model.type_name().to_string()));
        }

        let attributes = model.attributes();
        let id = attributes
            .id()
            .ok_or_else(|| StorageError::MissingAttribute {
                type_name: model.type_name().to_string(),
                attribute: ID.to_string(),
            })?;

        let key = StoreKey::new(model.type_name(), id);
        debug!("registering {}", key);
        self.objects.insert(key.clone(), attributes);
        Ok(key)
    }

    /// Writes the whole mapping to the snapshot file, replacing its content.
    pub fn save(&self) -> StorageResult<()> {
        let mut snapshot = Map::new();
        for (key, attrs) in &self.objects {
            let entry = attrs.to_snapshot_object(key.type_name())?;
            snapshot.insert(key.to_string(), Value::Object(entry));
        }

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string(&Value::Object(snapshot))?;
        fs::write(&self.file_path, content)?;

        debug!(
            "saved {} objects to {}",
            self.objects.len(),
            self.file_path.display()
        );
        Ok(())
    }

    /// Replaces the in-memory mapping with the snapshot file's content.
    ///
    /// A missing file leaves the store untouched. Any malformed entry fails
    /// the whole reload and the store keeps its previous content.
    pub fn reload(&mut self) -> StorageResult<()> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no snapshot at {}, nothing to reload", self.file_path.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let raw: Map<String, Value> = serde_json::from_str(&content)?;

        let mut objects = BTreeMap::new();
        for (raw_key, value) in raw {
            let key = StoreKey::parse(&raw_key)?;
            let Value::Object(entry) = value else {
                return Err(StorageError::Parse(format!(
                    "entry '{}' is not a JSON object",
                    raw_key
                )));
            };
            let attrs = Attributes::from_snapshot_object(key.type_name(), entry)?;
            objects.insert(key, attrs);
        }

        debug!(
            "reloaded {} objects from {}",
            objects.len(),
            self.file_path.display()
        );
        self.objects = objects;
        Ok(())
    }

    /// Removes `<type_name>.<id>` and persists the change.
    pub fn destroy(&mut self, type_name: &str, id: &str) -> StorageResult<()> {
        let key = StoreKey::new(type_name, id);
        if self.objects.remove(&key).is_none() {
            return Err(StorageError::NoSuchInstance {
                type_name: type_name.to_string(),
                id: id.to_string(),
            });
        }

        debug!("destroyed {}", key);
        self.save()
    }

    /// Whether `<type_name>.<id>` is currently in memory.
    pub fn validate_id(&self, type_name: &str, id: &str) -> bool {
        self.objects.contains_key(&StoreKey::new(type_name, id))
    }

    /// Sets one attribute, refreshes `updated_at` and persists.
    ///
    /// An unknown `<type_name>.<id>` is silently ignored. A non-timestamp
    /// value for `created_at`/`updated_at` is rejected before anything changes.
    pub fn update(
        &mut self,
        attribute: &str,
        value: impl Into<AttrValue>,
        type_name: &str,
        id: &str,
    ) -> StorageResult<()> {
        let value = value.into();
        let is_timestamp_field = attribute == CREATED_AT || attribute == UPDATED_AT;
        if is_timestamp_field && value.as_timestamp().is_none() {
            return Err(StorageError::InvalidTimestamp {
                attribute: attribute.to_string(),
            });
        }

        let key = StoreKey::new(type_name, id);
        let Some(attrs) = self.objects.get_mut(&key) else {
            debug!("update skipped, no instance {}", key);
            return Ok(());
        };

        attrs.insert(attribute, value);
        attrs.insert(UPDATED_AT, timestamp::now());
        debug!("updated {}.{}", key, attribute);
        self.save()
    }
}

#[cfg(test)]
#[path = "tests/file_storage_tests.rs"]
mod tests;
