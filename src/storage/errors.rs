//! Error types for the object store.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by [`FileStorage`](super::FileStorage) and its attribute mapping.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An attribute the store relies on (`id`, `created_at`, `updated_at`) is absent.
    #[error("'{type_name}' object has no attribute '{attribute}'")]
    MissingAttribute { type_name: String, attribute: String },

    /// `destroy` was asked for a key that is not in the store.
    #[error("'{type_name}' has no instance with id '{id}'")]
    NoSuchInstance { type_name: String, id: String },

    /// A timestamp attribute holds something other than a native timestamp at save time.
    #[error("attribute '{attribute}' is not a timestamp")]
    InvalidTimestamp { attribute: String },

    /// Malformed snapshot content (bad timestamp string, bad key, wrong shape).
    #[error("parse error: {0}")]
    Parse(String),

    /// Snapshot file is not valid JSON, or a model could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A type name containing `.` cannot round-trip through a rendered key.
    #[error("type name '{0}' must not contain '.'")]
    InvalidTypeName(String),

    /// Type name outside the known model set.
    #[error("unknown class: {0}")]
    UnknownClass(String),
}
