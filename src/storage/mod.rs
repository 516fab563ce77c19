//! Object store: attribute mappings keyed by `<type>.<id>`, persisted as a
//! single JSON snapshot file.

mod attributes;
mod errors;
mod file_storage;
mod key;

pub use attributes::{AttrValue, Attributes, CLASS_FIELD, CREATED_AT, ID, UPDATED_AT};
pub use errors::{StorageError, StorageResult};
pub use file_storage::{FileStorage, DEFAULT_FILE_PATH};
pub use key::StoreKey;
