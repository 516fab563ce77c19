//! Persistence layer for HBnB domain objects.
//!
//! - [`storage::FileStorage`] keeps every object's attributes under a
//!   `<type>.<id>` key and snapshots the whole mapping to one JSON file.
//! - [`models`] defines the objects handed to the store.
//! - [`console`] and [`cli`] expose the store's operations on the command line.

pub mod cli;
pub mod config;
pub mod console;
pub mod models;
pub mod storage;
pub mod timestamp;

pub use models::{Entity, EntityKind, Model};
pub use storage::{FileStorage, StorageError, StorageResult, StoreKey};
