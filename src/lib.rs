//! memdisk - an in-memory hierarchical file storage
//!
//! A simulated disk partition holding a tree of folders and files, and a
//! manager that navigates the tree and performs create, read, update and
//! delete operations on it.

pub mod commands;
pub mod config;
pub mod error;
pub mod manager;
pub mod navigate;
pub mod node;
pub mod path;
pub mod storage;

pub use config::StorageConfig;
pub use error::{DiskError, ErrorKind, NavigateError, PathError, StorageError};
pub use manager::Manager;
pub use storage::{SharedStorage, Storage};
