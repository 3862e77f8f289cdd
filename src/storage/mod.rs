//! Storage management
//!
//! Owns the folder tree of one simulated disk and the primitive create,
//! update, delete and read operations the manager drives.

pub mod filesystem;
pub(crate) mod operations;
pub mod results;

pub use filesystem::{SharedStorage, Storage};
pub use results::{CreateResult, DeleteResult, FileContents, FolderListing, ReleaseStats, UpdateResult};
