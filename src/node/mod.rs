//! Node model
//!
//! The two entity kinds of the tree: folders, which own child folders and
//! files, and files, which own their content.

mod file;
mod folder;
mod id;

pub use file::File;
pub use folder::Folder;
pub use id::FolderId;
