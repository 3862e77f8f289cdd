//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::fmt;

/// Number of nodes released by a folder teardown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseStats {
    pub folders: usize,
    pub files: usize,
}

/// Result of a folder or file creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResult {
    pub full_path: String,
}

/// Result of a file content update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub full_path: String,
    pub old_size: usize,
    pub new_size: usize,
}

/// Result of a folder or file deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub full_path: String,
    pub released: ReleaseStats,
}

/// Metadata and child names of a folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub full_path: String,
    pub folder_count: usize,
    pub file_count: usize,
    pub folders: Vec<String>,
    pub files: Vec<String>,
}

impl fmt::Display for FolderListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Metadata: Full Path: {}, No. of folders: {}, No. of files: {}",
            self.full_path, self.folder_count, self.file_count
        )?;
        writeln!(f, "Folders: {}", self.folders.join(", "))?;
        write!(f, "Files: {}", self.files.join(", "))
    }
}

/// Metadata and content of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContents {
    pub full_path: String,
    pub size: usize,
    pub extension: String,
    pub content: String,
}

impl fmt::Display for FileContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Metadata: Full Path: {}, File Size: {}, File Extension: {}",
            self.full_path, self.size, self.extension
        )?;
        write!(f, "Contents: {}", self.content)
    }
}
