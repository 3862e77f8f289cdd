//! Module `manager`
//!
//! Defines the `Manager` struct, which tracks a current location inside a
//! shared storage and performs every tree mutation on behalf of its caller.

use log::info;
use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{NavigateError, StorageError};
use crate::navigate::{self, CwdResult};
use crate::node::FolderId;
use crate::storage::operations;
use crate::storage::{
    CreateResult, DeleteResult, FileContents, FolderListing, SharedStorage, Storage, UpdateResult,
};

/// A cursor over a shared storage.
///
/// Several managers may observe the same storage, each with its own current
/// folder. Each call holds the storage lock for its whole duration, and a
/// call that fails leaves both the tree and the cursor unchanged. Failures
/// are returned to the caller, which decides how to report them.
#[derive(Debug)]
pub struct Manager {
    storage: SharedStorage,
    current_folder: FolderId,
    current_path: String,
}

impl Manager {
    /// Creates a manager positioned at the root folder of `storage`.
    pub fn new(storage: SharedStorage) -> Self {
        let (current_folder, current_path) = {
            let guard = storage.read().unwrap_or_else(PoisonError::into_inner);
            (guard.root_id(), guard.root().full_path().to_string())
        };

        Self {
            storage,
            current_folder,
            current_path,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Storage> {
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Storage> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the storage this manager operates on.
    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    /// Returns the absolute path of the current folder.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Returns the handle of the current folder.
    pub fn current_folder(&self) -> FolderId {
        self.current_folder
    }

    /// Returns the current folder and path together.
    pub fn working_directory(&self) -> CwdResult {
        CwdResult {
            folder: self.current_folder,
            path: self.current_path.clone(),
        }
    }

    // --------------------
    // Navigation
    // --------------------

    /// Changes the current folder.
    ///
    /// `destination` is split into segments and resolved from the current
    /// folder when `relative` is true, from the root otherwise. A destination
    /// equal to the current path string is accepted without resolving, unless
    /// the current folder has been deleted in the meantime.
    /// The cursor moves only once the whole destination has resolved.
    pub fn change_directory(
        &mut self,
        destination: &str,
        relative: bool,
    ) -> Result<CwdResult, NavigateError> {
        if destination == self.current_path {
            if !self.read().contains(self.current_folder) {
                return Err(NavigateError::StaleLocation(self.current_path.clone()));
            }
            return Ok(self.working_directory());
        }

        let result = {
            let storage = self.read();
            navigate::change_directory(
                &storage,
                self.current_folder,
                &self.current_path,
                destination,
                relative,
            )
        };

        let cwd = result?;
        self.current_folder = cwd.folder;
        self.current_path = cwd.path.clone();
        info!("Changed directory to {}", self.current_path);
        Ok(cwd)
    }

    // --------------------
    // CRUD
    // --------------------

    /// Creates a folder named `name` in the current folder.
    pub fn create_folder(&self, name: &str) -> Result<CreateResult, StorageError> {
        operations::create_folder(
            &mut self.write(),
            self.current_folder,
            &self.current_path,
            name,
        )
    }

    /// Creates a file named `name` holding `content` in the current folder.
    pub fn create_file(&self, name: &str, content: &str) -> Result<CreateResult, StorageError> {
        operations::create_file(
            &mut self.write(),
            self.current_folder,
            &self.current_path,
            name,
            content.to_string(),
        )
    }

    /// Creates an empty file named `name` in the current folder.
    pub fn create_empty_file(&self, name: &str) -> Result<CreateResult, StorageError> {
        self.create_file(name, "")
    }

    /// Replaces the content of the file named `name`.
    pub fn update_file(&self, name: &str, content: &str) -> Result<UpdateResult, StorageError> {
        operations::update_file(
            &mut self.write(),
            self.current_folder,
            &self.current_path,
            name,
            content.to_string(),
        )
    }

    /// Deletes the folder named `name` and everything beneath it.
    pub fn delete_folder(&self, name: &str) -> Result<DeleteResult, StorageError> {
        operations::delete_folder(
            &mut self.write(),
            self.current_folder,
            &self.current_path,
            name,
        )
    }

    /// Deletes the file named `name`.
    pub fn delete_file(&self, name: &str) -> Result<DeleteResult, StorageError> {
        operations::delete_file(
            &mut self.write(),
            self.current_folder,
            &self.current_path,
            name,
        )
    }

    /// Lists the metadata and children of the current folder.
    pub fn read_folder_contents(&self) -> Result<FolderListing, StorageError> {
        operations::list_folder(&self.read(), self.current_folder, &self.current_path)
    }

    /// Reads the metadata and content of the file named `name`.
    pub fn read_file_contents(&self, name: &str) -> Result<FileContents, StorageError> {
        operations::read_file(
            &self.read(),
            self.current_folder,
            &self.current_path,
            name,
        )
    }
}
