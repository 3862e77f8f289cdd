//! Storage operations
//!
//! Create, update, delete and read operations against the children of one
//! folder. Every operation checks all of its preconditions before touching
//! the tree, so a failed call leaves the storage exactly as it found it.

use log::info;

use crate::error::StorageError;
use crate::node::{File, Folder, FolderId};
use crate::path::{check_name_length, join_path, validate_name};
use crate::storage::Storage;
use crate::storage::results::{
    CreateResult, DeleteResult, FileContents, FolderListing, ReleaseStats, UpdateResult,
};

/// Validates a bare child name against syntax rules and the configured length limit.
fn check_name(storage: &Storage, name: &str) -> Result<(), StorageError> {
    validate_name(name)?;
    check_name_length(name, storage.config().max_name_length)?;
    Ok(())
}

fn check_file_size(storage: &Storage, name: &str, content: &str) -> Result<(), StorageError> {
    let limit = storage.config().max_file_size;
    if content.len() > limit {
        return Err(StorageError::FileTooLarge {
            name: name.to_string(),
            size: content.len(),
            limit,
        });
    }
    Ok(())
}

/// Resolves the folder a manager is standing in
fn current_folder<'a>(
    storage: &'a Storage,
    cwd: FolderId,
    cwd_path: &str,
) -> Result<&'a Folder, StorageError> {
    storage
        .folder(cwd)
        .ok_or_else(|| StorageError::StaleLocation(cwd_path.to_string()))
}

fn current_folder_mut<'a>(
    storage: &'a mut Storage,
    cwd: FolderId,
    cwd_path: &str,
) -> Result<&'a mut Folder, StorageError> {
    storage
        .folder_mut(cwd)
        .ok_or_else(|| StorageError::StaleLocation(cwd_path.to_string()))
}

/// Creates an empty child folder
pub fn create_folder(
    storage: &mut Storage,
    cwd: FolderId,
    cwd_path: &str,
    name: &str,
) -> Result<CreateResult, StorageError> {
    check_name(storage, name)?;

    let parent = current_folder(storage, cwd, cwd_path)?;
    let full_path = join_path(parent.full_path(), name);

    if parent.has_folder(name) {
        return Err(StorageError::FolderAlreadyExists(full_path));
    }

    let depth = parent.depth() + 1;
    let max_depth = storage.config().max_depth;
    if depth > max_depth {
        return Err(StorageError::DepthExceeded {
            name: full_path,
            limit: max_depth,
        });
    }

    let id = storage.allocate(Folder::child(full_path.clone(), cwd, depth));
    current_folder_mut(storage, cwd, cwd_path)?.add_folder(name.to_string(), id);

    info!("Created folder {}", full_path);
    Ok(CreateResult { full_path })
}

/// Creates a file holding `content`
pub fn create_file(
    storage: &mut Storage,
    cwd: FolderId,
    cwd_path: &str,
    name: &str,
    content: String,
) -> Result<CreateResult, StorageError> {
    check_name(storage, name)?;

    let parent = current_folder(storage, cwd, cwd_path)?;
    let full_path = join_path(parent.full_path(), name);

    if parent.has_file(name) {
        return Err(StorageError::FileAlreadyExists(full_path));
    }

    check_file_size(storage, &full_path, &content)?;

    let size = content.len();
    let file = File::new(full_path.clone(), name, content);
    current_folder_mut(storage, cwd, cwd_path)?.add_file(name.to_string(), file);

    info!("Created file {} ({} bytes)", full_path, size);
    Ok(CreateResult { full_path })
}

/// Replaces the content of an existing file
pub fn update_file(
    storage: &mut Storage,
    cwd: FolderId,
    cwd_path: &str,
    name: &str,
    content: String,
) -> Result<UpdateResult, StorageError> {
    check_name(storage, name)?;

    let parent = current_folder(storage, cwd, cwd_path)?;
    let Some(file) = parent.file(name) else {
        return Err(StorageError::FileNotFound(join_path(
            parent.full_path(),
            name,
        )));
    };
    let full_path = file.full_path().to_string();
    let old_size = file.size();

    check_file_size(storage, &full_path, &content)?;

    let new_size = content.len();
    if let Some(file) = current_folder_mut(storage, cwd, cwd_path)?.file_mut(name) {
        file.update_content(content);
    }

    info!(
        "Updated file {} ({} -> {} bytes)",
        full_path, old_size, new_size
    );
    Ok(UpdateResult {
        full_path,
        old_size,
        new_size,
    })
}

/// Deletes a child folder together with everything beneath it
pub fn delete_folder(
    storage: &mut Storage,
    cwd: FolderId,
    cwd_path: &str,
    name: &str,
) -> Result<DeleteResult, StorageError> {
    check_name(storage, name)?;

    let parent = current_folder_mut(storage, cwd, cwd_path)?;
    let full_path = join_path(parent.full_path(), name);
    let Some(id) = parent.remove_folder(name) else {
        return Err(StorageError::FolderNotFound(full_path));
    };

    let released = storage.release(id);

    info!(
        "Deleted folder {} ({} folders, {} files released)",
        full_path, released.folders, released.files
    );
    Ok(DeleteResult {
        full_path,
        released,
    })
}

/// Deletes a file
pub fn delete_file(
    storage: &mut Storage,
    cwd: FolderId,
    cwd_path: &str,
    name: &str,
) -> Result<DeleteResult, StorageError> {
    check_name(storage, name)?;

    let parent = current_folder_mut(storage, cwd, cwd_path)?;
    let Some(file) = parent.remove_file(name) else {
        return Err(StorageError::FileNotFound(join_path(
            parent.full_path(),
            name,
        )));
    };

    info!("Deleted file {} ({} bytes)", file.full_path(), file.size());
    Ok(DeleteResult {
        full_path: file.full_path().to_string(),
        released: ReleaseStats {
            folders: 0,
            files: 1,
        },
    })
}

/// Lists the metadata and children of the current folder
pub fn list_folder(
    storage: &Storage,
    cwd: FolderId,
    cwd_path: &str,
) -> Result<FolderListing, StorageError> {
    let folder = current_folder(storage, cwd, cwd_path)?;

    Ok(FolderListing {
        full_path: folder.full_path().to_string(),
        folder_count: folder.folder_count(),
        file_count: folder.file_count(),
        folders: folder.folder_names(),
        files: folder.file_names(),
    })
}

/// Reads the metadata and content of a file
pub fn read_file(
    storage: &Storage,
    cwd: FolderId,
    cwd_path: &str,
    name: &str,
) -> Result<FileContents, StorageError> {
    check_name(storage, name)?;

    let folder = current_folder(storage, cwd, cwd_path)?;
    let file = folder
        .file(name)
        .ok_or_else(|| StorageError::FileNotFound(join_path(folder.full_path(), name)))?;

    Ok(FileContents {
        full_path: file.full_path().to_string(),
        size: file.size(),
        extension: file.extension().to_string(),
        content: file.content().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::error::{ErrorKind, PathError};

    fn setup() -> (Storage, FolderId) {
        let storage = Storage::new();
        let root = storage.root_id();
        (storage, root)
    }

    #[test]
    fn test_create_folder_under_root() {
        let (mut storage, root) = setup();
        let result = create_folder(&mut storage, root, "/", "aaa").unwrap();
        assert_eq!(result.full_path, "/aaa");
        assert_eq!(storage.root().folder_count(), 1);
    }

    #[test]
    fn test_duplicate_folder_is_rejected_once() {
        let (mut storage, root) = setup();
        create_folder(&mut storage, root, "/", "aaa").unwrap();
        let err = create_folder(&mut storage, root, "/", "aaa").unwrap_err();
        assert_eq!(err, StorageError::FolderAlreadyExists("/aaa".into()));
        assert_eq!(storage.root().folder_count(), 1);
        assert_eq!(storage.live_folders(), 2);
    }

    #[test]
    fn test_file_and_folder_may_share_a_name() {
        let (mut storage, root) = setup();
        create_folder(&mut storage, root, "/", "same").unwrap();
        create_file(&mut storage, root, "/", "same", String::new()).unwrap();
        assert_eq!(storage.root().folder_count(), 1);
        assert_eq!(storage.root().file_count(), 1);
    }

    #[test]
    fn test_invalid_names_leave_tree_untouched() {
        let (mut storage, root) = setup();
        let err = create_folder(&mut storage, root, "/", "a/b").unwrap_err();
        assert_eq!(
            err,
            StorageError::Path(PathError::NameContainsSeparator("a/b".into()))
        );
        let err = create_file(&mut storage, root, "/", "..", String::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);
        assert_eq!(storage.root().folder_count(), 0);
        assert_eq!(storage.root().file_count(), 0);
    }

    #[test]
    fn test_update_and_read_file() {
        let (mut storage, root) = setup();
        create_file(&mut storage, root, "/", "yoyo", "huhu".into()).unwrap();

        let contents = read_file(&storage, root, "/", "yoyo").unwrap();
        assert_eq!(contents.size, 4);
        assert_eq!(contents.content, "huhu");

        let update =
            update_file(&mut storage, root, "/", "yoyo", "huuuuuuuuuuuuuuuuuuuuu".into()).unwrap();
        assert_eq!(update.old_size, 4);
        assert_eq!(update.new_size, 22);

        let contents = read_file(&storage, root, "/", "yoyo").unwrap();
        assert_eq!(contents.full_path, "/yoyo");
        assert_eq!(contents.size, 22);
    }

    #[test]
    fn test_update_missing_file() {
        let (mut storage, root) = setup();
        let err = update_file(&mut storage, root, "/", "nope", "x".into()).unwrap_err();
        assert_eq!(err, StorageError::FileNotFound("/nope".into()));
    }

    #[test]
    fn test_delete_folder_releases_subtree() {
        let (mut storage, root) = setup();
        create_folder(&mut storage, root, "/", "aaa").unwrap();
        let aaa = storage.root().folder("aaa").unwrap();
        create_folder(&mut storage, aaa, "/aaa", "bbb").unwrap();
        create_file(&mut storage, aaa, "/aaa", "f1", "1".into()).unwrap();
        let bbb = storage.folder(aaa).unwrap().folder("bbb").unwrap();
        create_file(&mut storage, bbb, "/aaa/bbb", "f2", "2".into()).unwrap();

        let result = delete_folder(&mut storage, root, "/", "aaa").unwrap();
        assert_eq!(result.full_path, "/aaa");
        assert_eq!(result.released, ReleaseStats { folders: 2, files: 2 });
        assert_eq!(storage.root().folder_count(), 0);
        assert_eq!(storage.live_folders(), 1);
    }

    #[test]
    fn test_delete_missing_nodes() {
        let (mut storage, root) = setup();
        assert_eq!(
            delete_folder(&mut storage, root, "/", "ghost").unwrap_err(),
            StorageError::FolderNotFound("/ghost".into())
        );
        assert_eq!(
            delete_file(&mut storage, root, "/", "ghost").unwrap_err(),
            StorageError::FileNotFound("/ghost".into())
        );
    }

    #[test]
    fn test_limits() {
        let config = StorageConfig {
            max_name_length: 4,
            max_file_size: 3,
            max_depth: 1,
        };
        let mut storage = Storage::with_config(config);
        let root = storage.root_id();

        assert_eq!(
            create_folder(&mut storage, root, "/", "toolong").unwrap_err().kind(),
            ErrorKind::InvalidName
        );
        assert_eq!(
            create_file(&mut storage, root, "/", "big", "abcd".into()).unwrap_err().kind(),
            ErrorKind::LimitExceeded
        );

        create_folder(&mut storage, root, "/", "a").unwrap();
        let a = storage.root().folder("a").unwrap();
        assert_eq!(
            create_folder(&mut storage, a, "/a", "b").unwrap_err(),
            StorageError::DepthExceeded {
                name: "/a/b".into(),
                limit: 1
            }
        );
    }

    #[test]
    fn test_stale_location() {
        let (mut storage, root) = setup();
        create_folder(&mut storage, root, "/", "aaa").unwrap();
        let aaa = storage.root().folder("aaa").unwrap();
        delete_folder(&mut storage, root, "/", "aaa").unwrap();

        let err = list_folder(&storage, aaa, "/aaa").unwrap_err();
        assert_eq!(err, StorageError::StaleLocation("/aaa".into()));
    }
}
