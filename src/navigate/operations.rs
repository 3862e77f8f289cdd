//! Navigation operations implementation

use log::debug;

use crate::error::NavigateError;
use crate::navigate::results::CwdResult;
use crate::node::FolderId;
use crate::path::{join_path, split};
use crate::storage::Storage;

/// Walks `segments` from `start`, one child lookup per segment.
///
/// `..` follows the parent back-reference and `.` stays in place. Nothing is
/// committed here; the caller decides what to do with the resolved folder.
pub fn resolve_folder(
    storage: &Storage,
    start: FolderId,
    start_path: &str,
    segments: &[&str],
) -> Result<FolderId, NavigateError> {
    let mut current = start;

    for segment in segments {
        let folder = storage
            .folder(current)
            .ok_or_else(|| NavigateError::StaleLocation(start_path.to_string()))?;

        current = folder.lookup(segment, current).ok_or_else(|| {
            NavigateError::FolderNotFound(join_path(folder.full_path(), segment))
        })?;
        debug!("Resolved segment {:?} to slot {}", segment, current.index());
    }

    if !storage.contains(current) {
        return Err(NavigateError::StaleLocation(start_path.to_string()));
    }

    Ok(current)
}

/// Resolves `destination` relative to the current folder or to the root.
///
/// Returns the target folder and its absolute path.
pub fn change_directory(
    storage: &Storage,
    cwd: FolderId,
    cwd_path: &str,
    destination: &str,
    relative: bool,
) -> Result<CwdResult, NavigateError> {
    let segments = split(destination)?;

    let folder = if relative {
        resolve_folder(storage, cwd, cwd_path, &segments)?
    } else {
        resolve_folder(storage, storage.root_id(), storage.root().full_path(), &segments)?
    };

    let path = storage
        .folder(folder)
        .map(|target| target.full_path().to_string())
        .ok_or_else(|| NavigateError::StaleLocation(cwd_path.to_string()))?;

    Ok(CwdResult { folder, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, PathError};
    use crate::storage::operations::{create_folder, delete_folder};

    fn setup() -> (Storage, FolderId, FolderId) {
        let mut storage = Storage::new();
        let root = storage.root_id();
        create_folder(&mut storage, root, "/", "aaa").unwrap();
        let aaa = storage.root().folder("aaa").unwrap();
        create_folder(&mut storage, aaa, "/aaa", "bbb").unwrap();
        (storage, root, aaa)
    }

    #[test]
    fn test_relative_change() {
        let (storage, root, aaa) = setup();
        let result = change_directory(&storage, root, "/", "aaa", true).unwrap();
        assert_eq!(result.folder, aaa);
        assert_eq!(result.path, "/aaa");
    }

    #[test]
    fn test_absolute_change_ignores_cwd() {
        let (storage, _, aaa) = setup();
        let result = change_directory(&storage, aaa, "/aaa", "aaa/bbb", false).unwrap();
        assert_eq!(result.path, "/aaa/bbb");
    }

    #[test]
    fn test_parent_jumps_normalize_path() {
        let (storage, _, aaa) = setup();
        let bbb = storage.folder(aaa).unwrap().folder("bbb").unwrap();
        let result = change_directory(&storage, bbb, "/aaa/bbb", "../..", true).unwrap();
        assert_eq!(result.path, "/");

        let result = change_directory(&storage, bbb, "/aaa/bbb", "./../bbb", true).unwrap();
        assert_eq!(result.folder, bbb);
    }

    #[test]
    fn test_parent_of_root_is_not_found() {
        let (storage, root, _) = setup();
        let err = change_directory(&storage, root, "/", "..", true).unwrap_err();
        assert_eq!(err, NavigateError::FolderNotFound("/..".into()));
    }

    #[test]
    fn test_missing_segment_fails() {
        let (storage, root, _) = setup();
        let err = change_directory(&storage, root, "/", "aaa/zzz/bbb", true).unwrap_err();
        assert_eq!(err, NavigateError::FolderNotFound("/aaa/zzz".into()));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_malformed_destination() {
        let (storage, root, _) = setup();
        let err = change_directory(&storage, root, "/", "aaa//bbb", true).unwrap_err();
        assert_eq!(
            err,
            NavigateError::Path(PathError::AdjacentSeparators("aaa//bbb".into()))
        );
    }

    #[test]
    fn test_stale_cwd() {
        let (mut storage, root, aaa) = setup();
        delete_folder(&mut storage, root, "/", "aaa").unwrap();

        let err = change_directory(&storage, aaa, "/aaa", "bbb", true).unwrap_err();
        assert_eq!(err, NavigateError::StaleLocation("/aaa".into()));

        let err = change_directory(&storage, aaa, "/aaa", "", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let result = change_directory(&storage, aaa, "/aaa", "", false).unwrap();
        assert_eq!(result.folder, root);
    }
}
