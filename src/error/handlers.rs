//! Error handlers
//!
//! Provides error reporting helpers for callers of the manager.

use crate::error::types::{DiskError, ErrorKind};
use log::error;

/// Log a failed operation
pub fn handle_error(err: &DiskError) {
    error!("Disk error: {}", err);
}

/// Short stable label for an error, used in driver output
pub fn error_label(err: &DiskError) -> &'static str {
    match err.kind() {
        Some(ErrorKind::MalformedPath) => "MALFORMED_PATH",
        Some(ErrorKind::InvalidName) => "INVALID_NAME",
        Some(ErrorKind::NotFound) => "NOT_FOUND",
        Some(ErrorKind::AlreadyExists) => "ALREADY_EXISTS",
        Some(ErrorKind::LimitExceeded) => "LIMIT_EXCEEDED",
        None => "CONFIG",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NavigateError, StorageError};

    #[test]
    fn test_error_labels() {
        let err = DiskError::from(NavigateError::FolderNotFound("zzz".into()));
        assert_eq!(error_label(&err), "NOT_FOUND");

        let err = DiskError::from(StorageError::FolderAlreadyExists("/aaa".into()));
        assert_eq!(error_label(&err), "ALREADY_EXISTS");

        let err = DiskError::from(config::ConfigError::Message("zero".into()));
        assert_eq!(error_label(&err), "CONFIG");
    }
}
