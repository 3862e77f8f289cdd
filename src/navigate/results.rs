//! Result types for navigate operations

use crate::node::FolderId;

/// Result of a directory change or working directory query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CwdResult {
    pub folder: FolderId,
    pub path: String,
}
