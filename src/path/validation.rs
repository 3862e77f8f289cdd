//! Path and name validation

use crate::error::PathError;

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Full path of the root folder
pub const ROOT_PATH: &str = "/";

/// Reserved segment resolving to the parent folder
pub const PARENT_NAME: &str = "..";

/// Reserved segment resolving to the folder itself
pub const CURRENT_NAME: &str = ".";

/// Splits a path into its ordered name segments.
///
/// The path must not start or end with a separator and must not contain two
/// adjacent separators. An empty path yields no segments.
pub fn split(path: &str) -> Result<Vec<&str>, PathError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }

    if path.starts_with(SEPARATOR) {
        return Err(PathError::LeadingSeparator(path.to_string()));
    }

    if path.ends_with(SEPARATOR) {
        return Err(PathError::TrailingSeparator(path.to_string()));
    }

    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(PathError::AdjacentSeparators(path.to_string()));
    }

    Ok(segments)
}

/// Validates a bare file or folder name used to create, read, update or delete a child.
pub fn validate_name(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::EmptyName);
    }

    if name.contains(SEPARATOR) {
        return Err(PathError::NameContainsSeparator(name.to_string()));
    }

    if name == PARENT_NAME || name == CURRENT_NAME {
        return Err(PathError::ReservedName(name.to_string()));
    }

    Ok(())
}

/// Rejects names longer than `limit` bytes
pub fn check_name_length(name: &str, limit: usize) -> Result<(), PathError> {
    if name.len() > limit {
        return Err(PathError::NameTooLong {
            name: name.to_string(),
            limit,
        });
    }
    Ok(())
}

/// Full path of a child named `name` inside the folder at `parent_path`.
pub fn join_path(parent_path: &str, name: &str) -> String {
    if parent_path == ROOT_PATH {
        format!("{}{}", ROOT_PATH, name)
    } else {
        format!("{}{}{}", parent_path, SEPARATOR, name)
    }
}

/// Substring after the final `.` of a file name, empty when there is none.
pub fn file_extension(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}
