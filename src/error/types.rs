//! Error types
//!
//! Defines domain-specific error types for each module of the disk simulator.

use std::fmt;

/// Coarse classification shared by every error in the crate.
///
/// Callers use this to tell usage errors (bad syntax) apart from lookup
/// failures without matching on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedPath,
    InvalidName,
    NotFound,
    AlreadyExists,
    LimitExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::MalformedPath => "malformed path",
            ErrorKind::InvalidName => "invalid name",
            ErrorKind::NotFound => "not found",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::LimitExceeded => "limit exceeded",
        };
        f.write_str(label)
    }
}

/// Path and name syntax errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    LeadingSeparator(String),
    AdjacentSeparators(String),
    TrailingSeparator(String),
    NameContainsSeparator(String),
    EmptyName,
    ReservedName(String),
    NameTooLong { name: String, limit: usize },
}

impl PathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::LeadingSeparator(_)
            | PathError::AdjacentSeparators(_)
            | PathError::TrailingSeparator(_) => ErrorKind::MalformedPath,
            PathError::NameContainsSeparator(_)
            | PathError::EmptyName
            | PathError::ReservedName(_)
            | PathError::NameTooLong { .. } => ErrorKind::InvalidName,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::LeadingSeparator(p) => {
                write!(f, "Leading \"/\" not allowed in path: {}", p)
            }
            PathError::AdjacentSeparators(p) => {
                write!(f, "Adjacent \"/\" not allowed in path: {}", p)
            }
            PathError::TrailingSeparator(p) => {
                write!(f, "Trailing \"/\" not allowed in path: {}", p)
            }
            PathError::NameContainsSeparator(n) => {
                write!(f, "File or folder names can't contain \"/\": {}", n)
            }
            PathError::EmptyName => write!(f, "File or folder names can't be empty"),
            PathError::ReservedName(n) => write!(f, "Name is reserved: {}", n),
            PathError::NameTooLong { name, limit } => {
                write!(f, "Name longer than {} bytes: {}", limit, name)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Navigate module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    Path(PathError),
    FolderNotFound(String),
    StaleLocation(String),
}

impl NavigateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NavigateError::Path(e) => e.kind(),
            NavigateError::FolderNotFound(_) | NavigateError::StaleLocation(_) => {
                ErrorKind::NotFound
            }
        }
    }
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::Path(e) => write!(f, "{}", e),
            NavigateError::FolderNotFound(p) => write!(f, "Destination folder not found: {}", p),
            NavigateError::StaleLocation(p) => {
                write!(f, "Current folder no longer exists: {}", p)
            }
        }
    }
}

impl std::error::Error for NavigateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigateError::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathError> for NavigateError {
    fn from(error: PathError) -> Self {
        NavigateError::Path(error)
    }
}

/// Storage module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Path(PathError),
    FolderNotFound(String),
    FileNotFound(String),
    FolderAlreadyExists(String),
    FileAlreadyExists(String),
    FileTooLarge { name: String, size: usize, limit: usize },
    DepthExceeded { name: String, limit: usize },
    StaleLocation(String),
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Path(e) => e.kind(),
            StorageError::FolderNotFound(_)
            | StorageError::FileNotFound(_)
            | StorageError::StaleLocation(_) => ErrorKind::NotFound,
            StorageError::FolderAlreadyExists(_) | StorageError::FileAlreadyExists(_) => {
                ErrorKind::AlreadyExists
            }
            StorageError::FileTooLarge { .. } | StorageError::DepthExceeded { .. } => {
                ErrorKind::LimitExceeded
            }
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Path(e) => write!(f, "{}", e),
            StorageError::FolderNotFound(p) => write!(f, "Folder doesn't exist: {}", p),
            StorageError::FileNotFound(p) => write!(f, "File doesn't exist: {}", p),
            StorageError::FolderAlreadyExists(p) => write!(f, "Folder already exists: {}", p),
            StorageError::FileAlreadyExists(p) => write!(f, "File already exists: {}", p),
            StorageError::FileTooLarge { name, size, limit } => write!(
                f,
                "File {} is {} bytes, larger than the {} byte limit",
                name, size, limit
            ),
            StorageError::DepthExceeded { name, limit } => {
                write!(f, "Folder {} would exceed the maximum depth of {}", name, limit)
            }
            StorageError::StaleLocation(p) => {
                write!(f, "Current folder no longer exists: {}", p)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathError> for StorageError {
    fn from(error: PathError) -> Self {
        StorageError::Path(error)
    }
}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum DiskError {
    Navigate(NavigateError),
    Storage(StorageError),
    Config(config::ConfigError),
}

impl DiskError {
    /// Returns the error kind, or `None` for configuration failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            DiskError::Navigate(e) => Some(e.kind()),
            DiskError::Storage(e) => Some(e.kind()),
            DiskError::Config(_) => None,
        }
    }
}

impl fmt::Display for DiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskError::Navigate(e) => write!(f, "Couldn't change directory: {}", e),
            DiskError::Storage(e) => write!(f, "Storage error: {}", e),
            DiskError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for DiskError {}

impl From<NavigateError> for DiskError {
    fn from(error: NavigateError) -> Self {
        DiskError::Navigate(error)
    }
}

impl From<StorageError> for DiskError {
    fn from(error: StorageError) -> Self {
        DiskError::Storage(error)
    }
}

impl From<config::ConfigError> for DiskError {
    fn from(error: config::ConfigError) -> Self {
        DiskError::Config(error)
    }
}
