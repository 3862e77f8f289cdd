//! Navigate module
//!
//! Handles directory navigation, resolving split paths from a starting
//! folder to a target folder.

mod operations;
pub mod results;

// Re-export public types and functions
pub use operations::{change_directory, resolve_folder};
pub use results::CwdResult;
