//! Path utility
//!
//! Splits path strings into name segments and validates bare child names.

mod validation;

pub use validation::{
    CURRENT_NAME, PARENT_NAME, ROOT_PATH, SEPARATOR, check_name_length, file_extension, join_path,
    split, validate_name,
};
