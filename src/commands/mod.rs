//! Command layer
//!
//! Parses line-oriented commands and dispatches them to a manager.

mod handlers;
mod parser;

pub use handlers::{handle_command, run_script};
pub use parser::{Command, CommandResult, CommandStatus, parse_command};
