//! Command handlers
//!
//! Maps each parsed command onto a manager operation and turns the outcome
//! into a printable result. No command aborts the caller.

use crate::commands::parser::{Command, CommandResult, CommandStatus, parse_command};
use crate::error::DiskError;
use crate::error::handlers::{error_label, handle_error};
use crate::manager::Manager;
use crate::path::SEPARATOR;

/// Dispatches a parsed command to its handler.
pub fn handle_command(manager: &mut Manager, command: &Command) -> CommandResult {
    match command {
        Command::Quit => CommandResult {
            status: CommandStatus::Quit,
            message: Some("Goodbye".into()),
        },
        Command::Pwd => success(format!(
            "Current Working Directory: {}",
            manager.current_path()
        )),
        Command::Ls => outcome(manager.read_folder_contents(), |listing| listing.to_string()),
        Command::Cd(path) => handle_cmd_cd(manager, path),
        Command::Mkdir(name) => outcome(manager.create_folder(name), |created| {
            format!("Created folder {}", created.full_path)
        }),
        Command::Touch(name, content) => outcome(manager.create_file(name, content), |created| {
            format!("Created file {}", created.full_path)
        }),
        Command::Write(name, content) => {
            outcome(manager.update_file(name, content), |updated| {
                format!(
                    "Updated file {} ({} -> {} bytes)",
                    updated.full_path, updated.old_size, updated.new_size
                )
            })
        }
        Command::Cat(name) => outcome(manager.read_file_contents(name), |file| file.to_string()),
        Command::Rm(name) => outcome(manager.delete_file(name), |deleted| {
            format!("Deleted file {}", deleted.full_path)
        }),
        Command::Rmdir(name) => outcome(manager.delete_folder(name), |deleted| {
            format!(
                "Deleted folder {} ({} folders, {} files released)",
                deleted.full_path, deleted.released.folders, deleted.released.files
            )
        }),
        Command::Unknown(raw) => CommandResult {
            status: CommandStatus::Failure("Unknown command".into()),
            message: Some(format!("Unknown command: {}", raw)),
        },
    }
}

/// Runs every non-empty, non-comment line of `script`, stopping after `QUIT`.
pub fn run_script(manager: &mut Manager, script: &str) -> Vec<CommandResult> {
    let mut results = Vec::new();

    for line in script.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = handle_command(manager, &parse_command(line));
        let quit = result.status == CommandStatus::Quit;
        results.push(result);
        if quit {
            break;
        }
    }

    results
}

/// Handles CD: a leading separator makes the path absolute from the root.
fn handle_cmd_cd(manager: &mut Manager, path: &str) -> CommandResult {
    let (destination, relative) = match path.strip_prefix(SEPARATOR) {
        Some(rest) => (rest, false),
        None => (path, true),
    };

    outcome(manager.change_directory(destination, relative), |cwd| {
        format!("Current Working Directory: {}", cwd.path)
    })
}

fn success(message: String) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: Some(message),
    }
}

fn outcome<T, E>(result: Result<T, E>, describe: impl FnOnce(T) -> String) -> CommandResult
where
    E: Into<DiskError>,
{
    match result {
        Ok(value) => success(describe(value)),
        Err(e) => {
            let err = e.into();
            handle_error(&err);
            CommandResult {
                status: CommandStatus::Failure(err.to_string()),
                message: Some(format!("{} {}", error_label(&err), err)),
            }
        }
    }
}
