//! Module `parser`
//!
//! Defines the commands understood by the driver and the structures used to
//! report their outcome.

/// A command parsed from one input line.
///
/// Commands that require arguments store them as `String` variants.
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Pwd,
    Ls,
    Cd(String),            // Change directory, absolute when it starts with "/"
    Mkdir(String),         // Create folder
    Touch(String, String), // Create file with optional content
    Write(String, String), // Replace file content
    Cat(String),           // Read file
    Rm(String),            // Delete file
    Rmdir(String),         // Delete folder and its contents
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Quit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Parses a raw command line into the `Command` enum.
///
/// Returns `Unknown` for unrecognised commands and for known commands missing
/// a required argument.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "QUIT" | "Q" => Command::Quit,
        "PWD" => Command::Pwd,
        "LS" => Command::Ls,
        "CD" if arg.is_empty() => Command::Cd("/".to_string()),
        "CD" => Command::Cd(arg.to_string()),
        "MKDIR" if !arg.is_empty() => Command::Mkdir(arg.to_string()),
        "TOUCH" if !arg.is_empty() => {
            let (name, content) = split_name_and_content(arg);
            Command::Touch(name, content)
        }
        "WRITE" if !arg.is_empty() => {
            let (name, content) = split_name_and_content(arg);
            Command::Write(name, content)
        }
        "CAT" if !arg.is_empty() => Command::Cat(arg.to_string()),
        "RM" if !arg.is_empty() => Command::Rm(arg.to_string()),
        "RMDIR" if !arg.is_empty() => Command::Rmdir(arg.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn split_name_and_content(arg: &str) -> (String, String) {
    let mut parts = arg.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("").to_string();
    let content = parts.next().unwrap_or("").trim().to_string();
    (name, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("PWD"), Command::Pwd);
        assert_eq!(parse_command("ls"), Command::Ls);
        assert_eq!(parse_command("CD"), Command::Cd("/".to_string()));
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(parse_command("CD ../.."), Command::Cd("../..".to_string()));
        assert_eq!(parse_command("MKDIR aaa"), Command::Mkdir("aaa".to_string()));
        assert_eq!(
            parse_command("TOUCH yoyo huhu"),
            Command::Touch("yoyo".to_string(), "huhu".to_string())
        );
        assert_eq!(
            parse_command("WRITE notes.txt hello world"),
            Command::Write("notes.txt".to_string(), "hello world".to_string())
        );
        assert_eq!(parse_command("CAT yoyo"), Command::Cat("yoyo".to_string()));
        assert_eq!(parse_command("RM yoyo"), Command::Rm("yoyo".to_string()));
        assert_eq!(parse_command("RMDIR ccc"), Command::Rmdir("ccc".to_string()));
    }

    #[test]
    fn test_touch_without_content() {
        assert_eq!(
            parse_command("TOUCH empty"),
            Command::Touch("empty".to_string(), String::new())
        );
    }

    #[test]
    fn test_missing_arguments_are_unknown() {
        assert_eq!(parse_command("MKDIR"), Command::Unknown("MKDIR".to_string()));
        assert_eq!(parse_command("  CAT  "), Command::Unknown("CAT".to_string()));
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
    }
}
