//! memdisk - Entry Point
//!
//! Runs a command script against a fresh in-memory disk and prints each result.

use log::{error, info};
use std::fs;
use std::process;

use memdisk::commands::run_script;
use memdisk::error::DiskError;
use memdisk::error::handlers::handle_error;
use memdisk::{Manager, Storage, StorageConfig};

/// Sequence run when no script file is given
const DEMO_SCRIPT: &[&str] = &[
    "LS",
    "MKDIR aaa",
    "LS",
    "CD aaa",
    "LS",
    "MKDIR bbb",
    "CD /aaa/bbb",
    "PWD",
    "CD ../..",
    "PWD",
    "LS",
    "TOUCH yoyo huhu",
    "LS",
    "CAT yoyo",
    "WRITE yoyo huuuuuuuuuuuuuuuuuuuuu",
    "CAT yoyo",
    "LS",
    "RM yoyo",
    "LS",
    "MKDIR ccc",
    "RMDIR ccc",
];

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match StorageConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&DiskError::from(e));
            process::exit(1);
        }
    };

    let script = match std::env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(script) => {
                info!("Running script {}", path);
                script
            }
            Err(e) => {
                error!("Failed to read script {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            info!("No script given, running the demonstration sequence");
            DEMO_SCRIPT.join("\n")
        }
    };

    let storage = Storage::with_config(config).into_shared();
    let mut manager = Manager::new(storage);

    for result in run_script(&mut manager, &script) {
        if let Some(message) = result.message {
            println!("{}", message);
        }
    }
}
