//! Error handling
//!
//! Defines error types and reporting for the disk simulator.

pub mod handlers;
pub mod types;

pub use types::*;
