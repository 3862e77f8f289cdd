//! Manager
//!
//! Per-cursor navigation and the public create, read, update and delete
//! surface over a shared storage.

pub mod state;

pub use state::Manager;
