//! grindlog - Coding practice journal
//!
//! Log solved problems, keep a library of coding patterns, and track
//! streaks and weekly/monthly goals. Records are kept as JSON snapshots in
//! a small key-value store inside the journal directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::GrindlogError;
