//! Infrastructure layer - Storage, configuration and the journal directory

pub mod config;
pub mod repository;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use repository::{LoadIssue, Repository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use workspace::Workspace;
