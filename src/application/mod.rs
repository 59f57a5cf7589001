//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal;
pub mod manage_config;
pub mod patterns;
pub mod progress;

pub use journal::{edit_entry, list_entries, EntryEdit};
pub use manage_config::ConfigService;
pub use patterns::{edit_pattern, list_patterns, PatternEdit};
pub use progress::{progress_report, ProgressReport};
