//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, EntryCommand, PatternCommand};
pub use output::{
    format_entry, format_entry_list, format_markup, format_pattern, format_pattern_list,
    format_report,
};
