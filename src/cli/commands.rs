//! CLI command definitions

use crate::application::{EntryEdit, PatternEdit};
use crate::domain::{Difficulty, DifficultyFilter, EntryDraft, PatternDraft, Rating};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grindlog")]
#[command(about = "Coding practice journal with streaks and goals", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Problems per week to aim for
        #[arg(long, default_value_t = 10)]
        weekly_goal: u32,

        /// Problems per month to aim for
        #[arg(long, default_value_t = 30)]
        monthly_goal: u32,
    },

    /// Manage the coding pattern library
    Pattern {
        #[command(subcommand)]
        action: PatternCommand,
    },

    /// Manage journal entries
    Entry {
        #[command(subcommand)]
        action: EntryCommand,
    },

    /// Log a solved problem (same as `entry add`)
    Log(EntryFields),

    /// Show streaks, goals and this week's activity
    Stats,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PatternCommand {
    /// Add a pattern
    Add(PatternFields),

    /// List patterns
    List {
        /// Only show one difficulty (all, easy, medium, hard)
        #[arg(long, default_value = "all")]
        difficulty: DifficultyFilter,
    },

    /// Show one pattern in full
    Show { id: i64 },

    /// Change fields of a pattern
    Edit {
        id: i64,

        #[command(flatten)]
        fields: PatternFields,
    },

    /// Delete a pattern
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum EntryCommand {
    /// Log a solved problem
    Add(EntryFields),

    /// List entries, newest first
    List {
        /// Only show one difficulty (all, easy, medium, hard)
        #[arg(long, default_value = "all")]
        difficulty: DifficultyFilter,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry in full
    Show { id: i64 },

    /// Change fields of an entry
    Edit {
        id: i64,

        #[command(flatten)]
        fields: EntryFields,

        /// Clear an optional field
        #[arg(long, value_enum)]
        clear: Vec<ClearField>,
    },

    /// Delete an entry
    Delete { id: i64 },
}

#[derive(Args, Debug, Default)]
pub struct PatternFields {
    #[arg(short, long)]
    pub title: Option<String>,

    /// Description; lines starting with "- " or "* " are shown as bullets
    #[arg(long)]
    pub description: Option<String>,

    /// easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Example code, kept verbatim
    #[arg(long)]
    pub code: Option<String>,
}

impl PatternFields {
    pub fn into_draft(self) -> PatternDraft {
        PatternDraft {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            difficulty: self.difficulty,
            code: self.code.unwrap_or_default(),
        }
    }

    pub fn into_edit(self) -> PatternEdit {
        PatternEdit {
            title: self.title,
            description: self.description,
            difficulty: self.difficulty,
            code: self.code,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct EntryFields {
    /// Problem title (e.g. "Two Sum")
    #[arg(short, long)]
    pub title: Option<String>,

    /// Where the problem is from (LeetCode, HackerRank, Codeforces, Other)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Minutes spent
    #[arg(long)]
    pub time: Option<u32>,

    /// Number of attempts
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Topic label (e.g. "Sliding window")
    #[arg(long)]
    pub topic: Option<String>,

    /// How it went, 1-5
    #[arg(long)]
    pub rating: Option<Rating>,

    /// Reflection notes; lines starting with "- " or "* " are shown as bullets
    #[arg(long)]
    pub notes: Option<String>,

    /// Solution code, kept verbatim
    #[arg(long)]
    pub code: Option<String>,
}

/// Optional entry fields that `entry edit --clear` can reset
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearField {
    Platform,
    Time,
    Attempts,
    Topic,
    Rating,
    Notes,
    Code,
}

impl EntryFields {
    pub fn into_draft(self) -> EntryDraft {
        EntryDraft {
            title: self.title.unwrap_or_default(),
            platform: self.platform.unwrap_or_default(),
            difficulty: self.difficulty,
            time: self.time,
            attempts: self.attempts,
            topic: self.topic.unwrap_or_default(),
            rating: self.rating,
            notes: self.notes.unwrap_or_default(),
            code: self.code.unwrap_or_default(),
        }
    }

    pub fn into_edit(self, clear: &[ClearField]) -> EntryEdit {
        let mut edit = EntryEdit {
            title: self.title,
            platform: self.platform,
            difficulty: self.difficulty,
            time: self.time.map(Some),
            attempts: self.attempts.map(Some),
            topic: self.topic,
            rating: self.rating.map(Some),
            notes: self.notes,
            code: self.code,
        };

        for field in clear {
            match field {
                ClearField::Platform => edit.platform = Some(String::new()),
                ClearField::Time => edit.time = Some(None),
                ClearField::Attempts => edit.attempts = Some(None),
                ClearField::Topic => edit.topic = Some(String::new()),
                ClearField::Rating => edit.rating = Some(None),
                ClearField::Notes => edit.notes = Some(String::new()),
                ClearField::Code => edit.code = Some(String::new()),
            }
        }

        edit
    }
}
