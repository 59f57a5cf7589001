//! Configuration management

use crate::domain::goals::{DEFAULT_MONTHLY_GOAL, DEFAULT_WEEKLY_GOAL};
use crate::error::{GrindlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".grindlog";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: u32,
    pub created: DateTime<Utc>,
}

fn default_weekly_goal() -> u32 {
    DEFAULT_WEEKLY_GOAL
}

fn default_monthly_goal() -> u32 {
    DEFAULT_MONTHLY_GOAL
}

impl Default for Config {
    fn default() -> Self {
        Config {
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Create a new config with the given goals
    pub fn new(weekly_goal: u32, monthly_goal: u32) -> Self {
        Config {
            weekly_goal,
            monthly_goal,
            created: Utc::now(),
        }
    }

    /// Load config from .grindlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GrindlogError::NotGrindlogDirectory(path.to_path_buf())
            } else {
                GrindlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| GrindlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .grindlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Parse a goal value; goals are positive whole numbers
    pub fn parse_goal(key: &str, value: &str) -> Result<u32> {
        match value.trim().parse::<u32>() {
            Ok(goal) if goal > 0 => Ok(goal),
            _ => Err(GrindlogError::Config(format!(
                "Invalid {}: '{}'. A goal must be a positive whole number",
                key, value
            ))),
        }
    }
}
