//! Config management use case

use crate::error::{GrindlogError, Result};
use crate::infrastructure::{Config, Workspace};

/// Service for managing journal configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "weekly_goal" => Ok(config.weekly_goal.to_string()),
            "monthly_goal" => Ok(config.monthly_goal.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(GrindlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: weekly_goal, monthly_goal, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "weekly_goal" => config.weekly_goal = Config::parse_goal(key, value)?,
            "monthly_goal" => config.monthly_goal = Config::parse_goal(key, value)?,
            "created" => {
                return Err(GrindlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(GrindlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: weekly_goal, monthly_goal",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
