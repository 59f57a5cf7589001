//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, weekly_goal: u32, monthly_goal: u32) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new(weekly_goal, monthly_goal);
    workspace.save_config(&config)?;

    tracing::info!(root = %path.display(), "initialized journal");
    Ok(config)
}
