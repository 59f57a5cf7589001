//! Journal directory discovery and layout

use crate::error::{GrindlogError, Result};
use crate::infrastructure::config::CONFIG_DIR;
use crate::infrastructure::{Config, FileStore, Repository};
use std::fs;
use std::path::{Path, PathBuf};

const STORE_DIR: &str = "store";

/// A journal root directory: `<root>/.grindlog/{config.toml,store/}`
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks GRINDLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("GRINDLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(GrindlogError::Config(format!(
                    "GRINDLOG_ROOT is set to '{}' but no .grindlog directory found. \
                    Run 'grindlog init' in that directory or unset GRINDLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(GrindlogError::NotGrindlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    /// Create the `.grindlog` directory structure
    pub fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(GrindlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(config_dir.join(STORE_DIR))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(STORE_DIR)
    }

    /// Open the record repository backed by this journal's store directory
    pub fn open_repository(&self) -> Result<Repository<FileStore>> {
        if !self.is_initialized() {
            return Err(GrindlogError::NotGrindlogDirectory(self.root.clone()));
        }
        Ok(Repository::open(FileStore::new(self.store_dir())))
    }
}
