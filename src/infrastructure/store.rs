//! Key-value blob storage for the record collections

use crate::error::{GrindlogError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the serialized pattern collection
pub const PATTERNS_KEY: &str = "codingPatterns";
/// Key holding the serialized journal entry collection
pub const JOURNAL_KEY: &str = "journalEntries";

/// Flat string store keyed by name
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing was ever stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

fn persistence_error(key: &str, message: impl Into<String>) -> GrindlogError {
    GrindlogError::Persistence {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Load a whole collection. A missing key is an empty collection.
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        None => Ok(Vec::new()),
        Some(blob) => serde_json::from_str(&blob)
            .map_err(|e| persistence_error(key, format!("corrupt data: {}", e))),
    }
}

/// Serialize and store a whole collection.
pub fn save_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let blob = serde_json::to_string(items)?;
    store.set(key, &blob)
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(persistence_error(key, e.to_string())),
        }
    }

    /// Best-effort atomic replace: write a temp file next to the target,
    /// then rename it into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", key, std::process::id()));

        let write = || -> std::io::Result<()> {
            if !self.dir.exists() {
                fs::create_dir_all(&self.dir)?;
            }
            fs::write(&tmp_path, value)?;
            if cfg!(windows) && path.exists() {
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        };

        write().map_err(|e| persistence_error(key, e.to_string()))?;
        tracing::debug!(key, bytes = value.len(), "wrote {}", path.display());
        Ok(())
    }
}

/// In-process store, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Pattern, PatternDraft};
    use tempfile::TempDir;

    fn sample_patterns() -> Vec<Pattern> {
        vec![
            PatternDraft::new("Two pointers", "- left\n- right", Difficulty::Easy).into_pattern(1),
            PatternDraft::new("Monotonic stack", "next greater", Difficulty::Hard)
                .with_code("stack = []")
                .into_pattern(2),
        ]
    }

    #[test]
    fn test_missing_key_is_empty_collection() {
        let store = MemoryStore::new();
        let patterns: Vec<Pattern> = load_collection(&store, PATTERNS_KEY).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_round_trip_memory() {
        let mut store = MemoryStore::new();
        let patterns = sample_patterns();
        save_collection(&mut store, PATTERNS_KEY, &patterns).unwrap();
        let loaded: Vec<Pattern> = load_collection(&store, PATTERNS_KEY).unwrap();
        assert_eq!(loaded, patterns);
    }

    #[test]
    fn test_corrupt_blob_is_persistence_error() {
        let mut store = MemoryStore::new();
        store.set(JOURNAL_KEY, "{not json").unwrap();
        let result: Result<Vec<Pattern>> = load_collection(&store, JOURNAL_KEY);
        match result.unwrap_err() {
            GrindlogError::Persistence { key, message } => {
                assert_eq!(key, JOURNAL_KEY);
                assert!(message.contains("corrupt data"));
            }
            other => panic!("Expected Persistence error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("store"));
        let patterns = sample_patterns();

        save_collection(&mut store, PATTERNS_KEY, &patterns).unwrap();
        assert!(temp.path().join("store/codingPatterns.json").exists());

        let reopened = FileStore::new(temp.path().join("store"));
        let loaded: Vec<Pattern> = load_collection(&reopened, PATTERNS_KEY).unwrap();
        assert_eq!(loaded, patterns);
    }

    #[test]
    fn test_file_store_overwrites_and_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set(JOURNAL_KEY, "[1]").unwrap();
        store.set(JOURNAL_KEY, "[2]").unwrap();

        assert_eq!(store.get(JOURNAL_KEY).unwrap().as_deref(), Some("[2]"));
        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["journalEntries.json".to_string()]);
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.get(PATTERNS_KEY).unwrap(), None);
    }
}
