use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::PathBuf;

use super::Tallies;

/// Key the tic-tac-toe tallies are stored under.
pub const TALLY_KEY: &str = "ticTacToeStats";

#[derive(Debug)]
pub enum TallyStoreError {
    IoError(std::io::Error),
    FormatError(serde_yaml_ng::Error),
}

impl std::fmt::Display for TallyStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyStoreError::IoError(e) => write!(f, "IO error: {}", e),
            TallyStoreError::FormatError(e) => write!(f, "Tally file format error: {}", e),
        }
    }
}

impl std::error::Error for TallyStoreError {}

impl From<std::io::Error> for TallyStoreError {
    fn from(e: std::io::Error) -> Self {
        TallyStoreError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for TallyStoreError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        TallyStoreError::FormatError(e)
    }
}

pub trait TallyStore {
    fn load(&self, key: &str) -> Result<Option<Tallies>, TallyStoreError>;
    fn save(&mut self, key: &str, tallies: &Tallies) -> Result<(), TallyStoreError>;
}

/// YAML file mapping keys to tallies. Saving one key keeps the others.
pub struct FileTallyStore {
    path: PathBuf,
}

impl FileTallyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, Tallies>, TallyStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_yaml_ng::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl TallyStore for FileTallyStore {
    fn load(&self, key: &str) -> Result<Option<Tallies>, TallyStoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn save(&mut self, key: &str, tallies: &Tallies) -> Result<(), TallyStoreError> {
        let mut all = self.read_all()?;
        all.insert(key.to_string(), *tallies);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, serde_yaml_ng::to_string(&all)?)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryTallyStore {
    entries: HashMap<String, Tallies>,
}

impl MemoryTallyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TallyStore for MemoryTallyStore {
    fn load(&self, key: &str) -> Result<Option<Tallies>, TallyStoreError> {
        Ok(self.entries.get(key).copied())
    }

    fn save(&mut self, key: &str, tallies: &Tallies) -> Result<(), TallyStoreError> {
        self.entries.insert(key.to_string(), *tallies);
        Ok(())
    }
}
