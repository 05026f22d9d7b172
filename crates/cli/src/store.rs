//! File-backed hand-off store.
//!
//! The whole store is a single JSON object of string keys to string values,
//! read on every access and rewritten on every change. A missing file is an
//! empty store. Rewrites go through a temporary file in the same directory
//! that is renamed over the old one, so readers see the old object or the
//! new one and never a torn write.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fairway_core::{HandoffError, HandoffStore};
use tempfile::NamedTempFile;

/// [`HandoffStore`] persisted to a JSON file so `quote` and `checkout` can
/// run as separate invocations.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, HandoffError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`Self::load`], but a corrupt file is replaced instead of
    /// blocking every later write.
    fn load_for_update(&self) -> Result<BTreeMap<String, String>, HandoffError> {
        match self.load() {
            Err(HandoffError::Json(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Overwriting corrupt hand-off file"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), HandoffError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut staged, entries)?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl HandoffStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, HandoffError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), HandoffError> {
        let mut entries = self.load_for_update()?;
        entries.insert(key.to_string(), value);
        self.save(&entries)
    }

    fn set_all(&mut self, batch: Vec<(&str, String)>) -> Result<(), HandoffError> {
        let mut entries = self.load_for_update()?;
        for (key, value) in batch {
            entries.insert(key.to_string(), value);
        }
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), HandoffError> {
        let mut entries = self.load_for_update()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
