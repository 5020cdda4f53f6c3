use super::KeyValueStore;
use crate::error::{DaybookError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value storage. Each key maps to `<root>/<key>.json`;
/// the root directory is created lazily on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DaybookError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(DaybookError::Io)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), value).map_err(DaybookError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_missing_key_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(store.get("diaries").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("diaries", "[1,2,3]").unwrap();
        assert_eq!(store.get("diaries").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn set_creates_missing_root_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("deep").join("dir");
        let mut store = FileStore::new(nested.clone());
        store.set("diaries", "[]").unwrap();
        assert!(nested.join("diaries.json").exists());
    }

    #[test]
    fn set_replaces_previous_value_wholesale() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("diaries", "old").unwrap();
        store.set("diaries", "new").unwrap();
        assert_eq!(store.get("diaries").unwrap().as_deref(), Some("new"));
    }
}
