use crate::config::DaybookConfig;
use crate::diary::DiaryStore;
use crate::error::{DaybookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Everything a client needs to serve diary commands.
pub struct DaybookContext {
    pub diary: DiaryStore<FileStore>,
    pub config: DaybookConfig,
    pub data_dir: PathBuf,
}

/// Platform data directory for daybook storage and config.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "daybook", "daybook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DaybookError::Storage("could not determine data directory".to_string()))
}

/// Builds the context: resolves the data directory (honoring an override),
/// loads config, and loads the diary collection from disk. The collection
/// is ready to read when this returns.
pub fn initialize(dir_override: Option<PathBuf>) -> Result<DaybookContext> {
    let data_dir = match dir_override {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    let config = DaybookConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.clone());
    let mut diary = DiaryStore::new(store);
    diary.load();

    Ok(DaybookContext {
        diary,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn initialize_with_override_seeds_into_that_directory() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();

        assert_eq!(ctx.data_dir, temp.path());
        assert_eq!(ctx.diary.len(), 2);
        assert!(temp.path().join("diaries.json").exists());
    }

    #[test]
    fn initialize_picks_up_saved_config() {
        let temp = TempDir::new().unwrap();
        let mut config = DaybookConfig::default();
        config.relative_times = false;
        config.save(temp.path()).unwrap();

        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert!(!ctx.config.relative_times);
    }
}
