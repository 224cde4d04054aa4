//! File-backed [`UserDataStore`].
//!
//! The record is kept as pretty-printed JSON in a single file. Writes go to a
//! sibling temp file which is synced and then renamed over the target, so the
//! file on disk is always either the old record or the new one.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::UserData;
use crate::traits::UserDataStore;

/// The preferences directory name under the platform data dir.
const DATA_DIR: &str = "cinescope";

/// The preferences file name.
const PREFS_FILE: &str = "user_prefs.json";

/// Stores [`UserData`] in a JSON file.
#[derive(Debug, Clone)]
pub struct FileUserDataStore {
    path: PathBuf,
}

impl FileUserDataStore {
    /// Store at the default location under the platform data directory.
    pub fn new() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDirectory)?;
        Ok(Self::at(base.join(DATA_DIR).join(PREFS_FILE)))
    }

    /// Store in `dir` using the default file name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::at(dir.as_ref().join(PREFS_FILE))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_sync(path: &Path) -> Result<Option<UserData>, StorageError> {
        let contents = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io("read", path, &e)),
        };
        let data = serde_json::from_slice(&contents)?;
        Ok(Some(data))
    }

    fn write_sync(path: &Path, data: &UserData) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::io("create directory", parent, &e))?;
            }
        }

        let tmp_path = path.with_extension("json.tmp");
        {
            let file =
                File::create(&tmp_path).map_err(|e| StorageError::io("write", &tmp_path, &e))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, data)?;
            writer
                .flush()
                .map_err(|e| StorageError::io("write", &tmp_path, &e))?;
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| StorageError::io("sync", &tmp_path, &e))?;
        }

        fs::rename(&tmp_path, path).map_err(|e| StorageError::io("replace", path, &e))
    }
}

#[async_trait]
impl UserDataStore for FileUserDataStore {
    async fn read(&self) -> Result<Option<UserData>, StorageError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::read_sync(&path))
            .await
            .map_err(|e| StorageError::Other(e.to_string()))?
    }

    async fn write(&self, data: &UserData) -> Result<(), StorageError> {
        let path = self.path.clone();
        let data = data.clone();
        tokio::task::spawn_blocking(move || Self::write_sync(&path, &data))
            .await
            .map_err(|e| StorageError::Other(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileUserDataStore::in_dir(temp_dir.path());
        assert!(store.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileUserDataStore::in_dir(temp_dir.path());

        let data = UserData {
            theme_config: ThemeConfig::Dark,
            use_dynamic_color: false,
            ..UserData::default()
        };
        store.write(&data).await.unwrap();

        assert_eq!(store.read().await.unwrap(), Some(data));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileUserDataStore::at(temp_dir.path().join("nested").join("prefs.json"));

        assert!(!store.path().parent().unwrap().exists());
        store.write(&UserData::default()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_write_replaces_whole_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileUserDataStore::in_dir(temp_dir.path());

        let first = UserData {
            name: "A much longer name than the next one".to_string(),
            ..UserData::default()
        };
        store.write(&first).await.unwrap();

        let second = UserData {
            name: "B".to_string(),
            ..UserData::default()
        };
        store.write(&second).await.unwrap();

        assert_eq!(store.read().await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_read_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileUserDataStore::in_dir(temp_dir.path());
        fs::write(store.path(), "not valid json").unwrap();

        let result = store.read().await;
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
