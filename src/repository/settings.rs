//! Settings documents persistence

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::error::AppResult;

/// Raw JSON storage of one settings document per tool
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored document for `key`, `None` when nothing was saved yet
    async fn load(&self, key: &str) -> AppResult<Option<String>>;

    async fn save(&self, key: &str, document: &str) -> AppResult<()>;
}

/// Stores each document as `<key>.json` in a directory
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    directory: PathBuf,
}

impl FileSettingsStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path(key);
        tracing::debug!(path = %path.display(), "Loading settings");

        match tokio::fs::read_to_string(&path).await {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, document: &str) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.directory).await?;

        // Write next to the target then rename, so readers never see a partial file
        let path = self.path(key);
        let tmp = self.directory.join(format!(".{}.json.tmp", key));
        tokio::fs::write(&tmp, document).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!(path = %path.display(), "Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_document_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path());
        assert_eq!(store.load("pricing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("nested"));

        store.save("concierge", r#"{"cleaning_hours":4}"#).await.unwrap();
        let loaded = store.load("concierge").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"cleaning_hours":4}"#));

        store.save("concierge", "{}").await.unwrap();
        assert_eq!(store.load("concierge").await.unwrap().as_deref(), Some("{}"));
        assert!(store.directory().join("concierge.json").exists());
    }
}
