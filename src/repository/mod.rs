//! Repository layer for settings persistence

pub mod settings;

use std::sync::Arc;

pub use settings::{FileSettingsStore, SettingsStore};

/// Main repository struct holding the storage backends
#[derive(Clone)]
pub struct Repository {
    pub settings: Arc<dyn SettingsStore>,
}

impl Repository {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// Repository backed by JSON files in `directory`
    pub fn with_directory(directory: impl Into<std::path::PathBuf>) -> Self {
        Self::new(Arc::new(FileSettingsStore::new(directory)))
    }
}
