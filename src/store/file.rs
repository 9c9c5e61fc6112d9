//! File-based settings persistence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::settings::Settings;

use super::{LoadResult, SettingsStore, StoreError};

/// File-based implementation of [`SettingsStore`].
///
/// Stores settings as pretty-printed JSON with atomic write semantics.
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename pattern to prevent corruption:
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
///
/// This ensures the file is either fully written or not written at all.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Creates a new file-based store at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default settings path: `<data dir>/settings-control/settings.json`.
    ///
    /// Falls back to the current directory when the platform has no data
    /// directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(defaults::APP_DIR_NAME)
            .join(defaults::SETTINGS_FILE_NAME)
    }

    /// Returns the path to the settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the settings file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> LoadResult {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadResult::NotFound,
            Err(e) => {
                return LoadResult::Corrupted {
                    reason: format!("Failed to read file: {e}"),
                };
            }
        };

        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => LoadResult::Loaded(settings),
            Err(e) => LoadResult::Corrupted {
                reason: format!("Invalid JSON: {e}"),
            },
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(settings).map_err(StoreError::Serialize)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        // settings.json -> settings.json.tmp, not settings.tmp
        let temp_path = PathBuf::from(format!("{}.tmp", self.path.display()));

        std::fs::write(&temp_path, content).map_err(StoreError::Write)?;
        std::fs::rename(&temp_path, &self.path).map_err(StoreError::Write)?;

        tracing::debug!("Saved settings to '{}'", self.path.display());
        Ok(())
    }
}
