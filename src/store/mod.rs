//! Settings persistence.
//!
//! This module provides abstractions for storing and retrieving the user's
//! [`Settings`] record, and the edit flow that keeps controlled settings out
//! of what gets persisted.

mod edit;
mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use edit::{EditOutcome, apply_user_edit};
pub use file::FileSettingsStore;

use std::io;

use thiserror::Error;

use crate::settings::Settings;

/// Result of loading settings from persistent storage.
///
/// Explicitly models all valid states to avoid ambiguity:
/// - Successfully loaded previous settings
/// - No settings file exists (first run)
/// - Settings file exists but is corrupted/unreadable
#[derive(Debug, Clone)]
pub enum LoadResult {
    /// Successfully loaded previously saved settings.
    Loaded(Settings),

    /// No settings file exists (first run or explicitly deleted).
    NotFound,

    /// Settings file exists but could not be parsed.
    /// Callers continue with defaults; the next save overwrites the file.
    Corrupted {
        /// Reason for corruption (for logging/debugging).
        reason: String,
    },
}

impl LoadResult {
    /// Returns the loaded settings, or [`Settings::default`] for
    /// `NotFound`/`Corrupted`.
    #[must_use]
    pub fn into_settings(self) -> Settings {
        match self {
            Self::Loaded(settings) => settings,
            Self::NotFound | Self::Corrupted { .. } => Settings::default(),
        }
    }

    /// Returns `true` if settings were successfully loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Errors that can occur while persisting settings.
///
/// Only covers write-side errors; read-side issues are modeled
/// as [`LoadResult`] variants to allow graceful degradation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to write the settings file.
    #[error("Failed to write settings file: {0}")]
    Write(#[source] io::Error),

    /// Failed to serialize settings to JSON.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Abstraction for persisting the user's settings.
///
/// Implementations should:
/// - Use atomic writes to prevent corruption from crashes
/// - Handle missing files gracefully (return `LoadResult::NotFound`)
/// - Degrade gracefully on read errors (return `LoadResult::Corrupted`)
///
/// # Testing
///
/// Use `MockSettingsStore` in tests to avoid filesystem dependencies.
pub trait SettingsStore {
    /// Loads previously saved settings.
    fn load(&self) -> LoadResult;

    /// Saves the full settings record.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}
