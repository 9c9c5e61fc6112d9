//! Error types for configuration file loading.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration file operations.
///
/// Never surfaced as a failure to the resolver: a file that fails to load is
/// reported through [`ConfigLoad::Invalid`](super::ConfigLoad::Invalid) and
/// treated as "no overrides".
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON configuration file.
    #[error("Failed to parse JSON config '{}': {source}", path.display())]
    JsonParse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse a TOML configuration file.
    #[error("Failed to parse TOML config '{}': {source}", path.display())]
    TomlParse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns the path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileRead { path, .. }
            | Self::JsonParse { path, .. }
            | Self::TomlParse { path, .. } => path,
        }
    }
}
