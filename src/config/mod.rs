//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Configuration file parsing ([`ConfigDocument`])
//! - Configuration file lookup ([`ConfigLocator`])
//! - The overrides seam consumed by the resolver ([`OverrideSource`])
//! - Default names and locations ([`defaults`])
//!
//! # Failure Semantics
//!
//! Loading never fails from the caller's point of view. A missing file is
//! [`ConfigLoad::NotFound`], an unreadable or malformed one is
//! [`ConfigLoad::Invalid`]; both yield an empty override set. Only the log
//! records what went wrong.

mod cli;
pub mod defaults;
mod document;
mod error;
mod locate;


pub use cli::{Cli, Command};
pub use document::{ConfigDocument, default_config_template};
pub use error::ConfigError;
pub use locate::ConfigLocator;

use std::path::{Path, PathBuf};

use crate::settings::SettingsPatch;

/// Supplies the configuration-file overrides.
///
/// Implementations must not fail: anything that prevents loading is
/// reported as an empty patch.
pub trait OverrideSource {
    /// Returns the current override set.
    fn load_overrides(&self) -> SettingsPatch;
}

/// A fixed override set.
impl OverrideSource for SettingsPatch {
    fn load_overrides(&self) -> SettingsPatch {
        self.clone()
    }
}

/// Result of loading the configuration file.
#[derive(Debug)]
pub enum ConfigLoad {
    /// A file was found and parsed.
    Loaded {
        /// Path the overrides were read from
        path: PathBuf,
        /// Overrides declared by the file
        overrides: SettingsPatch,
    },

    /// No candidate file exists.
    NotFound,

    /// A file exists but could not be read or parsed.
    Invalid(ConfigError),
}

impl ConfigLoad {
    /// Returns the loaded overrides, or an empty patch for
    /// `NotFound`/`Invalid`.
    #[must_use]
    pub fn into_overrides(self) -> SettingsPatch {
        match self {
            Self::Loaded { overrides, .. } => overrides,
            Self::NotFound | Self::Invalid(_) => SettingsPatch::default(),
        }
    }

    /// Returns the path of the file involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Loaded { path, .. } => Some(path),
            Self::NotFound => None,
            Self::Invalid(e) => Some(e.path()),
        }
    }

    /// Returns `true` if overrides were loaded from a file.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// [`OverrideSource`] backed by the configuration file on disk.
#[derive(Debug, Clone)]
pub struct ConfigFileSource {
    locator: ConfigLocator,
}

impl ConfigFileSource {
    /// Creates a source that searches with `locator`.
    #[must_use]
    pub const fn new(locator: ConfigLocator) -> Self {
        Self { locator }
    }

    /// Returns the locator.
    #[must_use]
    pub const fn locator(&self) -> &ConfigLocator {
        &self.locator
    }

    /// Locates and loads the configuration file.
    #[must_use]
    pub fn load(&self) -> ConfigLoad {
        let Some(path) = self.locator.locate() else {
            return ConfigLoad::NotFound;
        };

        match ConfigDocument::load(&path) {
            Ok(document) => {
                if let Some(version) = document
                    .settings_config
                    .as_deref()
                    .filter(|v| *v != defaults::CONFIG_VERSION)
                {
                    tracing::debug!(
                        "Config file '{}' declares version {version}, expected {}",
                        path.display(),
                        defaults::CONFIG_VERSION
                    );
                }
                ConfigLoad::Loaded {
                    path,
                    overrides: document.settings,
                }
            }
            Err(e) => ConfigLoad::Invalid(e),
        }
    }
}

impl OverrideSource for ConfigFileSource {
    fn load_overrides(&self) -> SettingsPatch {
        let load = self.load();
        match &load {
            ConfigLoad::Loaded { path, overrides } => {
                tracing::info!(
                    "Loaded {} setting override(s) from '{}'",
                    overrides.len(),
                    path.display()
                );
            }
            ConfigLoad::NotFound => {
                tracing::debug!("No config file found; no setting overrides apply");
            }
            ConfigLoad::Invalid(e) => {
                tracing::warn!("{e}; ignoring config file");
            }
        }
        load.into_overrides()
    }
}
