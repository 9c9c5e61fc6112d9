//! Configuration file location lookup.

use std::path::{Path, PathBuf};

use super::defaults;

/// Where to look for the configuration file.
///
/// Candidates are checked in order and the first existing file wins:
///
/// 1. **Portable directory** - from the `SETTINGS_CONTROL_PORTABLE_DIR`
///    environment variable
/// 2. **Per-user directory** - `<config dir>/settings-control/`
/// 3. **Development directory** - the crate directory, debug builds only
///
/// An explicit path replaces the lookup entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLocator {
    explicit: Option<PathBuf>,
    portable_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    dev_dir: Option<PathBuf>,
}

impl ConfigLocator {
    /// Creates a locator with no candidates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locator from the process environment and platform
    /// directories.
    #[must_use]
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        let portable_dir = std::env::var_os(defaults::PORTABLE_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let user_dir = dirs::config_dir().map(|dir| dir.join(defaults::APP_DIR_NAME));
        let dev_dir = cfg!(debug_assertions).then(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));

        Self {
            explicit,
            portable_dir,
            user_dir,
            dev_dir,
        }
    }

    /// Uses `path` instead of searching.
    #[must_use]
    pub fn with_explicit(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Sets the portable installation directory.
    #[must_use]
    pub fn with_portable_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.portable_dir = Some(dir.into());
        self
    }

    /// Sets the per-user configuration directory.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(dir.into());
        self
    }

    /// Sets the development directory.
    #[must_use]
    pub fn with_dev_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dev_dir = Some(dir.into());
        self
    }

    /// Returns the explicit path, if one was given.
    #[must_use]
    pub fn explicit(&self) -> Option<&Path> {
        self.explicit.as_deref()
    }

    /// Returns every candidate path in priority order.
    #[must_use]
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(explicit) = &self.explicit {
            return vec![explicit.clone()];
        }

        [&self.portable_dir, &self.user_dir, &self.dev_dir]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(defaults::CONFIG_FILE_NAME))
            .collect()
    }

    /// Returns the first candidate that exists as a file.
    #[must_use]
    pub fn locate(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|path| path.is_file())
    }
}
