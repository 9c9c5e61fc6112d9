//! Default names and locations.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Directory name used under platform config and data directories.
pub const APP_DIR_NAME: &str = "settings-control";

/// File name of the deployment configuration file.
pub const CONFIG_FILE_NAME: &str = "settings.config.json";

/// File name of the user's persisted settings.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Environment variable naming the portable installation directory.
///
/// A config file placed there takes precedence over per-user locations.
pub const PORTABLE_DIR_ENV: &str = "SETTINGS_CONTROL_PORTABLE_DIR";

/// Version string written to and expected in config files.
pub const CONFIG_VERSION: &str = "1.0";
