//! Configuration file parsing.
//!
//! Defines the on-disk shape of the deployment configuration file with serde.
//! JSON is the primary format; files with a `.toml` extension are read as
//! TOML with the same structure.

use std::path::Path;

use serde::Deserialize;

use crate::settings::SettingsPatch;

use super::ConfigError;

/// Root structure of a configuration file.
///
/// Both keys are optional. Unknown setting names inside `settings` are
/// ignored so a newer file still loads on an older build.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Format version declared by the file
    pub settings_config: Option<String>,

    /// Setting overrides enforced by the deployment
    pub settings: SettingsPatch,
}

impl ConfigDocument {
    /// Loads a configuration file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        if is_toml(path) {
            Self::parse_toml(&content).map_err(|source| ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Self::parse_json(&content).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Parses a configuration document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parses a configuration document from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Generates an example configuration file.
#[must_use]
pub fn default_config_template() -> String {
    format!(
        r#"{{
  "settingsConfig": "{}",
  "settings": {{
    "incognitoMode": true,
    "disablePaidFeatureAds": true
  }}
}}
"#,
        super::defaults::CONFIG_VERSION
    )
}
