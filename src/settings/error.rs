//! Error types for setting names and values.

use thiserror::Error;

use super::{SettingField, ValueKind};

/// Error type for reading or assigning individual settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The name does not match any known setting.
    #[error("Unknown setting '{0}'")]
    UnknownField(String),

    /// A value of the wrong kind was assigned to a setting.
    #[error("Setting '{field}' expects a {expected} value, got a {found} value")]
    TypeMismatch {
        /// The setting being assigned
        field: SettingField,
        /// Kind the setting holds
        expected: ValueKind,
        /// Kind of the rejected value
        found: ValueKind,
    },

    /// A raw value could not be parsed for the setting.
    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidValue {
        /// The setting being parsed
        field: SettingField,
        /// The raw value
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A `KEY=VALUE` assignment was malformed.
    #[error("Invalid assignment '{0}': expected 'KEY=VALUE'")]
    InvalidAssignment(String),
}
