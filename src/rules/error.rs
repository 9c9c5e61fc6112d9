//! Error types for rule table validation.

use thiserror::Error;

use crate::settings::{SettingField, ValueKind};

/// Error returned when a [`RuleTable`](super::RuleTable) is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A rule names the same field as controller and controlled.
    #[error("Setting '{0}' cannot control itself")]
    SelfControl(SettingField),

    /// A rule forces a value of the wrong kind.
    #[error("Rule for '{field}' forces a {found} value, but the setting holds a {expected}")]
    KindMismatch {
        /// The controlled setting
        field: SettingField,
        /// Kind the setting holds
        expected: ValueKind,
        /// Kind of the forced value
        found: ValueKind,
    },

    /// A controller is itself controlled by another rule.
    #[error(
        "Controller chain '{upstream}' -> '{middle}' -> '{downstream}' is not supported; \
         controllers must not be controlled"
    )]
    ControllerChain {
        /// Controller of the middle setting
        upstream: SettingField,
        /// Setting acting as both controlled and controller
        middle: SettingField,
        /// Setting controlled by the middle one
        downstream: SettingField,
    },
}
