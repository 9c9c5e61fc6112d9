//! Resolution results.

use std::fmt;

use serde::Serialize;

use crate::settings::{SettingField, SettingValue};

/// Label used for configuration-file control.
pub const CONFIG_FILE_LABEL: &str = "config file";

/// Who dictates a controlled setting's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    /// The deployment configuration file, directly or through a controller
    /// it switches on.
    ConfigFile,
    /// Another setting in the user's own settings.
    Setting(SettingField),
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFile => f.write_str(CONFIG_FILE_LABEL),
            Self::Setting(field) => f.write_str(field.as_str()),
        }
    }
}

/// Whether a setting is controlled, by whom, and to what value.
///
/// Derived on demand; never persisted. Serializes as
/// `{ "isControlled": bool, "controller": string | null, "value": any | null }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "StatusRecord")]
pub enum ControlledStatus {
    /// The user's own stored value applies.
    Uncontrolled,
    /// The value is dictated by `controller`.
    Controlled {
        /// Source of the control
        controller: Controller,
        /// The winning value
        value: SettingValue,
    },
}

impl ControlledStatus {
    /// Returns `true` if the setting is controlled.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Returns the controller, if any.
    #[must_use]
    pub const fn controller(&self) -> Option<Controller> {
        match self {
            Self::Controlled { controller, .. } => Some(*controller),
            Self::Uncontrolled => None,
        }
    }

    /// Returns the winning value, if controlled.
    #[must_use]
    pub const fn value(&self) -> Option<&SettingValue> {
        match self {
            Self::Controlled { value, .. } => Some(value),
            Self::Uncontrolled => None,
        }
    }
}

impl fmt::Display for ControlledStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncontrolled => f.write_str("uncontrolled"),
            Self::Controlled { controller, value } => {
                write!(f, "controlled by {controller} = {value}")
            }
        }
    }
}

/// Flat serialization shape for [`ControlledStatus`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusRecord {
    is_controlled: bool,
    controller: Option<String>,
    value: Option<SettingValue>,
}

impl From<ControlledStatus> for StatusRecord {
    fn from(status: ControlledStatus) -> Self {
        match status {
            ControlledStatus::Uncontrolled => Self {
                is_controlled: false,
                controller: None,
                value: None,
            },
            ControlledStatus::Controlled { controller, value } => Self {
                is_controlled: true,
                controller: Some(controller.to_string()),
                value: Some(value),
            },
        }
    }
}
