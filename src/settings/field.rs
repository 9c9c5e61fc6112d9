//! Setting names and the values they can hold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SettingsError;

/// Name of a single user-configurable setting.
///
/// Serialized with the camelCase names used in settings and config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingField {
    /// Privacy mode; controls analytics and notification prompts.
    IncognitoMode,
    /// Anonymous usage analytics opt-in.
    EnableAnalytics,
    /// Whether the app may ask for notification permission.
    AllowNotificationRequests,
    /// Hide advertisements for paid features.
    DisablePaidFeatureAds,
    /// Only show responses recorded under the active environment.
    FilterResponsesByEnv,
    /// Follow HTTP redirects automatically.
    FollowRedirects,
    /// Validate TLS certificates.
    ValidateSsl,
    /// Route requests through the configured proxy.
    ProxyEnabled,
    /// Proxy URL for HTTP requests.
    HttpProxy,
    /// Comma-separated hosts that bypass the proxy.
    NoProxy,
    /// Editor font size in points.
    FontSize,
    /// UI theme name.
    Theme,
}

impl SettingField {
    /// Every field, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::IncognitoMode,
        Self::EnableAnalytics,
        Self::AllowNotificationRequests,
        Self::DisablePaidFeatureAds,
        Self::FilterResponsesByEnv,
        Self::FollowRedirects,
        Self::ValidateSsl,
        Self::ProxyEnabled,
        Self::HttpProxy,
        Self::NoProxy,
        Self::FontSize,
        Self::Theme,
    ];

    /// Returns the serialized (camelCase) name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IncognitoMode => "incognitoMode",
            Self::EnableAnalytics => "enableAnalytics",
            Self::AllowNotificationRequests => "allowNotificationRequests",
            Self::DisablePaidFeatureAds => "disablePaidFeatureAds",
            Self::FilterResponsesByEnv => "filterResponsesByEnv",
            Self::FollowRedirects => "followRedirects",
            Self::ValidateSsl => "validateSsl",
            Self::ProxyEnabled => "proxyEnabled",
            Self::HttpProxy => "httpProxy",
            Self::NoProxy => "noProxy",
            Self::FontSize => "fontSize",
            Self::Theme => "theme",
        }
    }

    /// Returns the kind of value this field holds.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::IncognitoMode
            | Self::EnableAnalytics
            | Self::AllowNotificationRequests
            | Self::DisablePaidFeatureAds
            | Self::FilterResponsesByEnv
            | Self::FollowRedirects
            | Self::ValidateSsl
            | Self::ProxyEnabled => ValueKind::Bool,
            Self::FontSize => ValueKind::Number,
            Self::HttpProxy | Self::NoProxy | Self::Theme => ValueKind::Text,
        }
    }

    /// Parses a raw command-line value according to this field's kind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidValue`] if `raw` cannot be read as
    /// the field's kind.
    pub fn parse_value(self, raw: &str) -> Result<SettingValue, SettingsError> {
        let invalid = |reason: &str| SettingsError::InvalidValue {
            field: self,
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        match self.kind() {
            ValueKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Ok(SettingValue::Bool(true)),
                "false" | "off" | "no" | "0" => Ok(SettingValue::Bool(false)),
                _ => Err(invalid("expected true or false")),
            },
            ValueKind::Number => raw
                .trim()
                .parse::<u32>()
                .map(SettingValue::Number)
                .map_err(|e| invalid(&e.to_string())),
            ValueKind::Text => Ok(SettingValue::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownField(s.to_string()))
    }
}

/// Kind of value a [`SettingField`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `true` / `false`
    Bool,
    /// Unsigned integer
    Number,
    /// Free-form string
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::Text => write!(f, "string"),
        }
    }
}

/// Value of a single setting.
///
/// Serialized untagged so it reads as a plain JSON scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(u32),
    /// String value
    Text(String),
}

impl SettingValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Returns `true` if this value switches a controller on.
    ///
    /// Active means `true`, a non-zero number, or a non-empty string.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
