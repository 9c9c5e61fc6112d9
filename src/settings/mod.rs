//! Settings schema.
//!
//! This module provides:
//! - The full settings record ([`Settings`])
//! - A partial record used for overrides and edits ([`SettingsPatch`])
//! - Field names and values ([`SettingField`], [`SettingValue`])
//!
//! [`Settings::default`] is the factory used whenever no persisted
//! settings exist yet.

mod error;
mod field;
mod patch;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use error::SettingsError;
pub use field::{SettingField, SettingValue, ValueKind};
pub use patch::{SettingsPatch, parse_assignment};

use serde::{Deserialize, Serialize};

/// The user's settings record.
///
/// Missing fields are filled from [`Settings::default`] when deserializing,
/// so older files keep loading after fields are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)] // Preferences are naturally boolean
pub struct Settings {
    pub incognito_mode: bool,
    pub enable_analytics: bool,
    pub allow_notification_requests: bool,
    pub disable_paid_feature_ads: bool,
    pub filter_responses_by_env: bool,
    pub follow_redirects: bool,
    pub validate_ssl: bool,
    pub proxy_enabled: bool,
    pub http_proxy: String,
    pub no_proxy: String,
    pub font_size: u32,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            incognito_mode: false,
            enable_analytics: false,
            allow_notification_requests: true,
            disable_paid_feature_ads: false,
            filter_responses_by_env: false,
            follow_redirects: true,
            validate_ssl: true,
            proxy_enabled: false,
            http_proxy: String::new(),
            no_proxy: String::new(),
            font_size: 13,
            theme: "default".to_string(),
        }
    }
}

impl Settings {
    /// Returns the current value of `field`.
    #[must_use]
    pub fn value(&self, field: SettingField) -> SettingValue {
        match field {
            SettingField::IncognitoMode => self.incognito_mode.into(),
            SettingField::EnableAnalytics => self.enable_analytics.into(),
            SettingField::AllowNotificationRequests => self.allow_notification_requests.into(),
            SettingField::DisablePaidFeatureAds => self.disable_paid_feature_ads.into(),
            SettingField::FilterResponsesByEnv => self.filter_responses_by_env.into(),
            SettingField::FollowRedirects => self.follow_redirects.into(),
            SettingField::ValidateSsl => self.validate_ssl.into(),
            SettingField::ProxyEnabled => self.proxy_enabled.into(),
            SettingField::HttpProxy => self.http_proxy.clone().into(),
            SettingField::NoProxy => self.no_proxy.clone().into(),
            SettingField::FontSize => self.font_size.into(),
            SettingField::Theme => self.theme.clone().into(),
        }
    }

    /// Assigns `value` to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] if the value's kind does not
    /// match the field. The record is left unchanged in that case.
    pub fn assign(&mut self, field: SettingField, value: SettingValue) -> Result<(), SettingsError> {
        let mismatch = |found: &SettingValue| SettingsError::TypeMismatch {
            field,
            expected: field.kind(),
            found: found.kind(),
        };

        match (field, value) {
            (SettingField::IncognitoMode, SettingValue::Bool(b)) => self.incognito_mode = b,
            (SettingField::EnableAnalytics, SettingValue::Bool(b)) => self.enable_analytics = b,
            (SettingField::AllowNotificationRequests, SettingValue::Bool(b)) => {
                self.allow_notification_requests = b;
            }
            (SettingField::DisablePaidFeatureAds, SettingValue::Bool(b)) => {
                self.disable_paid_feature_ads = b;
            }
            (SettingField::FilterResponsesByEnv, SettingValue::Bool(b)) => {
                self.filter_responses_by_env = b;
            }
            (SettingField::FollowRedirects, SettingValue::Bool(b)) => self.follow_redirects = b,
            (SettingField::ValidateSsl, SettingValue::Bool(b)) => self.validate_ssl = b,
            (SettingField::ProxyEnabled, SettingValue::Bool(b)) => self.proxy_enabled = b,
            (SettingField::HttpProxy, SettingValue::Text(s)) => self.http_proxy = s,
            (SettingField::NoProxy, SettingValue::Text(s)) => self.no_proxy = s,
            (SettingField::FontSize, SettingValue::Number(n)) => self.font_size = n,
            (SettingField::Theme, SettingValue::Text(s)) => self.theme = s,
            (_, other) => return Err(mismatch(&other)),
        }

        Ok(())
    }

    /// Returns a copy of these settings with every field in `patch` applied.
    #[must_use]
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        let mut merged = self.clone();
        for (field, value) in patch.iter() {
            // Patch values are typed per field, so assignment cannot mismatch.
            if let Err(e) = merged.assign(field, value) {
                tracing::warn!("Skipping patch entry: {e}");
            }
        }
        merged
    }
}
