//! Partial settings records.

use serde::{Deserialize, Serialize};

use super::{SettingField, SettingValue, SettingsError};

/// A partial [`Settings`](super::Settings) record.
///
/// Absent fields mean "no opinion". Used for configuration-file overrides
/// and for candidate edits before they are persisted. Only present fields
/// are serialized; unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incognito_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_analytics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_notification_requests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_paid_feature_ads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_responses_by_env: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl SettingsPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] if the value's kind does not
    /// match the field.
    pub fn with(
        mut self,
        field: SettingField,
        value: impl Into<SettingValue>,
    ) -> Result<Self, SettingsError> {
        self.set(field, value.into())?;
        Ok(self)
    }

    /// Returns the value this patch assigns to `field`, if any.
    #[must_use]
    pub fn get(&self, field: SettingField) -> Option<SettingValue> {
        match field {
            SettingField::IncognitoMode => self.incognito_mode.map(SettingValue::from),
            SettingField::EnableAnalytics => self.enable_analytics.map(SettingValue::from),
            SettingField::AllowNotificationRequests => {
                self.allow_notification_requests.map(SettingValue::from)
            }
            SettingField::DisablePaidFeatureAds => {
                self.disable_paid_feature_ads.map(SettingValue::from)
            }
            SettingField::FilterResponsesByEnv => {
                self.filter_responses_by_env.map(SettingValue::from)
            }
            SettingField::FollowRedirects => self.follow_redirects.map(SettingValue::from),
            SettingField::ValidateSsl => self.validate_ssl.map(SettingValue::from),
            SettingField::ProxyEnabled => self.proxy_enabled.map(SettingValue::from),
            SettingField::HttpProxy => self.http_proxy.clone().map(SettingValue::from),
            SettingField::NoProxy => self.no_proxy.clone().map(SettingValue::from),
            SettingField::FontSize => self.font_size.map(SettingValue::from),
            SettingField::Theme => self.theme.clone().map(SettingValue::from),
        }
    }

    /// Returns `true` if this patch has an opinion on `field`.
    #[must_use]
    pub const fn contains(&self, field: SettingField) -> bool {
        match field {
            SettingField::IncognitoMode => self.incognito_mode.is_some(),
            SettingField::EnableAnalytics => self.enable_analytics.is_some(),
            SettingField::AllowNotificationRequests => self.allow_notification_requests.is_some(),
            SettingField::DisablePaidFeatureAds => self.disable_paid_feature_ads.is_some(),
            SettingField::FilterResponsesByEnv => self.filter_responses_by_env.is_some(),
            SettingField::FollowRedirects => self.follow_redirects.is_some(),
            SettingField::ValidateSsl => self.validate_ssl.is_some(),
            SettingField::ProxyEnabled => self.proxy_enabled.is_some(),
            SettingField::HttpProxy => self.http_proxy.is_some(),
            SettingField::NoProxy => self.no_proxy.is_some(),
            SettingField::FontSize => self.font_size.is_some(),
            SettingField::Theme => self.theme.is_some(),
        }
    }

    /// Assigns `value` to `field` in this patch.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] if the value's kind does not
    /// match the field. The patch is left unchanged in that case.
    pub fn set(&mut self, field: SettingField, value: SettingValue) -> Result<(), SettingsError> {
        let found = value.kind();

        match (field, value) {
            (SettingField::IncognitoMode, SettingValue::Bool(b)) => self.incognito_mode = Some(b),
            (SettingField::EnableAnalytics, SettingValue::Bool(b)) => {
                self.enable_analytics = Some(b);
            }
            (SettingField::AllowNotificationRequests, SettingValue::Bool(b)) => {
                self.allow_notification_requests = Some(b);
            }
            (SettingField::DisablePaidFeatureAds, SettingValue::Bool(b)) => {
                self.disable_paid_feature_ads = Some(b);
            }
            (SettingField::FilterResponsesByEnv, SettingValue::Bool(b)) => {
                self.filter_responses_by_env = Some(b);
            }
            (SettingField::FollowRedirects, SettingValue::Bool(b)) => {
                self.follow_redirects = Some(b);
            }
            (SettingField::ValidateSsl, SettingValue::Bool(b)) => self.validate_ssl = Some(b),
            (SettingField::ProxyEnabled, SettingValue::Bool(b)) => self.proxy_enabled = Some(b),
            (SettingField::HttpProxy, SettingValue::Text(s)) => self.http_proxy = Some(s),
            (SettingField::NoProxy, SettingValue::Text(s)) => self.no_proxy = Some(s),
            (SettingField::FontSize, SettingValue::Number(n)) => self.font_size = Some(n),
            (SettingField::Theme, SettingValue::Text(s)) => self.theme = Some(s),
            _ => {
                return Err(SettingsError::TypeMismatch {
                    field,
                    expected: field.kind(),
                    found,
                });
            }
        }

        Ok(())
    }

    /// Removes `field` from this patch, returning its previous value.
    pub fn remove(&mut self, field: SettingField) -> Option<SettingValue> {
        let previous = self.get(field);
        match field {
            SettingField::IncognitoMode => self.incognito_mode = None,
            SettingField::EnableAnalytics => self.enable_analytics = None,
            SettingField::AllowNotificationRequests => self.allow_notification_requests = None,
            SettingField::DisablePaidFeatureAds => self.disable_paid_feature_ads = None,
            SettingField::FilterResponsesByEnv => self.filter_responses_by_env = None,
            SettingField::FollowRedirects => self.follow_redirects = None,
            SettingField::ValidateSsl => self.validate_ssl = None,
            SettingField::ProxyEnabled => self.proxy_enabled = None,
            SettingField::HttpProxy => self.http_proxy = None,
            SettingField::NoProxy => self.no_proxy = None,
            SettingField::FontSize => self.font_size = None,
            SettingField::Theme => self.theme = None,
        }
        previous
    }

    /// Iterates over the fields present in this patch, in
    /// [`SettingField::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SettingField, SettingValue)> + '_ {
        SettingField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// Returns the names of the fields present in this patch.
    pub fn fields(&self) -> impl Iterator<Item = SettingField> + '_ {
        SettingField::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
    }

    /// Returns the number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields().count()
    }

    /// Returns `true` if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<Vec<(SettingField, SettingValue)>> for SettingsPatch {
    type Error = SettingsError;

    fn try_from(entries: Vec<(SettingField, SettingValue)>) -> Result<Self, Self::Error> {
        let mut patch = Self::new();
        for (field, value) in entries {
            patch.set(field, value)?;
        }
        Ok(patch)
    }
}

/// Parses a `KEY=VALUE` assignment, reading the value by the field's kind.
///
/// # Errors
///
/// Returns an error if the assignment has no `=`, names an unknown field,
/// or carries a value that does not parse for the field.
pub fn parse_assignment(raw: &str) -> Result<(SettingField, SettingValue), SettingsError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| SettingsError::InvalidAssignment(raw.to_string()))?;

    let field: SettingField = key.trim().parse()?;
    let value = field.parse_value(value)?;
    Ok((field, value))
}
