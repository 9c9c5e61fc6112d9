//! Control-precedence resolution.
//!
//! Given the user's settings, the configuration-file overrides and a
//! [`RuleTable`], this module decides which value each setting actually
//! takes and who dictates it.
//!
//! # Priority
//!
//! For a field `F`, highest first:
//!
//! 1. **Config-driven controller** - the overrides switch on a controller of
//!    `F`. The rule's forced value wins, even over a literal override for `F`.
//! 2. **Config literal** - the overrides assign `F` directly.
//! 3. **In-app controller** - a controller of `F` is active in the user's
//!    settings and the overrides have no opinion on that controller.
//! 4. **Uncontrolled** - the user's stored value applies.
//!
//! A controller's effective value comes from the overrides when they name
//! it, so an override that switches a controller *off* also suppresses the
//! in-app rule.
//!
//! All operations are pure: inputs are borrowed for the duration of the call
//! and never mutated, and nothing is cached between calls.

mod status;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
#[cfg(test)]
mod precedence_tests;

pub use status::{CONFIG_FILE_LABEL, ControlledStatus, Controller};

use crate::rules::RuleTable;
use crate::settings::{SettingField, Settings, SettingsPatch};

/// Resolves controlled settings against one rule table and override set.
#[derive(Debug, Clone, Copy)]
pub struct ControlResolver<'a> {
    rules: &'a RuleTable,
    overrides: &'a SettingsPatch,
}

impl<'a> ControlResolver<'a> {
    /// Creates a resolver over `rules` and the configuration `overrides`.
    #[must_use]
    pub const fn new(rules: &'a RuleTable, overrides: &'a SettingsPatch) -> Self {
        Self { rules, overrides }
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn rules(&self) -> &'a RuleTable {
        self.rules
    }

    /// Returns the configuration overrides.
    #[must_use]
    pub const fn overrides(&self) -> &'a SettingsPatch {
        self.overrides
    }

    /// Fixes a settings snapshot for repeated per-field status queries.
    #[must_use]
    pub const fn controlled_status<'s>(&self, settings: &'s Settings) -> StatusQuery<'s>
    where
        'a: 's,
    {
        StatusQuery {
            rules: self.rules,
            overrides: self.overrides,
            settings,
        }
    }

    /// Removes every currently controlled field from `patch`.
    ///
    /// Used before persisting a user edit so a stored value never silently
    /// competes with its controller. Fields that are not controlled pass
    /// through with their original values.
    #[must_use]
    pub fn omit_controlled_settings(
        &self,
        settings: &Settings,
        patch: &SettingsPatch,
    ) -> SettingsPatch {
        let status = self.controlled_status(settings);
        let mut filtered = patch.clone();

        for field in patch.fields() {
            if let Some(controller) = status.get(field).controller() {
                tracing::debug!("Dropping edit to '{field}': controlled by {controller}");
                filtered.remove(field);
            }
        }

        filtered
    }

    /// Returns the settings the rest of the application should run with.
    ///
    /// Every controlled field is overwritten with its winning value; all other
    /// fields keep the stored value. `settings` itself is left untouched.
    #[must_use]
    pub fn effective_settings(&self, settings: &Settings) -> Settings {
        let status = self.controlled_status(settings);
        let mut effective = settings.clone();

        for (field, controlled) in status.controlled() {
            if let ControlledStatus::Controlled { value, .. } = controlled {
                // Rule values are kind-checked by `RuleTable::new` and
                // override values are typed per field.
                if let Err(e) = effective.assign(field, value) {
                    tracing::warn!("Keeping stored value for '{field}': {e}");
                }
            }
        }

        effective
    }
}

/// Per-field status queries against one settings snapshot.
///
/// Created by [`ControlResolver::controlled_status`].
#[derive(Debug, Clone, Copy)]
pub struct StatusQuery<'a> {
    rules: &'a RuleTable,
    overrides: &'a SettingsPatch,
    settings: &'a Settings,
}

impl StatusQuery<'_> {
    /// Returns the status of `field`.
    #[must_use]
    pub fn get(&self, field: SettingField) -> ControlledStatus {
        if let Some(rule) = self.rules.rules_for(field).find(|rule| {
            self.overrides
                .get(rule.controller)
                .is_some_and(|value| value.is_active())
        }) {
            return ControlledStatus::Controlled {
                controller: Controller::ConfigFile,
                value: rule.forced.clone(),
            };
        }

        if let Some(value) = self.overrides.get(field) {
            return ControlledStatus::Controlled {
                controller: Controller::ConfigFile,
                value,
            };
        }

        if let Some(rule) = self.rules.rules_for(field).find(|rule| {
            !self.overrides.contains(rule.controller)
                && self.settings.value(rule.controller).is_active()
        }) {
            return ControlledStatus::Controlled {
                controller: Controller::Setting(rule.controller),
                value: rule.forced.clone(),
            };
        }

        ControlledStatus::Uncontrolled
    }

    /// Returns `true` if `field` is controlled.
    #[must_use]
    pub fn is_controlled(&self, field: SettingField) -> bool {
        self.get(field).is_controlled()
    }

    /// Iterates over every controlled field and its status, in
    /// [`SettingField::ALL`] order.
    pub fn controlled(&self) -> impl Iterator<Item = (SettingField, ControlledStatus)> + '_ {
        SettingField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, status)| status.is_controlled())
    }
}
