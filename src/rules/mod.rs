//! Declarative controller rules.
//!
//! A [`ControlRule`] says that whenever `controller` is active, `controlled`
//! is forced to `forced`. The [`RuleTable`] is a flat, single-hop list: a
//! field that is controlled by some rule may not itself act as a controller.
//! This keeps resolution acyclic and independent of rule order across
//! fields.

mod error;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use error::RuleError;

use crate::settings::{SettingField, SettingValue};

/// One controller relationship between two settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRule {
    /// The setting whose value is forced.
    pub controlled: SettingField,
    /// The setting that, when active, forces it.
    pub controller: SettingField,
    /// Value `controlled` takes while `controller` is active.
    pub forced: SettingValue,
}

impl ControlRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new(
        controlled: SettingField,
        controller: SettingField,
        forced: impl Into<SettingValue>,
    ) -> Self {
        Self {
            controlled,
            controller,
            forced: forced.into(),
        }
    }
}

/// Validated, ordered list of [`ControlRule`]s.
///
/// Several rules may name the same controlled field. They are consulted in
/// table order, and within a precedence tier the first applicable rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<ControlRule>,
}

impl RuleTable {
    /// Creates a rule table after validating every rule.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule controls itself, forces a value of the
    /// wrong kind, or controls a field that another rule uses as its
    /// controller (a chain).
    pub fn new(rules: Vec<ControlRule>) -> Result<Self, RuleError> {
        for rule in &rules {
            if rule.controlled == rule.controller {
                return Err(RuleError::SelfControl(rule.controlled));
            }

            if rule.forced.kind() != rule.controlled.kind() {
                return Err(RuleError::KindMismatch {
                    field: rule.controlled,
                    expected: rule.controlled.kind(),
                    found: rule.forced.kind(),
                });
            }

            if let Some(upstream) = rules.iter().find(|r| r.controlled == rule.controller) {
                return Err(RuleError::ControllerChain {
                    upstream: upstream.controller,
                    middle: rule.controller,
                    downstream: rule.controlled,
                });
            }
        }

        Ok(Self { rules })
    }

    /// Creates a table with no rules.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in rule set.
    ///
    /// Incognito mode turns off analytics and notification permission
    /// prompts.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                ControlRule::new(SettingField::EnableAnalytics, SettingField::IncognitoMode, false),
                ControlRule::new(
                    SettingField::AllowNotificationRequests,
                    SettingField::IncognitoMode,
                    false,
                ),
            ],
        }
    }

    /// Returns the rules that control `field`, in table order.
    pub fn rules_for(&self, field: SettingField) -> impl Iterator<Item = &ControlRule> + '_ {
        self.rules.iter().filter(move |rule| rule.controlled == field)
    }

    /// Returns `true` if `field` acts as a controller in any rule.
    #[must_use]
    pub fn is_controller(&self, field: SettingField) -> bool {
        self.rules.iter().any(|rule| rule.controller == field)
    }

    /// Returns all rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[ControlRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
