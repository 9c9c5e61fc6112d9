//! Persisting user-initiated edits.

use crate::resolve::ControlResolver;
use crate::settings::{SettingField, Settings, SettingsPatch};

use super::{LoadResult, SettingsStore, StoreError};

/// What happened to a user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Fields written to the store
    pub applied: Vec<SettingField>,
    /// Fields discarded because they are controlled
    pub dropped: Vec<SettingField>,
}

impl EditOutcome {
    /// Returns `true` if nothing was written.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Applies `patch` to the stored settings, skipping controlled fields.
///
/// Loads the current settings (defaults when missing or corrupted), removes
/// every field that is controlled against them, merges the rest and saves.
/// Nothing is written when every field is dropped.
///
/// # Errors
///
/// Returns an error if the updated settings cannot be saved.
pub fn apply_user_edit<S: SettingsStore + ?Sized>(
    store: &S,
    resolver: &ControlResolver<'_>,
    patch: &SettingsPatch,
) -> Result<EditOutcome, StoreError> {
    let current = match store.load() {
        LoadResult::Corrupted { reason } => {
            tracing::warn!("Settings file is corrupted ({reason}); starting from defaults");
            Settings::default()
        }
        other => other.into_settings(),
    };

    let allowed = resolver.omit_controlled_settings(&current, patch);
    let outcome = EditOutcome {
        applied: allowed.fields().collect(),
        dropped: patch.fields().filter(|f| !allowed.contains(*f)).collect(),
    };

    if outcome.is_noop() {
        tracing::debug!("No uncontrolled fields in edit; settings left unchanged");
        return Ok(outcome);
    }

    store.save(&current.merged(&allowed))?;
    tracing::info!(
        "Saved {} setting(s), skipped {} controlled",
        outcome.applied.len(),
        outcome.dropped.len()
    );

    Ok(outcome)
}
