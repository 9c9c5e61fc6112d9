//! Command execution.
//!
//! This module loads the settings snapshot and configuration overrides once
//! per invocation and runs the selected subcommand against them.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use settings_control::config::{
    Cli, Command, ConfigFileSource, ConfigLocator, OverrideSource, default_config_template,
};
use settings_control::resolve::{ControlResolver, ControlledStatus};
use settings_control::rules::RuleTable;
use settings_control::settings::{
    SettingField, Settings, SettingsError, SettingsPatch, parse_assignment,
};
use settings_control::store::{
    FileSettingsStore, LoadResult, SettingsStore, StoreError, apply_user_edit,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A setting name or value given on the command line is invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The settings file could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// `init` would overwrite an existing settings file.
    #[error("Settings file '{}' already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Writing output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Serializing output failed.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RunError {
    /// Returns `true` if the error stems from invalid user input.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Settings(_) | Self::AlreadyExists(_))
    }
}

/// Everything a command needs, loaded once per invocation.
pub struct Session {
    store: FileSettingsStore,
    locator: ConfigLocator,
    overrides: SettingsPatch,
    rules: RuleTable,
}

impl Session {
    /// Builds a session from CLI options, the environment and the disk.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let store = cli
            .settings
            .clone()
            .map_or_else(FileSettingsStore::default, FileSettingsStore::new);
        let locator = ConfigLocator::from_env(cli.config.clone());
        let overrides = ConfigFileSource::new(locator.clone()).load_overrides();

        Self::new(store, locator, overrides, RuleTable::builtin())
    }

    /// Builds a session from explicit parts.
    #[must_use]
    pub const fn new(
        store: FileSettingsStore,
        locator: ConfigLocator,
        overrides: SettingsPatch,
        rules: RuleTable,
    ) -> Self {
        Self {
            store,
            locator,
            overrides,
            rules,
        }
    }

    const fn resolver(&self) -> ControlResolver<'_> {
        ControlResolver::new(&self.rules, &self.overrides)
    }

    fn load_settings(&self) -> Settings {
        match self.store.load() {
            LoadResult::Loaded(settings) => settings,
            LoadResult::NotFound => {
                tracing::debug!(
                    "No settings file at '{}'; using defaults",
                    self.store.path().display()
                );
                Settings::default()
            }
            LoadResult::Corrupted { reason } => {
                tracing::warn!(
                    "Ignoring settings file '{}': {reason}",
                    self.store.path().display()
                );
                Settings::default()
            }
        }
    }
}

/// Runs `command` against `session`, writing human output to `out`.
///
/// # Errors
///
/// Returns an error if input is invalid, the settings file cannot be
/// written, or output fails.
pub fn execute(command: &Command, session: &Session, out: &mut impl Write) -> Result<(), RunError> {
    match command {
        Command::Status { fields, json } => status(session, fields, *json, out),
        Command::Effective { json } => effective(session, *json, out),
        Command::Set { assignments } => set(session, assignments, out),
        Command::Init { force } => init(session, *force, out),
        Command::Template { output } => template(output.as_ref(), out),
        Command::Locate => locate(session, out),
    }
}

fn status(
    session: &Session,
    fields: &[SettingField],
    json: bool,
    out: &mut impl Write,
) -> Result<(), RunError> {
    let settings = session.load_settings();
    let resolver = session.resolver();
    let query = resolver.controlled_status(&settings);
    let fields: &[SettingField] = if fields.is_empty() {
        &SettingField::ALL
    } else {
        fields
    };

    if json {
        let report: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|field| Ok((field.to_string(), serde_json::to_value(query.get(*field))?)))
            .collect::<Result<_, serde_json::Error>>()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for field in fields {
        writeln!(out, "{:<28} {}", field.as_str(), query.get(*field))?;
    }
    Ok(())
}

fn effective(session: &Session, json: bool, out: &mut impl Write) -> Result<(), RunError> {
    let settings = session.load_settings();
    let resolver = session.resolver();
    let effective = resolver.effective_settings(&settings);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&effective)?)?;
        return Ok(());
    }

    let query = resolver.controlled_status(&settings);
    for field in SettingField::ALL {
        let value = effective.value(field);
        match query.get(field) {
            ControlledStatus::Controlled { controller, .. } => {
                writeln!(out, "{:<28} {value} ({controller})", field.as_str())?;
            }
            ControlledStatus::Uncontrolled => {
                writeln!(out, "{:<28} {value}", field.as_str())?;
            }
        }
    }
    Ok(())
}

fn set(session: &Session, assignments: &[String], out: &mut impl Write) -> Result<(), RunError> {
    let mut patch = SettingsPatch::new();
    for raw in assignments {
        let (field, value) = parse_assignment(raw)?;
        patch.set(field, value)?;
    }

    let outcome = apply_user_edit(&session.store, &session.resolver(), &patch)?;

    if !outcome.applied.is_empty() {
        writeln!(out, "Updated: {}", join(&outcome.applied))?;
    }
    if !outcome.dropped.is_empty() {
        writeln!(out, "Skipped (controlled): {}", join(&outcome.dropped))?;
    }
    Ok(())
}

fn init(session: &Session, force: bool, out: &mut impl Write) -> Result<(), RunError> {
    if session.store.exists() && !force {
        return Err(RunError::AlreadyExists(session.store.path().to_path_buf()));
    }

    session.store.save(&Settings::default())?;
    writeln!(
        out,
        "Default settings written to: {}",
        session.store.path().display()
    )?;
    Ok(())
}

fn template(output: Option<&PathBuf>, out: &mut impl Write) -> Result<(), RunError> {
    let content = default_config_template();
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            writeln!(out, "Configuration template written to: {}", path.display())?;
        }
        None => write!(out, "{content}")?,
    }
    Ok(())
}

fn locate(session: &Session, out: &mut impl Write) -> Result<(), RunError> {
    let found = session.locator.locate();

    for candidate in session.locator.candidates() {
        let marker = if found.as_ref() == Some(&candidate) {
            "*"
        } else {
            " "
        };
        writeln!(out, "{marker} {}", candidate.display())?;
    }
    if found.is_none() {
        writeln!(out, "No configuration file found; no overrides apply")?;
    }
    Ok(())
}

fn join(fields: &[SettingField]) -> String {
    fields
        .iter()
        .map(SettingField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
