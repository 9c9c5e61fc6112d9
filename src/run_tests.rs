//! Tests for the run module.

use tempfile::TempDir;

use super::*;

/// Creates a session over a temp settings file with the given overrides.
fn session(dir: &TempDir, overrides: SettingsPatch) -> Session {
    Session::new(
        FileSettingsStore::new(dir.path().join("settings.json")),
        ConfigLocator::new().with_user_dir(dir.path()),
        overrides,
        RuleTable::builtin(),
    )
}

/// Runs a command and returns its output.
fn run(command: &Command, session: &Session) -> Result<String, RunError> {
    let mut out = Vec::new();
    execute(command, session, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

mod status_command {
    use super::*;

    #[test]
    fn reports_config_control() {
        let dir = TempDir::new().unwrap();
        let overrides = SettingsPatch::new()
            .with(SettingField::DisablePaidFeatureAds, true)
            .unwrap();
        let session = session(&dir, overrides);

        let output = run(
            &Command::Status {
                fields: vec![SettingField::DisablePaidFeatureAds, SettingField::Theme],
                json: false,
            },
            &session,
        )
        .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("disablePaidFeatureAds"));
        assert!(lines[0].ends_with("controlled by config file = true"));
        assert!(lines[1].ends_with("uncontrolled"));
    }

    #[test]
    fn json_lists_every_field_by_default() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());

        let output = run(
            &Command::Status {
                fields: vec![],
                json: true,
            },
            &session,
        )
        .unwrap();

        let report: serde_json::Value = serde_json::from_str(&output).unwrap();
        let object = report.as_object().unwrap();
        assert_eq!(object.len(), SettingField::ALL.len());
        assert_eq!(object["enableAnalytics"]["isControlled"], false);
    }
}

mod effective_command {
    use super::*;

    #[test]
    fn json_applies_controls() {
        let dir = TempDir::new().unwrap();
        let overrides = SettingsPatch::new()
            .with(SettingField::IncognitoMode, true)
            .unwrap();
        let session = session(&dir, overrides);
        session
            .store
            .save(&Settings {
                enable_analytics: true,
                ..Settings::default()
            })
            .unwrap();

        let output = run(&Command::Effective { json: true }, &session).unwrap();

        let effective: Settings = serde_json::from_str(&output).unwrap();
        assert!(effective.incognito_mode);
        assert!(!effective.enable_analytics);
        assert!(!effective.allow_notification_requests);
    }

    #[test]
    fn table_marks_controller() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());
        session
            .store
            .save(&Settings {
                incognito_mode: true,
                ..Settings::default()
            })
            .unwrap();

        let output = run(&Command::Effective { json: false }, &session).unwrap();

        let analytics = output
            .lines()
            .find(|line| line.starts_with("enableAnalytics"))
            .unwrap();
        assert!(analytics.ends_with("false (incognitoMode)"));
    }
}

mod set_command {
    use super::*;

    #[test]
    fn persists_uncontrolled_and_reports_skipped() {
        let dir = TempDir::new().unwrap();
        let overrides = SettingsPatch::new()
            .with(SettingField::DisablePaidFeatureAds, true)
            .unwrap();
        let session = session(&dir, overrides);

        let output = run(
            &Command::Set {
                assignments: vec![
                    "disablePaidFeatureAds=false".to_string(),
                    "fontSize=18".to_string(),
                ],
            },
            &session,
        )
        .unwrap();

        assert!(output.contains("Updated: fontSize"));
        assert!(output.contains("Skipped (controlled): disablePaidFeatureAds"));
        assert_eq!(session.store.load().into_settings().font_size, 18);
    }

    #[test]
    fn invalid_value_is_usage_error() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());

        let error = run(
            &Command::Set {
                assignments: vec!["fontSize=huge".to_string()],
            },
            &session,
        )
        .unwrap_err();

        assert!(error.is_usage());
        assert!(!session.store.exists());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn writes_defaults() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());

        run(&Command::Init { force: false }, &session).unwrap();

        assert_eq!(session.store.load().into_settings(), Settings::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());
        session
            .store
            .save(&Settings {
                theme: "dark".to_string(),
                ..Settings::default()
            })
            .unwrap();

        let error = run(&Command::Init { force: false }, &session).unwrap_err();
        assert!(matches!(error, RunError::AlreadyExists(_)));

        run(&Command::Init { force: true }, &session).unwrap();
        assert_eq!(session.store.load().into_settings().theme, "default");
    }
}

mod template_and_locate {
    use super::*;

    #[test]
    fn template_to_stdout() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());

        let output = run(&Command::Template { output: None }, &session).unwrap();

        assert!(output.contains("\"settingsConfig\""));
    }

    #[test]
    fn template_to_file() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());
        let path = dir.path().join("out.json");

        run(
            &Command::Template {
                output: Some(path.clone()),
            },
            &session,
        )
        .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn locate_marks_found_file() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir, SettingsPatch::new());

        let output = run(&Command::Locate, &session).unwrap();
        assert!(output.contains("No configuration file found"));

        std::fs::write(dir.path().join("settings.config.json"), "{}").unwrap();
        let output = run(&Command::Locate, &session).unwrap();
        assert!(output.starts_with('*'));
    }
}

mod run_error {
    use super::*;

    #[test]
    fn already_exists_displays_hint() {
        let error = RunError::AlreadyExists(PathBuf::from("/tmp/settings.json"));
        assert!(error.to_string().contains("--force"));
        assert!(error.is_usage());
    }

    #[test]
    fn store_error_is_not_usage() {
        let error = RunError::Store(StoreError::Write(io::Error::other("disk full")));
        assert!(!error.is_usage());
    }
}
