//! Tests for precedence between config overrides, controllers and user
//! settings.

use super::*;
use crate::settings::SettingValue;

/// Helper to build overrides from `(field, value)` pairs
fn overrides(entries: &[(SettingField, SettingValue)]) -> SettingsPatch {
    SettingsPatch::try_from(entries.to_vec()).unwrap()
}

mod config_over_user {
    use super::*;

    #[test]
    fn config_literal_overrides_stored_value() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::EnableAnalytics, false.into())]);
        let settings = Settings {
            incognito_mode: false,
            enable_analytics: true,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let status = resolver.controlled_status(&settings).get(SettingField::EnableAnalytics);

        assert_eq!(
            status,
            ControlledStatus::Controlled {
                controller: Controller::ConfigFile,
                value: SettingValue::Bool(false),
            }
        );
    }

    #[test]
    fn config_literal_applies_to_unruled_fields() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::DisablePaidFeatureAds, true.into())]);
        let resolver = ControlResolver::new(&rules, &overrides);

        for stored in [true, false] {
            let settings = Settings {
                disable_paid_feature_ads: stored,
                ..Settings::default()
            };
            let status = resolver
                .controlled_status(&settings)
                .get(SettingField::DisablePaidFeatureAds);

            assert_eq!(status.controller(), Some(Controller::ConfigFile));
            assert_eq!(status.value(), Some(&SettingValue::Bool(true)));
        }
    }

    #[test]
    fn omit_drops_config_controlled_field_even_when_values_agree() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::DisablePaidFeatureAds, true.into())]);
        let settings = Settings::default();
        let resolver = ControlResolver::new(&rules, &overrides);

        let edit = SettingsPatch::new()
            .with(SettingField::DisablePaidFeatureAds, true)
            .unwrap();

        assert!(resolver.omit_controlled_settings(&settings, &edit).is_empty());
    }
}

mod config_over_controller {
    use super::*;

    #[test]
    fn config_literal_beats_in_app_controller() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::EnableAnalytics, true.into())]);
        let settings = Settings {
            incognito_mode: true,
            enable_analytics: false,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let status = resolver.controlled_status(&settings).get(SettingField::EnableAnalytics);

        assert_eq!(
            status,
            ControlledStatus::Controlled {
                controller: Controller::ConfigFile,
                value: SettingValue::Bool(true),
            }
        );
        assert!(resolver.effective_settings(&settings).enable_analytics);
    }

    #[test]
    fn config_controller_beats_config_literal() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[
            (SettingField::IncognitoMode, true.into()),
            (SettingField::EnableAnalytics, true.into()),
        ]);
        let settings = Settings {
            incognito_mode: false,
            enable_analytics: false,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let status = resolver.controlled_status(&settings).get(SettingField::EnableAnalytics);
        assert_eq!(status.controller(), Some(Controller::ConfigFile));
        assert_eq!(status.value(), Some(&SettingValue::Bool(false)));

        let effective = resolver.effective_settings(&settings);
        assert!(effective.incognito_mode);
        assert!(!effective.enable_analytics);
    }

    #[test]
    fn config_controller_forces_every_dependent() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::IncognitoMode, true.into())]);
        let settings = Settings {
            incognito_mode: false,
            enable_analytics: true,
            allow_notification_requests: true,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let effective = resolver.effective_settings(&settings);

        assert!(effective.incognito_mode);
        assert!(!effective.enable_analytics);
        assert!(!effective.allow_notification_requests);

        let status = resolver.controlled_status(&settings);
        assert_eq!(
            status.get(SettingField::AllowNotificationRequests).controller(),
            Some(Controller::ConfigFile)
        );
    }

    #[test]
    fn config_disabling_controller_suppresses_in_app_rule() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::IncognitoMode, false.into())]);
        let settings = Settings {
            incognito_mode: true,
            enable_analytics: true,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let status = resolver.controlled_status(&settings);

        assert_eq!(
            status.get(SettingField::IncognitoMode).controller(),
            Some(Controller::ConfigFile)
        );
        assert!(!status.is_controlled(SettingField::EnableAnalytics));
        assert!(resolver.effective_settings(&settings).enable_analytics);
    }

    #[test]
    fn in_app_controller_applies_when_config_is_silent_on_both() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::Theme, "dark".into())]);
        let settings = Settings {
            incognito_mode: true,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let status = resolver.controlled_status(&settings).get(SettingField::EnableAnalytics);

        assert_eq!(
            status,
            ControlledStatus::Controlled {
                controller: Controller::Setting(SettingField::IncognitoMode),
                value: SettingValue::Bool(false),
            }
        );
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn incognito_in_user_settings_disables_analytics_and_notifications() {
        let rules = RuleTable::builtin();
        let overrides = SettingsPatch::new();
        let settings = Settings {
            incognito_mode: true,
            enable_analytics: true,
            allow_notification_requests: true,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let effective = resolver.effective_settings(&settings);

        assert_eq!(
            effective,
            Settings {
                incognito_mode: true,
                enable_analytics: false,
                allow_notification_requests: false,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn config_controlled_ads_edit_is_discarded() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::DisablePaidFeatureAds, true.into())]);
        let settings = Settings {
            disable_paid_feature_ads: false,
            ..Settings::default()
        };
        let resolver = ControlResolver::new(&rules, &overrides);

        let edit = SettingsPatch::new()
            .with(SettingField::DisablePaidFeatureAds, false)
            .unwrap();
        let result = resolver.omit_controlled_settings(&settings, &edit);

        assert!(!result.contains(SettingField::DisablePaidFeatureAds));
    }

    #[test]
    fn maximally_private_deployment_is_preserved() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[
            (SettingField::IncognitoMode, true.into()),
            (SettingField::DisablePaidFeatureAds, true.into()),
        ]);
        let settings = Settings::default();
        let resolver = ControlResolver::new(&rules, &overrides);

        let effective = resolver.effective_settings(&settings);

        assert!(effective.incognito_mode);
        assert!(!effective.enable_analytics);
        assert!(!effective.allow_notification_requests);
        assert!(effective.disable_paid_feature_ads);
    }

    #[test]
    fn user_cannot_reenable_analytics_under_config_incognito() {
        let rules = RuleTable::builtin();
        let overrides = overrides(&[(SettingField::IncognitoMode, true.into())]);
        let settings = Settings::default();
        let resolver = ControlResolver::new(&rules, &overrides);

        let edit = SettingsPatch::new()
            .with(SettingField::IncognitoMode, false)
            .unwrap()
            .with(SettingField::EnableAnalytics, true)
            .unwrap()
            .with(SettingField::FontSize, 15_u32)
            .unwrap();
        let result = resolver.omit_controlled_settings(&settings, &edit);

        assert_eq!(
            result,
            SettingsPatch::new().with(SettingField::FontSize, 15_u32).unwrap()
        );
    }
}
