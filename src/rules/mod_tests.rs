//! Tests for rule table construction.

use super::*;

mod validation {
    use super::*;

    #[test]
    fn builtin_table_passes_validation() {
        let builtin = RuleTable::builtin();
        let validated = RuleTable::new(builtin.rules().to_vec()).unwrap();
        assert_eq!(validated, builtin);
    }

    #[test]
    fn rejects_self_control() {
        let result = RuleTable::new(vec![ControlRule::new(
            SettingField::IncognitoMode,
            SettingField::IncognitoMode,
            false,
        )]);
        assert_eq!(result, Err(RuleError::SelfControl(SettingField::IncognitoMode)));
    }

    #[test]
    fn rejects_forced_value_of_wrong_kind() {
        let result = RuleTable::new(vec![ControlRule::new(
            SettingField::FontSize,
            SettingField::IncognitoMode,
            "large",
        )]);
        assert!(matches!(
            result,
            Err(RuleError::KindMismatch {
                field: SettingField::FontSize,
                ..
            })
        ));
    }

    #[test]
    fn rejects_controller_chains() {
        let result = RuleTable::new(vec![
            ControlRule::new(SettingField::ProxyEnabled, SettingField::IncognitoMode, false),
            ControlRule::new(SettingField::HttpProxy, SettingField::ProxyEnabled, ""),
        ]);
        assert_eq!(
            result,
            Err(RuleError::ControllerChain {
                upstream: SettingField::IncognitoMode,
                middle: SettingField::ProxyEnabled,
                downstream: SettingField::HttpProxy,
            })
        );
    }

    #[test]
    fn allows_several_controllers_for_one_field() {
        let table = RuleTable::new(vec![
            ControlRule::new(SettingField::EnableAnalytics, SettingField::IncognitoMode, false),
            ControlRule::new(SettingField::EnableAnalytics, SettingField::ProxyEnabled, false),
        ])
        .unwrap();
        assert_eq!(table.rules_for(SettingField::EnableAnalytics).count(), 2);
    }
}

mod lookup {
    use super::*;

    #[test]
    fn builtin_controls_analytics_and_notifications() {
        let table = RuleTable::builtin();

        let analytics: Vec<_> = table.rules_for(SettingField::EnableAnalytics).collect();
        assert_eq!(analytics.len(), 1);
        assert_eq!(analytics[0].controller, SettingField::IncognitoMode);
        assert_eq!(analytics[0].forced, SettingValue::Bool(false));

        let notifications: Vec<_> =
            table.rules_for(SettingField::AllowNotificationRequests).collect();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].forced, SettingValue::Bool(false));
    }

    #[test]
    fn unruled_field_has_no_rules() {
        let table = RuleTable::builtin();
        assert_eq!(table.rules_for(SettingField::DisablePaidFeatureAds).count(), 0);
        assert_eq!(table.rules_for(SettingField::IncognitoMode).count(), 0);
    }

    #[test]
    fn controller_lookup() {
        let table = RuleTable::builtin();
        assert!(table.is_controller(SettingField::IncognitoMode));
        assert!(!table.is_controller(SettingField::EnableAnalytics));
    }

    #[test]
    fn empty_table() {
        let table = RuleTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(RuleTable::default().len(), 2);
    }
}
