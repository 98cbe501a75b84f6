//! Tests for default resolution across profile and machine layers

use defaults_core::{Error, InstanceDefault, MachineOverride, Profile};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

fn test_profile() -> Arc<Profile> {
    let mut profile = Profile::new("Test");
    profile.add_override("ILogger", "Null").unwrap();
    Arc::new(profile)
}

fn machine_with_test_profile() -> MachineOverride {
    let mut machine = MachineOverride::with_profile("HOST1", Some(test_profile()));
    machine.add_machine_override("ILogger", "Console").unwrap();
    machine.add_machine_override("IMailer", "Smtp").unwrap();
    machine
}

mod resolution_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_machine_without_profile() {
        let mut machine = MachineOverride::new("HOST1");
        machine.add_machine_override("ILogger", "Console").unwrap();
        machine.add_machine_override("ICache", "Memory").unwrap();

        assert_eq!(machine.default_key("ILogger").unwrap(), "Console");
        assert_eq!(
            machine.defaults(),
            vec![
                InstanceDefault::new("ICache", "Memory"),
                InstanceDefault::new("ILogger", "Console"),
            ]
        );
    }

    #[test]
    fn test_profile_shadows_machine() {
        let machine = machine_with_test_profile();

        assert_eq!(machine.default_key("ILogger").unwrap(), "Null");
        assert_eq!(
            machine.defaults(),
            vec![
                InstanceDefault::new("ILogger", "Null"),
                InstanceDefault::new("IMailer", "Smtp"),
            ]
        );
    }

    #[rstest]
    #[case("ILogger", Some("Null"))]
    #[case("IMailer", Some("Smtp"))]
    #[case("ICache", None)]
    fn test_has_override_agrees_with_lookup(
        #[case] plugin_type: &str,
        #[case] expected: Option<&str>,
    ) {
        let machine = machine_with_test_profile();

        assert_eq!(machine.has_override(plugin_type), expected.is_some());
        assert_eq!(machine.find_default_key(plugin_type), expected);
        match expected {
            Some(key) => assert_eq!(machine.default_key(plugin_type).unwrap(), key),
            None => assert!(matches!(
                machine.default_key(plugin_type),
                Err(Error::LookupMiss { .. })
            )),
        }
    }

    #[test]
    fn test_profile_only_override() {
        let machine = MachineOverride::with_profile("HOST1", Some(test_profile()));

        assert!(machine.has_override("ILogger"));
        assert_eq!(machine.default_key("ILogger").unwrap(), "Null");
        assert!(machine.inner_defaults().is_empty());
        assert_eq!(machine.defaults(), vec![InstanceDefault::new("ILogger", "Null")]);
    }

    #[test]
    fn test_inner_defaults_are_machine_only() {
        let machine = machine_with_test_profile();

        let mut inner = machine.inner_defaults();
        inner.sort();
        assert_eq!(
            inner,
            vec![
                InstanceDefault::new("ILogger", "Console"),
                InstanceDefault::new("IMailer", "Smtp"),
            ]
        );
    }

    #[test]
    fn test_defaults_is_fresh_snapshot() {
        let mut machine = MachineOverride::new("HOST1");
        machine.add_machine_override("ILogger", "Console").unwrap();
        let before = machine.defaults();

        machine.add_machine_override("ICache", "Memory").unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(machine.defaults().len(), 2);
    }
}

mod registration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_registration_fails_and_keeps_first() {
        let mut machine = MachineOverride::new("HOST1");
        machine.add_machine_override("ILogger", "Console").unwrap();

        let err = machine
            .add_machine_override("ILogger", "File")
            .expect_err("second registration must fail");
        match err {
            Error::DuplicateOverride { plugin_type, scope } => {
                assert_eq!(plugin_type, "ILogger");
                assert_eq!(scope, "machine 'HOST1'");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(machine.default_key("ILogger").unwrap(), "Console");
        assert_eq!(
            machine.inner_defaults(),
            vec![InstanceDefault::new("ILogger", "Console")]
        );
    }

    #[test]
    fn test_registration_does_not_touch_profile() {
        let profile = test_profile();
        let mut machine = MachineOverride::with_profile("HOST1", Some(Arc::clone(&profile)));
        machine.add_machine_override("ICache", "Memory").unwrap();

        assert_eq!(profile.len(), 1);
        assert!(!profile.has_override("ICache"));
    }

    #[test]
    fn test_profile_name_passthrough() {
        assert_eq!(machine_with_test_profile().profile_name(), "Test");
        assert_eq!(MachineOverride::new("HOST1").profile_name(), "");
    }
}
