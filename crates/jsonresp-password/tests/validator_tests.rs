use jsonresp_core::{DataMap, Status, Value};
use jsonresp_password::{
    CustomPolicy, PasswordValidator, PolicyConfig, PolicyError, PolicyName, ValidatorSettings,
};
use proptest::prelude::*;
use serde_json::json;

fn french() -> PasswordValidator {
    PasswordValidator::new(DataMap::new())
}

fn english() -> PasswordValidator {
    PasswordValidator::with_locale(DataMap::new(), "en_US")
}

// ==================== Scenarios ====================

#[test]
fn test_light_empty_password() {
    let mut v = french();
    assert!(!v.is_valid_password(""));
    let errors = v.envelope().errors();
    assert_eq!(errors[0], "Mot de passe invalide");
    assert!(errors[1].contains('6'));
}

#[test]
fn test_light_rejects_short_and_digitless() {
    let mut v = french();
    assert!(!v.is_valid_password("short"));
    assert!(!v.is_valid_password("nodigit"));
}

#[test]
fn test_light_accepts_six_chars_with_digit() {
    let mut v = french();
    assert!(v.is_valid_password("1digit"));
    assert!(v.envelope().is_success());
}

#[test]
fn test_medium_accepts_full_password() {
    let mut v = french();
    v.set_medium_config();
    assert!(v.is_valid_password("1_Medium_Pass"));
}

#[test]
fn test_medium_rejects_missing_uppercase() {
    let mut v = french();
    v.set_medium_config();
    assert!(!v.is_valid_password("1digitvalid"));
    assert_eq!(
        v.envelope().errors(),
        [
            "Mot de passe invalide",
            "-10 caractères minimum",
            "- 1 majuscule requise",
            "- 1 chiffre requis",
            "- 1 symbole requise",
        ]
    );
}

#[test]
fn test_hard_requires_twenty_chars() {
    let mut v = english();
    v.set_hard_config();
    assert!(!v.is_valid_password("1_Medium_Pass"));
    assert!(v.is_valid_password("1_Medium_Pass_Longer"));
}

#[test]
fn test_custom_exact_length() -> anyhow::Result<()> {
    let mut v = french();
    v.set_custom_config(4, 4, true, true, true)?;
    assert_eq!(v.current_config_name(), PolicyName::Custom);
    assert!(v.is_valid_password("A$1e"));
    assert!(!v.is_valid_password("toolong"));
    Ok(())
}

#[test]
fn test_custom_inverted_bounds_is_refused() {
    let mut v = french();
    let err = v.set_custom_config(8, 4, false, false, false).unwrap_err();
    assert_eq!(err, PolicyError::InvertedBounds { min: 8, max: 4 });
    assert_eq!(v.current_config_name(), PolicyName::Light);
}

#[test]
fn test_custom_zero_minimum_accepts_empty() -> anyhow::Result<()> {
    let mut v = french();
    v.set_custom_config(0, 4, false, false, false)?;
    assert!(v.is_valid_password(""));
    Ok(())
}

// ==================== Configuration ====================

#[test]
fn test_config_name_tracks_last_setter() -> anyhow::Result<()> {
    let mut v = french();
    assert_eq!(v.current_config_name(), PolicyName::Light);
    v.set_medium_config();
    assert_eq!(v.current_config_name(), PolicyName::Medium);
    v.set_hard_config();
    assert_eq!(v.current_config_name(), PolicyName::Hard);
    v.set_custom_config(1, 2, false, false, false)?;
    assert_eq!(v.current_config_name(), PolicyName::Custom);
    v.set_light_config();
    assert_eq!(v.current_config_name(), PolicyName::Light);
    Ok(())
}

#[test]
fn test_setters_chain() {
    let mut v = french();
    let name = v.set_hard_config().set_medium_config().current_config_name();
    assert_eq!(name, PolicyName::Medium);
}

#[test]
fn test_switching_presets_resets_all_fields() -> anyhow::Result<()> {
    let mut v = french();
    v.set_custom_config(3, 7, true, false, true)?;
    v.set_light_config();
    assert_eq!(v.config(), &PolicyConfig::light());
    v.set_custom_config(3, 7, true, false, true)?;
    v.set_hard_config();
    assert_eq!(v.config(), &PolicyConfig::hard());
    Ok(())
}

#[test]
fn test_from_settings() -> anyhow::Result<()> {
    let settings = ValidatorSettings::default()
        .with_locale("en_US")
        .with_custom(CustomPolicy {
            min_length: 4,
            max_length: 4,
            require_uppercase: true,
            require_digit: true,
            require_symbol: true,
        });
    let mut v = PasswordValidator::from_settings(DataMap::new(), &settings)?;
    assert_eq!(v.locale().tag(), "en_US");
    assert_eq!(v.current_config_name(), PolicyName::Custom);
    assert!(v.is_valid_password("A$1e"));
    assert!(!v.is_valid_password("a$1e"));
    assert_eq!(v.envelope().errors()[0], "Invalid Password");
    Ok(())
}

// ==================== Messages & envelope ====================

#[test]
fn test_failures_replace_previous_errors() {
    let mut v = english();
    v.envelope_mut().add_error("stale");
    assert!(!v.is_valid_password("x"));
    assert!(!v.is_valid_password("y"));
    assert_eq!(
        v.envelope().errors(),
        ["Invalid Password", "- at least 6 characters long", "digits required"]
    );
}

#[test]
fn test_repeated_failure_is_idempotent() {
    let mut v = french();
    v.set_medium_config();
    let first = v.is_valid_password("nope");
    let errors_first = v.envelope().errors().to_vec();
    let second = v.is_valid_password("nope");
    assert_eq!(first, second);
    assert_eq!(v.envelope().errors(), errors_first.as_slice());
}

#[test]
fn test_non_french_tags_use_english() {
    for tag in ["en_US", "fr_CA", "de_DE", ""] {
        let mut v = PasswordValidator::with_locale(DataMap::new(), tag);
        assert!(!v.is_valid_password(""));
        assert_eq!(v.envelope().errors()[0], "Invalid Password", "tag {:?}", tag);
    }
}

#[test]
fn test_rejection_exports_error_envelope() -> anyhow::Result<()> {
    let mut data = DataMap::new();
    data.insert("login".into(), Value::from("  jdoe "));
    let mut v = PasswordValidator::with_locale(data, "en_US");
    assert!(!v.is_valid_password("abc"));

    let envelope = v.into_envelope();
    assert_eq!(envelope.status(), Status::Error);
    let decoded: serde_json::Value = serde_json::from_str(&envelope.to_json()?)?;
    assert_eq!(
        decoded,
        json!({
            "status": "error",
            "error_msg": ["Invalid Password", "- at least 6 characters long", "digits required"],
            "data": {"login": "jdoe"}
        })
    );
    Ok(())
}

// ==================== Logging ====================

#[test]
fn test_rejection_logs_do_not_leak_candidate() {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl Write for Buf {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buf = Buf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut v = french();
        v.set_medium_config();
        assert!(!v.is_valid_password("SecretCandidate"));
    });

    let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("password rejected"));
    assert!(logs.contains("uppercase_ok=true"));
    assert!(logs.contains("digit_ok=false"));
    assert!(!logs.contains("SecretCandidate"));
}

// ==================== Properties ====================

fn any_policy() -> impl Strategy<Value = PolicyConfig> {
    prop_oneof![
        Just(PolicyConfig::light()),
        Just(PolicyConfig::medium()),
        Just(PolicyConfig::hard()),
        (0usize..30, 0usize..30, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(a, b, upper, digit, symbol)| {
                PolicyConfig::custom(a.min(b), a.max(b), upper, digit, symbol).unwrap()
            }
        ),
    ]
}

fn validator_for(config: &PolicyConfig) -> PasswordValidator {
    let mut v = english();
    v.set_custom_config(
        config.min_length(),
        config.max_length(),
        config.require_uppercase(),
        config.require_digit(),
        config.require_symbol(),
    )
    .unwrap();
    v
}

proptest! {
    #[test]
    fn prop_out_of_range_length_is_rejected(
        config in any_policy(),
        candidate in "[A-Za-z0-9!@#_-]{0,120}",
    ) {
        let len = candidate.chars().count();
        prop_assume!(len < config.min_length() || len > config.max_length());
        let mut v = validator_for(&config);
        prop_assert!(!v.is_valid_password(&candidate));
    }

    #[test]
    fn prop_missing_uppercase_is_rejected(candidate in "[a-z0-9!@#_-]{0,40}") {
        let mut v = english();
        v.set_custom_config(0, 100, true, false, false).unwrap();
        prop_assert!(!v.is_valid_password(&candidate));
    }

    #[test]
    fn prop_evaluation_is_idempotent(config in any_policy(), candidate in "\\PC{0,30}") {
        let mut v = validator_for(&config);
        let first = v.is_valid_password(&candidate);
        let errors = v.envelope().errors().to_vec();
        prop_assert_eq!(v.is_valid_password(&candidate), first);
        prop_assert_eq!(v.envelope().errors(), errors.as_slice());
    }
}
