//! End-to-end checks of a full rule set, as a registration form would run it.

use pwd_rules::{
    DecreasingDigitRule, IncreasingDigitRule, ReasonCode, RepeatingCharacterRule, Rule, RuleSet,
    UserContext, ValidationError, parse_rule_set, validate_password,
};
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

fn full_rule_set() -> RuleSet {
    RuleSet::standard()
        .with_rule(RepeatingCharacterRule::default())
        .with_rule(IncreasingDigitRule::default())
        .with_rule(DecreasingDigitRule::default())
}

#[test]
fn standard_set_accepts_reference_password() {
    assert_eq!(
        validate_password(&RuleSet::standard(), &secret("Abc$d1234!"), None),
        Ok(())
    );
}

#[test]
fn standard_set_rejects_empty_password_four_times() {
    let err = validate_password(&RuleSet::standard(), &secret(""), None).unwrap_err();
    let rules: Vec<_> = err.rejections().iter().map(|r| r.rule).collect();
    assert_eq!(
        rules,
        vec!["digits", "uppercase", "lowercase", "special_characters"]
    );
}

#[test]
fn full_set_reports_every_code() {
    let long = format!("aaaa1234{}", "9876".repeat(40));
    let err = full_rule_set().validate(&secret(&long), None).unwrap_err();
    assert_eq!(
        err.codes(),
        vec![
            ReasonCode::PasswordTooWeak,
            ReasonCode::PasswordTooWeak,
            ReasonCode::PasswordTooLong,
            ReasonCode::PasswordRepeatingCharacters,
            ReasonCode::PasswordIncreasingDigits,
            ReasonCode::PasswordDecreasingDigits,
        ]
    );
}

#[test]
fn full_set_rejects_sequence_in_otherwise_strong_password() {
    let err = full_rule_set()
        .validate(&secret("Abc$d1234!"), None)
        .unwrap_err();
    assert_eq!(err.codes(), vec![ReasonCode::PasswordIncreasingDigits]);
    assert_eq!(
        err.to_string(),
        "Password contains consecutively increasing digits. e.g '12345'"
    );
}

#[test]
fn user_context_does_not_change_outcome() {
    let user = UserContext {
        username: Some("Abc$d123!"),
        email: None,
    };
    let rules = full_rule_set();
    let pwd = secret("Abc$d123!");
    assert_eq!(rules.validate(&pwd, Some(&user)), rules.validate(&pwd, None));
}

#[test]
fn rule_set_from_json_matches_builder() {
    let parsed = parse_rule_set(
        r#"{"rules": [
            {"name": "digits"},
            {"name": "uppercase"},
            {"name": "lowercase"},
            {"name": "special_characters"},
            {"name": "maximum_length"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(parsed.rules(), RuleSet::standard().rules());
}

#[test]
fn rule_set_collects_from_iterator() {
    let rules: RuleSet = [Rule::from(RepeatingCharacterRule::new(1))]
        .into_iter()
        .collect();
    let outcome = rules.validate(&secret("aa"), None);
    assert!(matches!(outcome, Err(ValidationError::Rejected(ref r)) if r.len() == 1));
}
