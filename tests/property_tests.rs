//! Property tests for the password rules.
//!
//! The run rules are compared against a plain sliding-window search, which is
//! slow but obviously correct.

use proptest::prelude::*;
use pwd_rules::{
    DecreasingDigitRule, DigitCountRule, IncreasingDigitRule, LowercaseCountRule,
    MaximumLengthRule, RepeatingCharacterRule, Rule, SPECIAL_CHARACTERS,
    SpecialCharacterCountRule, UppercaseCountRule, decimal_value, is_decimal_digit,
};
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

// Reference: does any window of `run` positions satisfy `step` pairwise?
fn window_matches(password: &str, run: usize, step: impl Fn(char, char) -> bool) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(run)
        .any(|w| w.windows(2).all(|pair| step(pair[0], pair[1])))
}

fn repeat_reference(password: &str, maximum_run: usize) -> bool {
    window_matches(password, maximum_run + 1, |a, b| a == b)
}

fn digit_step(delta: i64) -> impl Fn(char, char) -> bool {
    move |a, b| match (decimal_value(a), decimal_value(b)) {
        (Some(x), Some(y)) => i64::from(y) - i64::from(x) == delta,
        _ => false,
    }
}

fn run_reference(password: &str, maximum_run: usize, delta: i64) -> bool {
    if maximum_run == 0 {
        return password.chars().any(is_decimal_digit);
    }
    window_matches(password, maximum_run + 1, digit_step(delta))
}

proptest! {
    /// Property: exactly N digits pass a minimum of N, N - 1 digits fail.
    #[test]
    fn proptest_digit_minimum_boundary(minimum in 1usize..20, letters in "[a-z]{0,10}") {
        let rule = DigitCountRule::new(minimum);
        let enough = format!("{}{}", letters, "7".repeat(minimum));
        let short = format!("{}{}", letters, "7".repeat(minimum - 1));
        prop_assert!(rule.check(&secret(&enough), None).is_ok());
        prop_assert!(rule.check(&secret(&short), None).is_err());
    }

    /// Property: the same boundary holds for both letter cases.
    #[test]
    fn proptest_case_minimum_boundary(minimum in 1usize..20, digits in "[0-9]{0,10}") {
        let upper = UppercaseCountRule::new(minimum);
        let lower = LowercaseCountRule::new(minimum);
        let exact_upper = format!("{}{}", digits, "Q".repeat(minimum));
        let exact_lower = format!("{}{}", digits, "q".repeat(minimum));
        prop_assert!(upper.check(&secret(&exact_upper), None).is_ok());
        prop_assert!(lower.check(&secret(&exact_lower), None).is_ok());
        let short_upper = format!("{}{}", digits, "Q".repeat(minimum - 1));
        let short_lower = format!("{}{}", digits, "q".repeat(minimum - 1));
        prop_assert!(upper.check(&secret(&short_upper), None).is_err());
        prop_assert!(lower.check(&secret(&short_lower), None).is_err());
    }

    /// Property: a password made only of special characters passes when long enough.
    #[test]
    fn proptest_special_only_passwords(
        picks in prop::collection::vec(0..SPECIAL_CHARACTERS.len(), 1..30),
        minimum in 0usize..30,
    ) {
        let specials: Vec<char> = SPECIAL_CHARACTERS.chars().collect();
        let password: String = picks.iter().map(|&i| specials[i]).collect();
        let outcome = SpecialCharacterCountRule::new(minimum).check(&secret(&password), None);
        prop_assert_eq!(outcome.is_ok(), picks.len() >= minimum);
    }

    /// Property: passwords without punctuation never satisfy a positive minimum.
    #[test]
    fn proptest_no_special_rejected(password in "[A-Za-z0-9]{0,30}", minimum in 1usize..5) {
        prop_assert!(SpecialCharacterCountRule::new(minimum).check(&secret(&password), None).is_err());
    }

    /// Property: length equal to the maximum passes, one more fails.
    #[test]
    fn proptest_maximum_length_boundary(maximum in 0usize..200) {
        let rule = MaximumLengthRule::new(maximum);
        prop_assert!(rule.check(&secret(&"é".repeat(maximum)), None).is_ok());
        prop_assert!(rule.check(&secret(&"é".repeat(maximum + 1)), None).is_err());
    }

    /// Property: repeat rule agrees with a sliding-window search.
    #[test]
    fn proptest_repeat_matches_reference(password in "[ab1]{0,16}", maximum_run in 0usize..6) {
        let rejected = RepeatingCharacterRule::new(maximum_run)
            .check(&secret(&password), None)
            .is_err();
        prop_assert_eq!(rejected, repeat_reference(&password, maximum_run));
    }

    /// Property: increasing rule agrees with a sliding-window search.
    #[test]
    fn proptest_increasing_matches_reference(password in "[0-9\u{0660}-\u{0669}a]{0,16}", maximum_run in 0usize..6) {
        let rejected = IncreasingDigitRule::new(maximum_run)
            .check(&secret(&password), None)
            .is_err();
        prop_assert_eq!(rejected, run_reference(&password, maximum_run, 1));
    }

    /// Property: decreasing rule agrees with a sliding-window search.
    #[test]
    fn proptest_decreasing_matches_reference(password in "[0-9\u{0660}-\u{0669}a]{0,16}", maximum_run in 0usize..6) {
        let rejected = DecreasingDigitRule::new(maximum_run)
            .check(&secret(&password), None)
            .is_err();
        prop_assert_eq!(rejected, run_reference(&password, maximum_run, -1));
    }

    /// Property: checking twice gives the same outcome.
    #[test]
    fn proptest_check_is_idempotent(password in "\\PC{0,40}") {
        let rules: Vec<Rule> = vec![
            DigitCountRule::default().into(),
            SpecialCharacterCountRule::default().into(),
            MaximumLengthRule::new(20).into(),
            RepeatingCharacterRule::default().into(),
            IncreasingDigitRule::default().into(),
        ];
        let pwd = secret(&password);
        for rule in &rules {
            prop_assert_eq!(rule.check(&pwd, None), rule.check(&pwd, None));
        }
    }
}
