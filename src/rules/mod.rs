//! Password rules
//!
//! Each rule checks one requirement and either accepts the password or
//! returns a [`Rejection`] with a message and a reason code.

mod character_class;
mod digit;
mod length;
mod repeat;
mod sequence;
mod special;

pub use character_class::{DigitCountRule, LowercaseCountRule, UppercaseCountRule};
pub use digit::{decimal_value, is_decimal_digit};
pub use length::MaximumLengthRule;
pub use repeat::RepeatingCharacterRule;
pub use sequence::{DecreasingDigitRule, IncreasingDigitRule};
pub use special::{SPECIAL_CHARACTERS, SpecialCharacterCountRule};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::Rejection;
use crate::messages::{EnglishFormatter, MessageFormatter};

/// Result type for rule checks.
/// - `Ok(())` - Rule accepted the password
/// - `Err(rejection)` - Rule refused it
pub type RuleResult = Result<(), Rejection>;

pub(crate) const DEFAULT_MAXIMUM_RUN: usize = 3;

/// The account a password is being set for, when known.
///
/// None of the built-in rules read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserContext<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// Every available rule, with its configuration.
///
/// Deserializes from a map tagged by `name`, options alongside:
/// `{"name": "digits", "minimum": 2}`. Omitted options take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Rule {
    #[serde(alias = "ContainsDigitsValidator", alias = "ContainsNumeralsValidator")]
    Digits(DigitCountRule),
    #[serde(alias = "ContainsUppercaseValidator")]
    Uppercase(UppercaseCountRule),
    #[serde(alias = "ContainsLowercaseValidator")]
    Lowercase(LowercaseCountRule),
    #[serde(alias = "ContainsSpecialCharactersValidator")]
    SpecialCharacters(SpecialCharacterCountRule),
    #[serde(alias = "MaximumLengthValidator")]
    MaximumLength(MaximumLengthRule),
    #[serde(alias = "MaxConsecutiveCharactersValidator")]
    RepeatingCharacters(RepeatingCharacterRule),
    #[serde(alias = "ConsecutivelyIncreasingDigitValidator")]
    IncreasingDigits(IncreasingDigitRule),
    #[serde(alias = "ConsecutivelyDecreasingDigitValidator")]
    DecreasingDigits(DecreasingDigitRule),
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Digits(_) => DigitCountRule::NAME,
            Rule::Uppercase(_) => UppercaseCountRule::NAME,
            Rule::Lowercase(_) => LowercaseCountRule::NAME,
            Rule::SpecialCharacters(_) => SpecialCharacterCountRule::NAME,
            Rule::MaximumLength(_) => MaximumLengthRule::NAME,
            Rule::RepeatingCharacters(_) => RepeatingCharacterRule::NAME,
            Rule::IncreasingDigits(_) => IncreasingDigitRule::NAME,
            Rule::DecreasingDigits(_) => DecreasingDigitRule::NAME,
        }
    }

    /// Checks `password` with English messages.
    pub fn check(&self, password: &SecretString, user: Option<&UserContext<'_>>) -> RuleResult {
        self.check_with(password, user, &EnglishFormatter)
    }

    pub fn check_with(
        &self,
        password: &SecretString,
        user: Option<&UserContext<'_>>,
        formatter: &dyn MessageFormatter,
    ) -> RuleResult {
        match self {
            Rule::Digits(rule) => rule.check_with(password, user, formatter),
            Rule::Uppercase(rule) => rule.check_with(password, user, formatter),
            Rule::Lowercase(rule) => rule.check_with(password, user, formatter),
            Rule::SpecialCharacters(rule) => rule.check_with(password, user, formatter),
            Rule::MaximumLength(rule) => rule.check_with(password, user, formatter),
            Rule::RepeatingCharacters(rule) => rule.check_with(password, user, formatter),
            Rule::IncreasingDigits(rule) => rule.check_with(password, user, formatter),
            Rule::DecreasingDigits(rule) => rule.check_with(password, user, formatter),
        }
    }

    /// Help text for this rule, independent of any password.
    pub fn describe(&self) -> String {
        self.describe_with(&EnglishFormatter)
    }

    pub fn describe_with(&self, formatter: &dyn MessageFormatter) -> String {
        match self {
            Rule::Digits(rule) => rule.describe_with(formatter),
            Rule::Uppercase(rule) => rule.describe_with(formatter),
            Rule::Lowercase(rule) => rule.describe_with(formatter),
            Rule::SpecialCharacters(rule) => rule.describe_with(formatter),
            Rule::MaximumLength(rule) => rule.describe_with(formatter),
            Rule::RepeatingCharacters(rule) => rule.describe_with(formatter),
            Rule::IncreasingDigits(rule) => rule.describe_with(formatter),
            Rule::DecreasingDigits(rule) => rule.describe_with(formatter),
        }
    }
}

impl From<DigitCountRule> for Rule {
    fn from(rule: DigitCountRule) -> Self {
        Rule::Digits(rule)
    }
}

impl From<UppercaseCountRule> for Rule {
    fn from(rule: UppercaseCountRule) -> Self {
        Rule::Uppercase(rule)
    }
}

impl From<LowercaseCountRule> for Rule {
    fn from(rule: LowercaseCountRule) -> Self {
        Rule::Lowercase(rule)
    }
}

impl From<SpecialCharacterCountRule> for Rule {
    fn from(rule: SpecialCharacterCountRule) -> Self {
        Rule::SpecialCharacters(rule)
    }
}

impl From<MaximumLengthRule> for Rule {
    fn from(rule: MaximumLengthRule) -> Self {
        Rule::MaximumLength(rule)
    }
}

impl From<RepeatingCharacterRule> for Rule {
    fn from(rule: RepeatingCharacterRule) -> Self {
        Rule::RepeatingCharacters(rule)
    }
}

impl From<IncreasingDigitRule> for Rule {
    fn from(rule: IncreasingDigitRule) -> Self {
        Rule::IncreasingDigits(rule)
    }
}

impl From<DecreasingDigitRule> for Rule {
    fn from(rule: DecreasingDigitRule) -> Self {
        Rule::DecreasingDigits(rule)
    }
}
