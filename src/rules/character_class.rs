//! Character class rules - minimum number of digits, uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::digit::is_decimal_digit;
use super::{RuleResult, UserContext};
use crate::error::{ReasonCode, Rejection};
use crate::messages::{EnglishFormatter, MessageFormatter, Template};

/// Counts the characters of `password` accepted by `predicate`.
pub(crate) fn count_matching(password: &str, predicate: impl Fn(char) -> bool) -> usize {
    password.chars().filter(|&c| predicate(c)).count()
}

/// Rejects with `password_too_weak` when `found` is below `minimum`.
pub(crate) fn require_minimum(
    rule: &'static str,
    found: usize,
    minimum: usize,
    template: Template<'_>,
    formatter: &dyn MessageFormatter,
) -> RuleResult {
    if found < minimum {
        return Err(Rejection::from_template(
            rule,
            ReasonCode::PasswordTooWeak,
            &template,
            formatter,
        ));
    }
    Ok(())
}

/// Requires at least `minimum` decimal digits, in any script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitCountRule {
    #[serde(alias = "min_digits", alias = "min_numerals")]
    pub minimum: usize,
}

impl DigitCountRule {
    pub const NAME: &'static str = "digits";

    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn check(&self, password: &SecretString, user: Option<&UserContext<'_>>) -> RuleResult {
        self.check_with(password, user, &EnglishFormatter)
    }

    pub fn check_with(
        &self,
        password: &SecretString,
        _user: Option<&UserContext<'_>>,
        formatter: &dyn MessageFormatter,
    ) -> RuleResult {
        let found = count_matching(password.expose_secret(), is_decimal_digit);
        let template = Template::plural(
            "Password must contain at least {minimum} number.",
            "Password must contain at least {minimum} numbers.",
            self.minimum,
        )
        .param("minimum", self.minimum);
        require_minimum(Self::NAME, found, self.minimum, template, formatter)
    }

    pub fn describe(&self) -> String {
        self.describe_with(&EnglishFormatter)
    }

    pub fn describe_with(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(
            &Template::plural(
                "Your password must contain at least {minimum} number.",
                "Your password must contain at least {minimum} numbers.",
                self.minimum,
            )
            .param("minimum", self.minimum),
        )
    }
}

impl Default for DigitCountRule {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Requires at least `minimum` uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UppercaseCountRule {
    #[serde(alias = "min_uppercase")]
    pub minimum: usize,
}

impl UppercaseCountRule {
    pub const NAME: &'static str = "uppercase";

    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn check(&self, password: &SecretString, user: Option<&UserContext<'_>>) -> RuleResult {
        self.check_with(password, user, &EnglishFormatter)
    }

    pub fn check_with(
        &self,
        password: &SecretString,
        _user: Option<&UserContext<'_>>,
        formatter: &dyn MessageFormatter,
    ) -> RuleResult {
        let found = count_matching(password.expose_secret(), char::is_uppercase);
        let template = Template::plural(
            "Password must contain at least {minimum} uppercase character.",
            "Password must contain at least {minimum} uppercase characters.",
            self.minimum,
        )
        .param("minimum", self.minimum);
        require_minimum(Self::NAME, found, self.minimum, template, formatter)
    }

    pub fn describe(&self) -> String {
        self.describe_with(&EnglishFormatter)
    }

    pub fn describe_with(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(
            &Template::plural(
                "Your password must contain at least {minimum} uppercase character.",
                "Your password must contain at least {minimum} uppercase characters.",
                self.minimum,
            )
            .param("minimum", self.minimum),
        )
    }
}

impl Default for UppercaseCountRule {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Requires at least `minimum` lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowercaseCountRule {
    #[serde(alias = "min_lowercase")]
    pub minimum: usize,
}

impl LowercaseCountRule {
    pub const NAME: &'static str = "lowercase";

    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn check(&self, password: &SecretString, user: Option<&UserContext<'_>>) -> RuleResult {
        self.check_with(password, user, &EnglishFormatter)
    }

    pub fn check_with(
        &self,
        password: &SecretString,
        _user: Option<&UserContext<'_>>,
        formatter: &dyn MessageFormatter,
    ) -> RuleResult {
        let found = count_matching(password.expose_secret(), char::is_lowercase);
        let template = Template::plural(
            "Password must contain at least {minimum} lowercase character.",
            "Password must contain at least {minimum} lowercase characters.",
            self.minimum,
        )
        .param("minimum", self.minimum);
        require_minimum(Self::NAME, found, self.minimum, template, formatter)
    }

    pub fn describe(&self) -> String {
        self.describe_with(&EnglishFormatter)
    }

    pub fn describe_with(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(
            &Template::plural(
                "Your password must contain at least {minimum} lowercase character.",
                "Your password must contain at least {minimum} lowercase characters.",
                self.minimum,
            )
            .param("minimum", self.minimum),
        )
    }
}

impl Default for LowercaseCountRule {
    fn default() -> Self {
        Self::new(1)
    }
}
