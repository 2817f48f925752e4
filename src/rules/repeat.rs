//! Repetition rule - detects runs of one character repeated back to back.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{DEFAULT_MAXIMUM_RUN, RuleResult, UserContext};
use crate::error::{ReasonCode, Rejection};
use crate::messages::{EnglishFormatter, MessageFormatter, Template};

/// Rejects a password holding more than `maximum_run` copies of the same
/// character in a row. A run of exactly `maximum_run` is tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatingCharacterRule {
    #[serde(alias = "max_consecutive")]
    pub maximum_run: usize,
}

impl RepeatingCharacterRule {
    pub const NAME: &'static str = "repeating_characters";

    pub fn new(maximum_run: usize) -> Self {
        Self { maximum_run }
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
        if longest_repeat_exceeds(password.expose_secret(), self.maximum_run) {
            return Err(Rejection::new(
                Self::NAME,
                ReasonCode::PasswordRepeatingCharacters,
                formatter.format(&Template::fixed(
                    "Password contains consecutively repeating characters. e.g 'aaa' or '111'",
                )),
            ));
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.describe_with(&EnglishFormatter)
    }

    pub fn describe_with(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(&Template::fixed(
            "Password cannot contain consecutively repeating characters. e.g 'aaa' or '111'",
        ))
    }
}

impl Default for RepeatingCharacterRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_RUN)
    }
}

/// True as soon as some character repeats more than `maximum_run` times in a row.
fn longest_repeat_exceeds(password: &str, maximum_run: usize) -> bool {
    let mut previous: Option<char> = None;
    let mut streak = 0;
    for c in password.chars() {
        streak = if previous == Some(c) { streak + 1 } else { 1 };
        if streak > maximum_run {
            return true;
        }
        previous = Some(c);
    }
    false
}
