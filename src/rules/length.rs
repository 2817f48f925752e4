//! Length rule - caps password length.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{RuleResult, UserContext};
use crate::error::{ReasonCode, Rejection};
use crate::messages::{EnglishFormatter, MessageFormatter, Template};

const DEFAULT_MAXIMUM_LENGTH: usize = 128;

/// Rejects passwords longer than `maximum_length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaximumLengthRule {
    #[serde(alias = "max_length")]
    pub maximum_length: usize,
}

impl MaximumLengthRule {
    pub const NAME: &'static str = "maximum_length";

    pub fn new(maximum_length: usize) -> Self {
        Self { maximum_length }
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
        if password.expose_secret().chars().count() > self.maximum_length {
            return Err(Rejection::from_template(
                Self::NAME,
                ReasonCode::PasswordTooLong,
                &self.template(),
                formatter,
            ));
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.describe_with(&EnglishFormatter)
    }

    pub fn describe_with(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(&self.template())
    }

    // Rejection and help text share one wording.
    fn template(&self) -> Template<'static> {
        Template::plural(
            "Password must contain at maximum {maximum_length} character.",
            "Password must contain at maximum {maximum_length} characters.",
            self.maximum_length,
        )
        .param("maximum_length", self.maximum_length)
    }
}

impl Default for MaximumLengthRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_LENGTH)
    }
}
