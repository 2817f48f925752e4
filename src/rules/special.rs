//! Special character rule - minimum number of punctuation characters.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::character_class::{count_matching, require_minimum};
use super::{RuleResult, UserContext};
use crate::messages::{EnglishFormatter, MessageFormatter, Template};

/// Characters counted as special: space plus ASCII punctuation.
pub const SPECIAL_CHARACTERS: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Requires at least `minimum` characters from [`SPECIAL_CHARACTERS`].
///
/// Every occurrence counts, so `"!!"` satisfies a minimum of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialCharacterCountRule {
    #[serde(alias = "min_characters")]
    pub minimum: usize,
}

impl SpecialCharacterCountRule {
    pub const NAME: &'static str = "special_characters";

    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn is_special(c: char) -> bool {
        SPECIAL_CHARACTERS.contains(c)
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
        let found = count_matching(password.expose_secret(), Self::is_special);
        let template = Template::plural(
            "Password must contain at least {minimum} special character ({characters}).",
            "Password must contain at least {minimum} special characters ({characters}).",
            self.minimum,
        )
        .param("minimum", self.minimum)
        .param("characters", SPECIAL_CHARACTERS);
        require_minimum(Self::NAME, found, self.minimum, template, formatter)
    }

    pub fn describe(&self) -> String {
        self.describe_with(&EnglishFormatter)
    }

    pub fn describe_with(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(
            &Template::plural(
                "Your password must contain at least {minimum} special character ({characters}).",
                "Your password must contain at least {minimum} special characters ({characters}).",
                self.minimum,
            )
            .param("minimum", self.minimum)
            .param("characters", SPECIAL_CHARACTERS),
        )
    }
}

impl Default for SpecialCharacterCountRule {
    fn default() -> Self {
        Self::new(1)
    }
}
