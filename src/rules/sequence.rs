//! Sequence rules - detect runs of digits stepping up or down by one.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::digit::decimal_value;
use super::{DEFAULT_MAXIMUM_RUN, RuleResult, UserContext};
use crate::error::{ReasonCode, Rejection};
use crate::messages::{EnglishFormatter, MessageFormatter, Template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    fn follows(self, previous: u32, current: u32) -> bool {
        match self {
            Direction::Increasing => previous + 1 == current,
            Direction::Decreasing => current + 1 == previous,
        }
    }
}

/// Walks `password` once, tracking the length of the current stepping run of
/// adjacent digits. Any non-digit ends the run.
fn digit_run_exceeds(password: &str, direction: Direction, maximum_run: usize) -> bool {
    let mut previous: Option<u32> = None;
    let mut streak = 0;
    for c in password.chars() {
        let Some(digit) = decimal_value(c) else {
            previous = None;
            streak = 0;
            continue;
        };
        streak = match previous {
            Some(p) if direction.follows(p, digit) => streak + 1,
            _ => 1,
        };
        if streak > maximum_run {
            return true;
        }
        previous = Some(digit);
    }
    false
}

/// Rejects more than `maximum_run` adjacent digits counting up by one,
/// so `"123"` passes and `"1234"` fails with the default of 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncreasingDigitRule {
    #[serde(alias = "max_consecutive")]
    pub maximum_run: usize,
}

impl IncreasingDigitRule {
    pub const NAME: &'static str = "increasing_digits";

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
        if digit_run_exceeds(
            password.expose_secret(),
            Direction::Increasing,
            self.maximum_run,
        ) {
            return Err(Rejection::new(
                Self::NAME,
                ReasonCode::PasswordIncreasingDigits,
                formatter.format(&Template::fixed(
                    "Password contains consecutively increasing digits. e.g '12345'",
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
            "Password cannot contain consecutively increasing digits. e.g '12345'",
        ))
    }
}

impl Default for IncreasingDigitRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_RUN)
    }
}

/// Rejects more than `maximum_run` adjacent digits counting down by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecreasingDigitRule {
    #[serde(alias = "max_consecutive")]
    pub maximum_run: usize,
}

impl DecreasingDigitRule {
    pub const NAME: &'static str = "decreasing_digits";

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
        if digit_run_exceeds(
            password.expose_secret(),
            Direction::Decreasing,
            self.maximum_run,
        ) {
            return Err(Rejection::new(
                Self::NAME,
                ReasonCode::PasswordDecreasingDigits,
                formatter.format(&Template::fixed(
                    "Password contains consecutively decreasing digits. e.g '54321'",
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
            "Password cannot contain consecutively decreasing digits. e.g '54321'",
        ))
    }
}

impl Default for DecreasingDigitRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_RUN)
    }
}
