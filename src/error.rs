//! Rejection and error types shared by every rule.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::messages::{MessageFormatter, Template};

/// Machine-readable category of a rejection.
///
/// Callers should branch on this rather than on message text, which may be
/// localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Not enough digits, uppercase, lowercase or special characters.
    PasswordTooWeak,
    PasswordTooLong,
    PasswordRepeatingCharacters,
    PasswordIncreasingDigits,
    PasswordDecreasingDigits,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::PasswordTooWeak => "password_too_weak",
            ReasonCode::PasswordTooLong => "password_too_long",
            ReasonCode::PasswordRepeatingCharacters => "password_repeating_characters",
            ReasonCode::PasswordIncreasingDigits => "password_increasing_digits",
            ReasonCode::PasswordDecreasingDigits => "password_decreasing_digits",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule's refusal of a password.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct Rejection {
    /// Name of the rule that produced the rejection.
    pub rule: &'static str,
    pub code: ReasonCode,
    /// Human-readable, already formatted message.
    pub message: String,
    /// Values the message was built from, e.g. `minimum`, so callers can
    /// reword it without parsing the text.
    pub params: BTreeMap<String, String>,
}

impl Rejection {
    pub fn new(rule: &'static str, code: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            rule,
            code,
            message: message.into(),
            params: BTreeMap::new(),
        }
    }

    /// Formats `template` and keeps its parameters alongside the message.
    pub fn from_template(
        rule: &'static str,
        code: ReasonCode,
        template: &Template<'_>,
        formatter: &dyn MessageFormatter,
    ) -> Self {
        Self {
            rule,
            code,
            message: formatter.format(template),
            params: template
                .params
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }
}

/// Outcome of running a whole rule set against a password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Every rejection collected, in rule order.
    #[error("{}", join_messages(.0))]
    Rejected(Vec<Rejection>),
    #[error("Password validation cancelled")]
    Cancelled,
}

impl ValidationError {
    /// Rejections carried by this error; empty when cancelled.
    pub fn rejections(&self) -> &[Rejection] {
        match self {
            ValidationError::Rejected(rejections) => rejections,
            ValidationError::Cancelled => &[],
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.rejections()
            .iter()
            .map(|r| r.message.as_str())
            .collect()
    }

    pub fn codes(&self) -> Vec<ReasonCode> {
        self.rejections().iter().map(|r| r.code).collect()
    }
}

fn join_messages(rejections: &[Rejection]) -> String {
    rejections
        .iter()
        .map(|r| r.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Errors raised while loading a rule set from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Rule file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read rule file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse rule file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Rule file defines no rules")]
    EmptyRuleSet,
}
