//! Rule set validation - runs every configured rule and gathers the failures.

use secrecy::SecretString;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::{Rejection, ValidationError};
use crate::messages::{EnglishFormatter, SharedFormatter};
use crate::rules::{
    DigitCountRule, LowercaseCountRule, MaximumLengthRule, Rule, SpecialCharacterCountRule,
    UppercaseCountRule, UserContext,
};

/// Ordered list of rules sharing one message formatter.
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    formatter: SharedFormatter,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            formatter: Arc::new(EnglishFormatter),
        }
    }

    /// At least one digit, uppercase, lowercase and special character,
    /// at most 128 characters.
    pub fn standard() -> Self {
        Self::new(vec![
            DigitCountRule::new(1).into(),
            UppercaseCountRule::new(1).into(),
            LowercaseCountRule::new(1).into(),
            SpecialCharacterCountRule::new(1).into(),
            MaximumLengthRule::new(128).into(),
        ])
    }

    /// Appends a rule; it runs after those already present.
    pub fn with_rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Replaces the formatter used for every message this set produces.
    pub fn with_formatter(mut self, formatter: SharedFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule in order and reports all rejections together.
    pub fn validate(
        &self,
        password: &SecretString,
        user: Option<&UserContext<'_>>,
    ) -> Result<(), ValidationError> {
        self.run(password, user, || false)
    }

    /// Help texts of every rule, in rule order.
    pub fn help_texts(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|rule| rule.describe_with(self.formatter.as_ref()))
            .collect()
    }

    fn run(
        &self,
        password: &SecretString,
        user: Option<&UserContext<'_>>,
        is_cancelled: impl Fn() -> bool,
    ) -> Result<(), ValidationError> {
        let mut rejections: Vec<Rejection> = Vec::new();

        for rule in &self.rules {
            // Check cancellation before each rule
            if is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("password validation cancelled before rule {}", rule.name());
                return Err(ValidationError::Cancelled);
            }

            if let Err(rejection) = rule.check_with(password, user, self.formatter.as_ref()) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    rule = rejection.rule,
                    code = %rejection.code,
                    "password rejected by rule"
                );
                rejections.push(rejection);
            }
        }

        if rejections.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Rejected(rejections))
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Validates `password` against every rule in `rule_set`.
///
/// # Returns
/// - `Ok(())` if every rule accepts
/// - `Err(ValidationError::Rejected(..))` with one entry per failing rule
pub fn validate_password(
    rule_set: &RuleSet,
    password: &SecretString,
    user: Option<&UserContext<'_>>,
) -> Result<(), ValidationError> {
    rule_set.validate(password, user)
}

/// Like [`validate_password`], but stops with [`ValidationError::Cancelled`]
/// once `token` is cancelled.
#[cfg(feature = "async")]
pub fn validate_password_cancellable(
    rule_set: &RuleSet,
    password: &SecretString,
    user: Option<&UserContext<'_>>,
    token: Option<&CancellationToken>,
) -> Result<(), ValidationError> {
    rule_set.run(password, user, || token.is_some_and(|t| t.is_cancelled()))
}

/// Async version that sends the validation outcome via channel.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    rule_set: &RuleSet,
    password: &SecretString,
    user: Option<&UserContext<'_>>,
    token: CancellationToken,
    tx: mpsc::Sender<Result<(), ValidationError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let outcome = validate_password_cancellable(rule_set, password, user, Some(&token));

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
