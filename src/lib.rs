//! Password rules library
//!
//! This library provides independent, configurable password rules
//! (character counts, maximum length, repeated and sequential runs)
//! and a rule set that runs them all and reports every failure.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable validation and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RULES_PATH`: Custom path to the JSON rule file
//!   (default: `./config/password_rules.json`)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{RuleSet, IncreasingDigitRule, validate_password};
//! use secrecy::SecretString;
//!
//! let rules = RuleSet::standard().with_rule(IncreasingDigitRule::new(3));
//!
//! let password = SecretString::new("Abc$d123!".to_string().into());
//! assert!(validate_password(&rules, &password, None).is_ok());
//!
//! for help in rules.help_texts() {
//!     println!("{}", help);
//! }
//! ```

// Internal modules
mod config;
mod error;
mod messages;
mod rules;
mod validator;

// Public API
pub use config::{get_rules_path, load_rule_set, load_rule_set_from_path, parse_rule_set};
pub use error::{ConfigError, ReasonCode, Rejection, ValidationError};
pub use messages::{EnglishFormatter, MessageFormatter, SharedFormatter, Template, interpolate};
pub use rules::{
    DecreasingDigitRule, DigitCountRule, IncreasingDigitRule, LowercaseCountRule,
    MaximumLengthRule, RepeatingCharacterRule, Rule, RuleResult, SPECIAL_CHARACTERS,
    SpecialCharacterCountRule, UppercaseCountRule, UserContext, decimal_value, is_decimal_digit,
};
pub use validator::{RuleSet, validate_password};

#[cfg(feature = "async")]
pub use validator::{validate_password_cancellable, validate_password_tx};
