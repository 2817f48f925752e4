//! Rule configuration loading
//!
//! Reads a rule set from a JSON file of the form:
//!
//! ```json
//! {
//!   "rules": [
//!     {"name": "digits", "minimum": 1},
//!     {"name": "maximum_length", "maximum_length": 128},
//!     {"name": "repeating_characters"}
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::rules::Rule;
use crate::validator::RuleSet;

const RULES_PATH_ENV: &str = "PWD_RULES_PATH";
const DEFAULT_RULES_PATH: &str = "./config/password_rules.json";

#[derive(Debug, Deserialize)]
struct RuleFile {
    rules: Vec<Rule>,
}

/// Returns the rule file path.
///
/// Priority:
/// 1. Environment variable `PWD_RULES_PATH`
/// 2. Default path `./config/password_rules.json`
pub fn get_rules_path() -> PathBuf {
    std::env::var(RULES_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_RULES_PATH))
}

/// Loads the rule set from the configured rule file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is not valid rule JSON
/// - File lists no rules
pub fn load_rule_set() -> Result<RuleSet, ConfigError> {
    let path = get_rules_path();
    load_rule_set_from_path(&path)
}

/// Loads the rule set from a specific file path.
pub fn load_rule_set_from_path<P: AsRef<Path>>(path: P) -> Result<RuleSet, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Rule set loading FAILED: FileNotFound {}", path.display());
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let rule_set = parse_rule_set(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Rule set loaded: {} rules from {:?}", rule_set.len(), path);

    Ok(rule_set)
}

/// Parses a rule set from JSON text.
pub fn parse_rule_set(content: &str) -> Result<RuleSet, ConfigError> {
    let file: RuleFile = serde_json::from_str(content)?;
    if file.rules.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Rule set loading FAILED: no rules defined");
        return Err(ConfigError::EmptyRuleSet);
    }
    Ok(RuleSet::new(file.rules))
}
