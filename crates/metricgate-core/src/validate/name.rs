//! Metric name validator.
//!
//! A metric name starts with a lowercase letter, continues with lowercase
//! letters, digits, or dots, and ends with a character from the configured
//! trailing class. Older deployments only accepted a trailing letter, so the
//! trailing class is a named policy rather than part of a pattern literal.

use regex::Regex;

use crate::error::Result;

use super::compile;

/// Character class permitted as the final character of a metric name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingChar {
    /// `[a-z0-9]`
    Alphanumeric,
    /// `[a-z]`
    Letter,
}

/// Trailing policy used by the gateway unless a config overrides it.
pub const METRIC_NAME_TRAILING: TrailingChar = TrailingChar::Alphanumeric;

impl TrailingChar {
    pub fn pattern(self) -> &'static str {
        match self {
            TrailingChar::Alphanumeric => r"^[a-z][.a-z0-9]*[a-z0-9]$",
            TrailingChar::Letter => r"^[a-z][.a-z0-9]*[a-z]$",
        }
    }
}

impl Default for TrailingChar {
    fn default() -> Self {
        METRIC_NAME_TRAILING
    }
}

/// Compiled metric name matcher. Construct once, share by reference.
#[derive(Debug, Clone)]
pub struct NameValidator {
    policy: TrailingChar,
    re: Regex,
}

impl NameValidator {
    pub fn new(policy: TrailingChar) -> Result<Self> {
        Ok(Self {
            policy,
            re: compile(policy.pattern())?,
        })
    }

    pub fn policy(&self) -> TrailingChar {
        self.policy
    }

    /// Returns true iff `name` is a syntactically valid metric name.
    pub fn is_valid(&self, name: &str) -> bool {
        !name.is_empty() && self.re.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_policy_is_alphanumeric() {
        assert_eq!(TrailingChar::default(), TrailingChar::Alphanumeric);
    }

    #[test]
    fn letter_policy_rejects_trailing_digit() {
        let v = NameValidator::new(TrailingChar::Letter).unwrap();
        assert!(v.is_valid("cpu.load"));
        assert!(!v.is_valid("cpu.p99"));
        assert_eq!(v.policy(), TrailingChar::Letter);
    }
}
