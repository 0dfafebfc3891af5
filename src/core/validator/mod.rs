//! IFA validators
//!
//! Two ways of deciding whether a string is a well-formed IFA:
//! - RegExp (precompiled pattern, braces allowed, all-zero IFA rejected)
//! - Simple (fixed-length byte scan, no braces, all-zero IFA accepted)
//!
//! Both are exposed through the same `fn(&str) -> bool` shape so the
//! harness can time either without caring which one it holds.

mod regex;
mod simple;

pub use self::regex::{is_valid_ifa, RegexValidator, IFA_PATTERN, ZERO_IFA};
pub use simple::{validate_ifa, SimpleValidator, IFA_LENGTH, SEPARATOR_POSITIONS};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plain validation function, shared by both algorithms
pub type CheckFn = fn(&str) -> bool;

/// Validator type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    /// Regular expression match
    Regex,
    /// Hand-written byte scan
    Simple,
}

impl ValidatorKind {
    /// Both validators, in the order the harness runs them
    pub fn all() -> &'static [ValidatorKind] {
        &[ValidatorKind::Regex, ValidatorKind::Simple]
    }

    /// Label used in the text report
    pub fn label(&self) -> &'static str {
        match self {
            ValidatorKind::Regex => "RegExp",
            ValidatorKind::Simple => "Simple",
        }
    }

    /// Short machine name
    pub fn name(&self) -> &'static str {
        match self {
            ValidatorKind::Regex => "regex",
            ValidatorKind::Simple => "simple",
        }
    }

    /// Validation function for this kind
    pub fn check_fn(&self) -> CheckFn {
        match self {
            ValidatorKind::Regex => is_valid_ifa,
            ValidatorKind::Simple => validate_ifa,
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown validator name
#[derive(Debug, thiserror::Error)]
#[error("Unknown validator: {0}")]
pub struct UnknownValidator(String);

impl FromStr for ValidatorKind {
    type Err = UnknownValidator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regex" | "regexp" => Ok(ValidatorKind::Regex),
            "simple" | "manual" => Ok(ValidatorKind::Simple),
            _ => Err(UnknownValidator(s.to_string())),
        }
    }
}

/// Validator trait for classifying candidate strings
pub trait Validator: Send + Sync {
    /// Returns true if `ifa` is accepted
    fn is_valid(&self, ifa: &str) -> bool;

    /// Get validator kind
    fn kind(&self) -> ValidatorKind;
}

/// Create a validator from kind
pub fn create_validator(kind: ValidatorKind) -> Box<dyn Validator> {
    match kind {
        ValidatorKind::Regex => Box::new(RegexValidator),
        ValidatorKind::Simple => Box::new(SimpleValidator),
    }
}
