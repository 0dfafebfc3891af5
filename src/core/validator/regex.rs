//! RegExp-based IFA validation

use super::{Validator, ValidatorKind};
use regex::Regex;
use std::sync::LazyLock;

/// Canonical 8-4-4-4-12 shape with optional braces, case-insensitive
pub const IFA_PATTERN: &str =
    r"^(?i)\{?[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\}?$";

/// The all-zero IFA, which carries no identity
pub const ZERO_IFA: &str = "00000000-0000-0000-0000-000000000000";

/// Compiled once, shared by every call
static IFA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IFA_PATTERN).expect("IFA_PATTERN is a valid regex"));

/// Check an IFA against the compiled pattern.
///
/// The zero-IFA comparison is exact, so a braced or upper-cased zero IFA
/// still goes through to the pattern and is accepted.
pub fn is_valid_ifa(ifa: &str) -> bool {
    if ifa.is_empty() {
        return false;
    }
    if ifa == ZERO_IFA {
        return false;
    }
    IFA_REGEX.is_match(ifa)
}

/// Zero-sized handle for the RegExp validator
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexValidator;

impl RegexValidator {
    /// Create new validator, forcing the pattern to compile now
    pub fn new() -> Self {
        LazyLock::force(&IFA_REGEX);
        Self
    }

    /// Pattern source in use
    pub fn pattern(&self) -> &'static str {
        IFA_REGEX.as_str()
    }
}

impl Validator for RegexValidator {
    fn is_valid(&self, ifa: &str) -> bool {
        is_valid_ifa(ifa)
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Regex
    }
}
