//! Hand-written IFA validation

use super::{Validator, ValidatorKind};

/// Exact length of a hyphenated IFA
pub const IFA_LENGTH: usize = 36;

/// Byte offsets of the four `-` separators
pub const SEPARATOR_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Scan an IFA byte by byte.
///
/// Only the bare 36-byte form passes. Braces are rejected and the all-zero
/// IFA is accepted, unlike [`is_valid_ifa`](super::is_valid_ifa).
pub fn validate_ifa(ifa: &str) -> bool {
    if ifa.len() != IFA_LENGTH {
        return false;
    }

    for (i, &ch) in ifa.as_bytes().iter().enumerate() {
        let ok = if SEPARATOR_POSITIONS.contains(&i) {
            ch == b'-'
        } else {
            ch.is_ascii_hexdigit()
        };
        if !ok {
            return false;
        }
    }

    true
}

/// Zero-sized handle for the Simple validator
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleValidator;

impl Validator for SimpleValidator {
    fn is_valid(&self, ifa: &str) -> bool {
        validate_ifa(ifa)
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Simple
    }
}
