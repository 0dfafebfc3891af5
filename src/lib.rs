//! # Ifabench Core Library
//!
//! Compares two ways of validating IFAs (identifiers for advertising, i.e.
//! UUID-shaped strings):
//! - a precompiled regular expression
//! - a hand-written byte scan
//!
//! ## Features
//!
//! - Both validators behind one `fn(&str) -> bool` signature
//! - Dataset loading with line replication
//! - Timing harness with optional repeated trials
//! - Agreement check between the two validators
//! - Text, JSON and CSV reports
//!
//! ## Example
//!
//! ```rust,no_run
//! use ifabench_core::{format_report, Dataset, Harness, OutputFormat};
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = Dataset::load("ifas/ifas.small", 100)?;
//!     let comparison = Harness::new().run(&dataset);
//!     println!("{}", format_report(&comparison, OutputFormat::Text));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;

// Re-exports for convenience
pub use crate::cli::{CliResult, ExitCodes};
pub use crate::config::{BenchConfig, ConfigError};
pub use crate::core::dataset::{Dataset, DatasetError};
pub use crate::core::harness::{agreement, Agreement, Comparison, Harness, Measurement};
pub use crate::core::report::{format_agreement, format_report, OutputFormat};
pub use crate::core::validator::{
    create_validator, is_valid_ifa, validate_ifa, CheckFn, Validator, ValidatorKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
