//! CLI Module
//!
//! Provides command-line interface functionality:
//! - Exit codes for automation
//! - Logging setup shared by the binaries

pub mod exit_codes;

pub use exit_codes::{exit_code_description, exit_code_table, CliResult, ExitCodes};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr, leaving stdout to the report.
///
/// `RUST_LOG` directives take precedence over `level`.
pub fn init_logging(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
