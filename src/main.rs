//! Ifabench - RegExp versus hand-written IFA validation
//!
//! Loads `ifas/ifas.small`, repeats every line 100 times, times both
//! validators over the result and prints the per-check averages.

use ifabench_core::cli::init_logging;
use ifabench_core::{format_report, BenchConfig, Dataset, Harness, OutputFormat};

fn main() {
    init_logging(tracing::Level::WARN);

    let config = BenchConfig::default();
    tracing::debug!(
        input = %config.input.display(),
        factor = config.factor,
        "Starting Ifabench v{}",
        env!("CARGO_PKG_VERSION")
    );

    let dataset = match Dataset::load(&config.input, config.factor) {
        Ok(dataset) => dataset,
        Err(e) => {
            println!("got error: {e}");
            return;
        }
    };

    let comparison = Harness::new().run(&dataset);
    println!("{}", format_report(&comparison, OutputFormat::Text));
}
