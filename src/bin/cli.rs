//! Ifabench CLI - Command-line interface
//!
//! Runs the benchmark with overridable settings, checks individual IFAs and
//! reports where the two validators disagree.

use clap::{Parser, Subcommand};
use ifabench_core::cli::{exit_code_table, init_logging};
use ifabench_core::config::{config_file, BenchConfig, ConfigError};
use ifabench_core::core::validator::RegexValidator;
use ifabench_core::{
    agreement, format_agreement, format_report, is_valid_ifa, validate_ifa, CliResult, Dataset,
    DatasetError, ExitCodes, Harness, OutputFormat, ValidatorKind,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};

/// Ifabench CLI
#[derive(Parser, Debug)]
#[command(
    name = "ifabench-cli",
    author = "Ifabench Team",
    version,
    about = "RegExp versus hand-written IFA validation benchmark",
    long_about = None
)]
struct Cli {
    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (TOML)
    #[arg(short, long, global = true, env = "IFABENCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time both validators over a dataset
    Bench {
        /// Dataset file, one IFA per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Copies of each line in the working set
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        factor: Option<u64>,

        /// Timed trials per validator
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        trials: Option<u32>,
    },

    /// Check IFAs given on the command line
    Check {
        /// Candidates to check
        #[arg(required = true)]
        ifas: Vec<String>,

        /// Fail unless every candidate passes this validator
        #[arg(long)]
        require: Option<ValidatorKind>,
    },

    /// Report where the validators disagree on a dataset
    Compare {
        /// Dataset file, one IFA per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Disagreeing candidates to list
        #[arg(short, long, default_value = "10")]
        samples: usize,
    },

    /// Show version, pattern and effective settings
    Info,

    /// List exit codes
    ExitCodes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_logging(level);

    let result = match run(&cli) {
        Ok(result) => result,
        Err(err) => classify(err),
    };

    if let (false, Some(msg)) = (result.is_success(), result.message()) {
        eprintln!("Error: {msg}");
    }
    result.to_exit_code()
}

fn classify(err: anyhow::Error) -> CliResult {
    let err = match err.downcast::<DatasetError>() {
        Ok(err) => return err.into(),
        Err(err) => err,
    };
    let err = match err.downcast::<ConfigError>() {
        Ok(err) => return err.into(),
        Err(err) => err,
    };
    CliResult::error(ExitCodes::ERROR, format!("{err:#}"))
}

fn run(cli: &Cli) -> anyhow::Result<CliResult> {
    let config = load_config(cli)?;
    let format = cli.format.unwrap_or(config.format);

    match &cli.command {
        Commands::Bench {
            input,
            factor,
            trials,
        } => {
            let config = BenchConfig {
                input: input.clone().unwrap_or(config.input),
                factor: factor.map_or(config.factor, |f| f as usize),
                trials: trials.unwrap_or(config.trials),
                format,
            };
            bench(&config)
        }
        Commands::Check { ifas, require } => check(ifas, *require, format),
        Commands::Compare { input, samples } => {
            let input = input.clone().unwrap_or(config.input);
            compare(&input, *samples, format)
        }
        Commands::Info => show_info(&config, format),
        Commands::ExitCodes => {
            println!("{}", exit_code_table());
            Ok(CliResult::success())
        }
    }
}

fn load_config(cli: &Cli) -> Result<BenchConfig, ConfigError> {
    match &cli.config {
        Some(path) => BenchConfig::load(path),
        None => BenchConfig::load_default(),
    }
}

fn bench(config: &BenchConfig) -> anyhow::Result<CliResult> {
    info!(
        input = %config.input.display(),
        factor = config.factor,
        trials = config.trials,
        "Loading dataset"
    );
    let dataset = Dataset::load(&config.input, config.factor)?;

    info!(size = dataset.len(), "Running benchmark");
    let comparison = Harness::with_trials(config.trials).run(&dataset);

    println!("{}", format_report(&comparison, config.format));
    Ok(CliResult::success())
}

fn check(
    ifas: &[String],
    require: Option<ValidatorKind>,
    format: OutputFormat,
) -> anyhow::Result<CliResult> {
    let verdicts: Vec<(&str, bool, bool)> = ifas
        .iter()
        .map(|ifa| (ifa.as_str(), is_valid_ifa(ifa), validate_ifa(ifa)))
        .collect();

    match format {
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = verdicts
                .iter()
                .map(|(ifa, regex, simple)| {
                    serde_json::json!({
                        "ifa": ifa,
                        "regex": regex,
                        "simple": simple
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            println!("ifa,regex,simple");
            for (ifa, regex, simple) in &verdicts {
                println!("{ifa},{regex},{simple}");
            }
        }
        OutputFormat::Text => {
            println!("{:<40} {:>6} {:>6}", "IFA", "RegExp", "Simple");
            println!("{:-<54}", "");
            for (ifa, regex, simple) in &verdicts {
                println!("{:<40} {:>6} {:>6}", format!("{ifa:?}"), regex, simple);
            }
        }
    }

    if let Some(kind) = require {
        let accepts = kind.check_fn();
        let rejected = ifas.iter().filter(|ifa| !accepts(ifa)).count();
        if rejected > 0 {
            return Ok(CliResult::validation_failed(format!(
                "{rejected} of {} candidates rejected by {}",
                ifas.len(),
                kind.label()
            )));
        }
    }

    Ok(CliResult::success())
}

fn compare(input: &Path, samples: usize, format: OutputFormat) -> anyhow::Result<CliResult> {
    let dataset = Dataset::load(input, 1)?;
    let res = agreement(dataset.originals(), samples);

    info!(
        checked = res.checked,
        disagreements = res.disagreements(),
        "Compared validators"
    );
    println!("{}", format_agreement(&res, format));
    Ok(CliResult::success())
}

fn show_info(config: &BenchConfig, format: OutputFormat) -> anyhow::Result<CliResult> {
    let pattern = RegexValidator::new().pattern();
    let config_path = config_file().map(|p| p.display().to_string());

    match format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "version": ifabench_core::VERSION,
                "pattern": pattern,
                "config_file": config_path,
                "config": config,
                "platform": std::env::consts::OS,
                "arch": std::env::consts::ARCH
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        _ => {
            println!("Ifabench v{}", ifabench_core::VERSION);
            println!(
                "Platform: {} ({})",
                std::env::consts::OS,
                std::env::consts::ARCH
            );
            println!();
            println!("RegExp pattern: {pattern}");
            println!(
                "Config file: {}",
                config_path.as_deref().unwrap_or("<unavailable>")
            );
            println!();
            print!("{}", config.to_toml()?);
        }
    }

    Ok(CliResult::success())
}
