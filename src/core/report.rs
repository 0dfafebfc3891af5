//! Benchmark report rendering

use super::harness::{Agreement, Comparison, Measurement};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format for scripting
    Json,
    /// CSV format
    Csv,
}

/// One line per validator, as printed by the benchmark
pub fn measurement_line(m: &Measurement) -> String {
    format!(
        "{} check results: checked {} ifas in {} nanosecs, avg time for 1 check is {:.2}",
        m.validator.label(),
        m.checked,
        m.elapsed_nanos(),
        m.avg_nanos()
    )
}

/// Final ratio line
pub fn diff_line(cmp: &Comparison) -> String {
    format!("Diff: {:.2}", cmp.ratio())
}

/// Render a comparison
pub fn format_report(cmp: &Comparison, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text_format(cmp),
        OutputFormat::Json => json_format(cmp),
        OutputFormat::Csv => csv_format(cmp),
    }
}

fn text_format(cmp: &Comparison) -> String {
    let mut lines: Vec<String> = cmp.measurements().iter().map(|m| measurement_line(m)).collect();
    lines.push(diff_line(cmp));
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    comparison: &'a Comparison,
    diff: f64,
}

fn json_format(cmp: &Comparison) -> String {
    let report = JsonReport {
        comparison: cmp,
        diff: cmp.ratio(),
    };
    serde_json::to_string(&report).unwrap_or_default()
}

fn csv_format(cmp: &Comparison) -> String {
    let mut out = String::from("validator,checked,elapsed_ns,avg_ns");
    for m in cmp.measurements() {
        out.push_str(&format!(
            "\n{},{},{},{:.2}",
            m.validator,
            m.checked,
            m.elapsed_nanos(),
            m.avg_nanos()
        ));
    }
    out
}

/// Render an agreement tally
pub fn format_agreement(res: &Agreement, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(res).unwrap_or_default(),
        OutputFormat::Csv => format!(
            "checked,both_valid,both_invalid,regex_only,simple_only\n{},{},{},{},{}",
            res.checked, res.both_valid, res.both_invalid, res.regex_only, res.simple_only
        ),
        OutputFormat::Text => {
            let mut out = format!(
                "checked {} ifas: {} valid for both, {} invalid for both, {} RegExp only, {} Simple only",
                res.checked, res.both_valid, res.both_invalid, res.regex_only, res.simple_only
            );
            for sample in &res.samples {
                out.push_str(&format!("\n  {sample:?}"));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::ValidatorKind;
    use chrono::Local;
    use std::time::Duration;

    fn comparison() -> Comparison {
        Comparison {
            started_at: Local::now(),
            trials: 1,
            dataset_size: 300,
            regex: Measurement {
                validator: ValidatorKind::Regex,
                checked: 300,
                elapsed: Duration::from_nanos(30_000),
            },
            simple: Measurement {
                validator: ValidatorKind::Simple,
                checked: 300,
                elapsed: Duration::from_nanos(3_100),
            },
        }
    }

    #[test]
    fn test_text_report() {
        let report = format_report(&comparison(), OutputFormat::Text);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(
            lines,
            [
                "RegExp check results: checked 300 ifas in 30000 nanosecs, avg time for 1 check is 100.00",
                "Simple check results: checked 300 ifas in 3100 nanosecs, avg time for 1 check is 10.33",
                "Diff: 10.33",
            ]
        );
    }

    #[test]
    fn test_json_report() {
        let report = format_report(&comparison(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["dataset_size"], 300);
        assert_eq!(value["trials"], 1);
        assert_eq!(value["regex"]["validator"], "regex");
        assert_eq!(value["regex"]["elapsed_ns"], 30_000);
        assert_eq!(value["simple"]["checked"], 300);
        assert_eq!(value["simple"]["elapsed_ns"], 3100);
        assert!((value["diff"].as_f64().unwrap() - 10.333).abs() < 0.001);
        assert!(value["started_at"].is_string());
    }

    #[test]
    fn test_json_report_reads_back() {
        let cmp = comparison();
        let report = format_report(&cmp, OutputFormat::Json);
        let parsed: Comparison = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed.started_at, cmp.started_at);
        assert_eq!(parsed.trials, cmp.trials);
        assert_eq!(parsed.dataset_size, cmp.dataset_size);
        assert_eq!(parsed.measurements(), cmp.measurements());
    }

    #[test]
    fn test_csv_report() {
        let report = format_report(&comparison(), OutputFormat::Csv);
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("validator,checked,elapsed_ns,avg_ns"));
        assert_eq!(lines.next(), Some("regex,300,30000,100.00"));
        assert_eq!(lines.next(), Some("simple,300,3100,10.33"));
    }

    fn tally() -> Agreement {
        Agreement {
            checked: 5,
            both_valid: 1,
            both_invalid: 2,
            regex_only: 1,
            simple_only: 1,
            samples: vec![
                "00000000-0000-0000-0000-000000000000".to_string(),
                "{550e8400-e29b-41d4-a716-446655440000}".to_string(),
            ],
        }
    }

    #[test]
    fn test_agreement_text() {
        let text = format_agreement(&tally(), OutputFormat::Text);
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            [
                "checked 5 ifas: 1 valid for both, 2 invalid for both, 1 RegExp only, 1 Simple only",
                "  \"00000000-0000-0000-0000-000000000000\"",
                "  \"{550e8400-e29b-41d4-a716-446655440000}\"",
            ]
        );
    }

    #[test]
    fn test_agreement_csv() {
        let csv = format_agreement(&tally(), OutputFormat::Csv);
        assert_eq!(
            csv,
            "checked,both_valid,both_invalid,regex_only,simple_only\n5,1,2,1,1"
        );
    }

    #[test]
    fn test_agreement_json() {
        let json = format_agreement(&tally(), OutputFormat::Json);
        let parsed: Agreement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tally());
    }
}
