//! Timing harness
//!
//! Runs each validator over the same working set, in the same order, and
//! measures the wall-clock time of the whole pass. The boolean results are
//! discarded; only the cost of the call is of interest.

use super::dataset::Dataset;
use super::validator::{is_valid_ifa, validate_ifa, CheckFn, ValidatorKind};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, debug_span};

/// Elapsed time of one validator over a working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Which validator was timed
    pub validator: ValidatorKind,
    /// Number of checks performed
    pub checked: u64,
    /// Total elapsed time, as whole nanoseconds saturating at `u64::MAX`
    #[serde(rename = "elapsed_ns", with = "duration_nanos")]
    pub elapsed: Duration,
}

impl Measurement {
    /// Create an empty measurement
    pub fn new(validator: ValidatorKind) -> Self {
        Self {
            validator,
            checked: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Total elapsed nanoseconds
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    /// Average nanoseconds per check, 0 when nothing was checked
    pub fn avg_nanos(&self) -> f64 {
        if self.checked == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.checked as f64
    }

    fn add(&mut self, checked: usize, elapsed: Duration) {
        self.checked += checked as u64;
        self.elapsed += elapsed;
    }
}

/// Head-to-head result of both validators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// When the run started
    pub started_at: DateTime<Local>,
    /// Number of trials summed into each measurement
    pub trials: u32,
    /// Working-set size of a single pass
    pub dataset_size: usize,
    /// RegExp pass
    pub regex: Measurement,
    /// Simple pass
    pub simple: Measurement,
}

impl Comparison {
    /// Simple average as a percentage of the RegExp average
    pub fn ratio(&self) -> f64 {
        let base = self.regex.avg_nanos();
        if base == 0.0 {
            return 0.0;
        }
        self.simple.avg_nanos() * 100.0 / base
    }

    /// Both measurements, in run order
    pub fn measurements(&self) -> [&Measurement; 2] {
        [&self.regex, &self.simple]
    }
}

/// Call `check` once per element, in order, and return the elapsed time
pub fn time_pass(ifas: &[String], check: CheckFn) -> Duration {
    let start = Instant::now();
    for ifa in ifas {
        black_box(check(black_box(ifa.as_str())));
    }
    start.elapsed()
}

/// Benchmark driver
#[derive(Debug, Clone)]
pub struct Harness {
    trials: u32,
}

impl Default for Harness {
    fn default() -> Self {
        Self { trials: 1 }
    }
}

impl Harness {
    /// Create a single-trial harness
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeat both passes `trials` times and sum the results
    pub fn with_trials(trials: u32) -> Self {
        Self {
            trials: trials.max(1),
        }
    }

    /// Number of trials
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Time both validators over the dataset
    pub fn run(&self, dataset: &Dataset) -> Comparison {
        self.run_with(
            dataset,
            ValidatorKind::Regex.check_fn(),
            ValidatorKind::Simple.check_fn(),
        )
    }

    /// Time two checks over the dataset, recorded as the RegExp and Simple
    /// passes. Each trial runs `regex_check` first.
    pub fn run_with(
        &self,
        dataset: &Dataset,
        regex_check: CheckFn,
        simple_check: CheckFn,
    ) -> Comparison {
        let started_at = Local::now();
        let ifas = dataset.as_slice();
        let mut regex = Measurement::new(ValidatorKind::Regex);
        let mut simple = Measurement::new(ValidatorKind::Simple);

        for trial in 0..self.trials {
            let _span = debug_span!("trial", trial, size = ifas.len()).entered();

            for (measurement, check) in [(&mut regex, regex_check), (&mut simple, simple_check)] {
                let elapsed = time_pass(ifas, check);
                debug!(validator = %measurement.validator, ?elapsed, "Pass finished");
                measurement.add(ifas.len(), elapsed);
            }
        }

        Comparison {
            started_at,
            trials: self.trials,
            dataset_size: ifas.len(),
            regex,
            simple,
        }
    }
}

/// How the two validators classified a set of candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agreement {
    /// Candidates checked
    pub checked: usize,
    /// Accepted by both
    pub both_valid: usize,
    /// Rejected by both
    pub both_invalid: usize,
    /// Accepted only by RegExp
    pub regex_only: usize,
    /// Accepted only by Simple
    pub simple_only: usize,
    /// First disagreeing candidates
    pub samples: Vec<String>,
}

impl Agreement {
    /// Number of candidates the validators disagree on
    pub fn disagreements(&self) -> usize {
        self.regex_only + self.simple_only
    }
}

/// Classify every candidate with both validators, keeping up to
/// `sample_limit` disagreeing strings
pub fn agreement<'a, I>(ifas: I, sample_limit: usize) -> Agreement
where
    I: IntoIterator<Item = &'a str>,
{
    let mut res = Agreement::default();
    for ifa in ifas {
        res.checked += 1;
        let verdicts = (is_valid_ifa(ifa), validate_ifa(ifa));
        match verdicts {
            (true, true) => res.both_valid += 1,
            (false, false) => res.both_invalid += 1,
            (true, false) => res.regex_only += 1,
            (false, true) => res.simple_only += 1,
        }
        if verdicts.0 != verdicts.1 && res.samples.len() < sample_limit {
            res.samples.push(ifa.to_string());
        }
    }
    res
}

mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static PASS_SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static REGEX_SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static SIMPLE_SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn record_pass(ifa: &str) -> bool {
        PASS_SEEN.lock().unwrap().push(ifa.to_string());
        true
    }

    fn record_regex(ifa: &str) -> bool {
        REGEX_SEEN.lock().unwrap().push(ifa.to_string());
        is_valid_ifa(ifa)
    }

    fn record_simple(ifa: &str) -> bool {
        SIMPLE_SEEN.lock().unwrap().push(ifa.to_string());
        validate_ifa(ifa)
    }

    #[test]
    fn test_avg_nanos() {
        let m = Measurement {
            validator: ValidatorKind::Regex,
            checked: 4,
            elapsed: Duration::from_nanos(1000),
        };
        assert_eq!(m.avg_nanos(), 250.0);
        assert_eq!(Measurement::new(ValidatorKind::Simple).avg_nanos(), 0.0);
    }

    #[test]
    fn test_ratio() {
        let cmp = Comparison {
            started_at: Local::now(),
            trials: 1,
            dataset_size: 10,
            regex: Measurement {
                validator: ValidatorKind::Regex,
                checked: 10,
                elapsed: Duration::from_nanos(2000),
            },
            simple: Measurement {
                validator: ValidatorKind::Simple,
                checked: 10,
                elapsed: Duration::from_nanos(500),
            },
        };
        assert_eq!(cmp.ratio(), 25.0);
    }

    #[test]
    fn test_run_counts() {
        let dataset = Dataset::from_lines(["550e8400-e29b-41d4-a716-446655440000", "junk"], 100);
        let cmp = Harness::with_trials(3).run(&dataset);
        assert_eq!(cmp.dataset_size, 200);
        assert_eq!(cmp.regex.checked, 600);
        assert_eq!(cmp.simple.checked, 600);
        assert_eq!(cmp.trials, 3);
    }

    #[test]
    fn test_time_pass_order() {
        let dataset = Dataset::from_lines(["x", "y"], 3);

        time_pass(dataset.as_slice(), record_pass);
        let first = std::mem::take(&mut *PASS_SEEN.lock().unwrap());
        time_pass(dataset.as_slice(), record_pass);
        let second = std::mem::take(&mut *PASS_SEEN.lock().unwrap());

        assert_eq!(first, ["x", "x", "x", "y", "y", "y"]);
        assert_eq!(first, dataset.as_slice());
        assert_eq!(second, first);
    }

    #[test]
    fn test_passes_see_same_sequence() {
        let dataset = Dataset::from_lines(
            ["550e8400-e29b-41d4-a716-446655440000", "", "junk"],
            4,
        );
        let cmp = Harness::with_trials(2).run_with(&dataset, record_regex, record_simple);

        let regex_seen = REGEX_SEEN.lock().unwrap().clone();
        let simple_seen = SIMPLE_SEEN.lock().unwrap().clone();
        let expected = [dataset.as_slice(), dataset.as_slice()].concat();

        assert_eq!(regex_seen, expected);
        assert_eq!(simple_seen, regex_seen);
        assert_eq!(cmp.regex.checked, 24);
        assert_eq!(cmp.simple.checked, 24);
    }

    #[test]
    fn test_elapsed_saturates() {
        let m = Measurement {
            validator: ValidatorKind::Simple,
            checked: 1,
            elapsed: Duration::from_secs(u64::MAX),
        };
        let value = serde_json::to_value(m).unwrap();
        assert_eq!(value["elapsed_ns"], u64::MAX);
        assert_eq!(value["validator"], "simple");
    }

    #[test]
    fn test_empty_dataset() {
        let cmp = Harness::new().run(&Dataset::default());
        assert_eq!(cmp.regex.avg_nanos(), 0.0);
        assert_eq!(cmp.simple.avg_nanos(), 0.0);
        assert_eq!(cmp.ratio(), 0.0);
    }

    #[test]
    fn test_agreement() {
        let ifas = [
            "550e8400-e29b-41d4-a716-446655440000",
            "00000000-0000-0000-0000-000000000000",
            "{550e8400-e29b-41d4-a716-446655440000}",
            "",
        ];
        let res = agreement(ifas, 1);
        assert_eq!(res.checked, 4);
        assert_eq!(res.both_valid, 1);
        assert_eq!(res.both_invalid, 1);
        assert_eq!(res.simple_only, 1);
        assert_eq!(res.regex_only, 1);
        assert_eq!(res.disagreements(), 2);
        assert_eq!(res.samples, ["00000000-0000-0000-0000-000000000000"]);
    }
}
