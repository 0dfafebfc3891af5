//! Candidate IFA datasets
//!
//! Loads one candidate per line and replicates every line `factor` times,
//! keeping each group of copies together and the groups in source order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::slice;
use tracing::debug;

/// Default replication factor
pub const DEFAULT_FACTOR: usize = 100;

/// Dataset loading errors
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Source could not be opened
    #[error("open {}: {source}", .path.display())]
    Open {
        /// Dataset path
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read failed partway through the source
    #[error("read failed at line {line}{}: {source}", location(.path.as_deref()))]
    Read {
        /// Dataset path, `None` for in-memory readers
        path: Option<PathBuf>,
        /// 1-based line number of the failed read
        line: usize,
        #[source]
        source: io::Error,
    },
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" of {}", p.display())).unwrap_or_default()
}

impl DatasetError {
    /// Underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => source,
        }
    }
}

/// In-memory working set of candidate strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    ifas: Vec<String>,
    source_lines: usize,
    factor: usize,
}

impl Dataset {
    /// Load a dataset from a file
    pub fn load(path: impl AsRef<Path>, factor: usize) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(BufReader::new(file), factor).map_err(|err| match err {
            DatasetError::Read { line, source, .. } => DatasetError::Read {
                path: Some(path.to_path_buf()),
                line,
                source,
            },
            other => other,
        })?;

        debug!(
            path = %path.display(),
            lines = dataset.source_lines,
            size = dataset.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Load a dataset from any line source
    pub fn from_reader<R: BufRead>(reader: R, factor: usize) -> Result<Self, DatasetError> {
        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DatasetError::Read {
                path: None,
                line: idx + 1,
                source,
            })?;
            lines.push(line);
        }
        Ok(Self::from_lines(lines, factor))
    }

    /// Build a dataset from already loaded lines
    pub fn from_lines<I, S>(lines: I, factor: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let source_lines = lines.len();
        Self {
            ifas: replicate(&lines, factor),
            source_lines,
            factor,
        }
    }

    /// Working-set size
    pub fn len(&self) -> usize {
        self.ifas.len()
    }

    /// Is empty?
    pub fn is_empty(&self) -> bool {
        self.ifas.is_empty()
    }

    /// Number of lines in the source, before replication
    pub fn source_lines(&self) -> usize {
        self.source_lines
    }

    /// Replication factor used to build the working set
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Working set as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.ifas
    }

    /// Iterate over the working set
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.ifas.iter()
    }

    /// Distinct source lines, in order (every `factor`-th element)
    pub fn originals(&self) -> impl Iterator<Item = &str> {
        self.ifas.iter().step_by(self.factor.max(1)).map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Repeat each line `factor` times in place: `a, b` becomes `a, a, .., b, b, ..`
pub fn replicate(lines: &[String], factor: usize) -> Vec<String> {
    let mut res = Vec::with_capacity(lines.len() * factor);
    for line in lines {
        for _ in 0..factor {
            res.push(line.clone());
        }
    }
    res
}
