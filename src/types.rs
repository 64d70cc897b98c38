use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Elapsed times for one test case, in measurement order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub size: u64,
    pub elapsed: Vec<Duration>,
}

impl RunRecord {
    pub fn with_capacity(size: u64, repetitions: usize) -> Self {
        Self {
            size,
            elapsed: Vec::with_capacity(repetitions),
        }
    }
}

/// What a finished run reports back to the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    pub executable: PathBuf,
    pub test_cases: usize,
    pub repetitions: usize,
    pub launches: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Where the child's stdout/stderr go. The child's output is never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildOutput {
    #[default]
    Inherit,
    Null,
}

impl ChildOutput {
    pub fn stdio(self) -> Stdio {
        match self {
            ChildOutput::Inherit => Stdio::inherit(),
            ChildOutput::Null => Stdio::null(),
        }
    }
}
