use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::RuntimerError;
use crate::types::ChildOutput;

pub const DEFAULT_TEST_CASES: [u64; 5] = [1, 10, 100, 1000, 10000];
pub const DEFAULT_REPETITIONS: usize = 100;
pub const DEFAULT_EXECUTABLE: &str = "./target/release/rust_json";
pub const DEFAULT_OUTPUT: &str = "rust_run_times.csv";

/// Everything a benchmark run needs to know.
///
/// Every field is optional in a config file; missing keys keep the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Sizes passed to the executable, one row each, in this order.
    pub test_cases: Vec<u64>,
    /// Timed launches per test case.
    pub repetitions: usize,
    /// Untimed launches before each test case's timed ones.
    pub warmup: usize,
    pub executable: PathBuf,
    pub output: PathBuf,
    pub child_output: ChildOutput,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            test_cases: DEFAULT_TEST_CASES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            warmup: 0,
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            child_output: ChildOutput::default(),
        }
    }
}

impl BenchConfig {
    /// Number of timed launches a full run performs.
    pub fn total_launches(&self) -> usize {
        self.test_cases.len().saturating_mul(self.repetitions)
    }
}

/// Values given on the command line. `None` leaves the config value alone.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub test_cases: Option<Vec<u64>>,
    pub repetitions: Option<usize>,
    pub warmup: Option<usize>,
    pub executable: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub child_output: Option<ChildOutput>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: BenchConfig) -> BenchConfig {
        if let Some(test_cases) = self.test_cases {
            config.test_cases = test_cases;
        }
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if let Some(warmup) = self.warmup {
            config.warmup = warmup;
        }
        if let Some(executable) = self.executable {
            config.executable = executable;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(child_output) = self.child_output {
            config.child_output = child_output;
        }
        config
    }
}

/// `<config_dir>/runtimer/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("runtimer").join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<BenchConfig, RuntimerError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RuntimerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|e| RuntimerError::ConfigParse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Load the explicit config file, or the default one if it exists, or fall
/// back to built-in defaults.
///
/// A missing explicit file is an error; a missing default file is not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<BenchConfig, RuntimerError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_config(&path),
        _ => Ok(BenchConfig::default()),
    }
}
