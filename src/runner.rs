use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::errors::RuntimerError;
use crate::launch::{Launcher, ProcessLauncher};
use crate::table::CsvWriter;
use crate::types::{RunRecord, RunSummary};

/// Benchmark `config.executable` and write the timings to `config.output`.
pub fn run(config: &BenchConfig) -> Result<RunSummary, RuntimerError> {
    let mut launcher = ProcessLauncher::new(&config.executable, config.child_output);
    run_with(config, &mut launcher)
}

/// The benchmark loop with the launcher supplied by the caller.
///
/// The output file is truncated before the first launch and every row is
/// flushed once its test case completes. A launch error aborts the run
/// immediately, leaving the header and all completed rows on disk.
pub fn run_with<L: Launcher>(
    config: &BenchConfig,
    launcher: &mut L,
) -> Result<RunSummary, RuntimerError> {
    let started_at = Utc::now();
    let write_err = |source| RuntimerError::OutputWrite {
        path: config.output.clone(),
        source,
    };

    let file = File::create(&config.output).map_err(|source| RuntimerError::OutputOpen {
        path: config.output.clone(),
        source,
    })?;
    let mut writer = CsvWriter::new(BufWriter::new(file));
    writer.write_header(config.repetitions).map_err(write_err)?;

    info!(
        executable = %config.executable.display(),
        output = %config.output.display(),
        test_cases = config.test_cases.len(),
        repetitions = config.repetitions,
        launches = config.total_launches(),
        warmup = config.warmup,
        "starting benchmark"
    );

    let mut launches = 0;
    for &size in &config.test_cases {
        for _ in 0..config.warmup {
            launcher.launch(size)?;
        }

        let record = measure(launcher, size, config.repetitions)?;
        launches += record.elapsed.len();

        writer.write_record(&record).map_err(write_err)?;
        info!(size, runs = record.elapsed.len(), "test case complete");
    }

    let rows = writer.rows();
    writer.finish().map_err(write_err)?;
    info!(rows, launches, output = %config.output.display(), "benchmark complete");

    Ok(RunSummary {
        output: config.output.clone(),
        executable: config.executable.clone(),
        test_cases: config.test_cases.len(),
        repetitions: config.repetitions,
        launches,
        started_at,
        finished_at: Utc::now(),
    })
}

/// Time `repetitions` sequential launches for one size.
pub fn measure<L: Launcher>(
    launcher: &mut L,
    size: u64,
    repetitions: usize,
) -> Result<RunRecord, RuntimerError> {
    let mut record = RunRecord::with_capacity(size, repetitions);
    for run in 1..=repetitions {
        let start = Instant::now();
        launcher.launch(size)?;
        let elapsed = start.elapsed();
        debug!(size, run, elapsed_secs = elapsed.as_secs_f64(), "run timed");
        record.elapsed.push(elapsed);
    }
    Ok(record)
}
