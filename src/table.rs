use std::io::{self, Write};
use std::time::Duration;

use crate::types::RunRecord;

pub const FIRST_COLUMN: &str = "Test Cases";

/// `Test Cases,Run 1,...,Run <repetitions>` as separate fields.
pub fn header_row(repetitions: usize) -> Vec<String> {
    let mut header = Vec::with_capacity(repetitions + 1);
    header.push(FIRST_COLUMN.to_string());
    header.extend((1..=repetitions).map(|i| format!("Run {}", i)));
    header
}

/// Seconds in Rust's shortest round-trip float form, e.g. `0.001234`.
pub fn format_seconds(elapsed: Duration) -> String {
    elapsed.as_secs_f64().to_string()
}

/// One data line without the trailing newline: `<size>,<t1>,...,<tN>`.
pub fn format_row(size: u64, elapsed: &[Duration]) -> String {
    let mut line = size.to_string();
    for d in elapsed {
        line.push(',');
        line.push_str(&format_seconds(*d));
    }
    line
}

/// Comma-separated writer that flushes after every row, so completed rows
/// survive a later failure.
///
/// Fields are never quoted: every field is a number or a fixed label.
pub struct CsvWriter<W: Write> {
    inner: W,
    rows: usize,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, rows: 0 }
    }

    pub fn write_header(&mut self, repetitions: usize) -> io::Result<()> {
        self.write_line(&header_row(repetitions).join(","))
    }

    pub fn write_record(&mut self, record: &RunRecord) -> io::Result<()> {
        self.write_line(&format_row(record.size, &record.elapsed))
    }

    /// Lines written so far, header included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;
        self.rows += 1;
        Ok(())
    }
}
