use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::RuntimerError;
use crate::types::ChildOutput;

/// Runs the benchmarked program once for a given size and returns only after
/// it has exited.
pub trait Launcher {
    fn launch(&mut self, size: u64) -> Result<(), RuntimerError>;
}

/// Launches `<executable> <size>` as a child process.
///
/// The exit status is logged and otherwise ignored: a failing child still
/// counts as a completed run.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    executable: PathBuf,
    child_output: ChildOutput,
}

impl ProcessLauncher {
    pub fn new(executable: impl Into<PathBuf>, child_output: ChildOutput) -> Self {
        Self {
            executable: executable.into(),
            child_output,
        }
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, size: u64) -> Result<(), RuntimerError> {
        let status = Command::new(&self.executable)
            .arg(size.to_string())
            .stdin(Stdio::null())
            .stdout(self.child_output.stdio())
            .stderr(self.child_output.stdio())
            .status()
            .map_err(|source| RuntimerError::Launch {
                executable: self.executable.clone(),
                size,
                source,
            })?;
        debug!(size, %status, "child exited");
        Ok(())
    }
}
