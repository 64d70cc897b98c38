use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RuntimerError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },

    #[error("Failed to open output file {path} for writing: {source}")]
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to launch {executable} with size {size}: {source}")]
    Launch {
        executable: PathBuf,
        size: u64,
        source: std::io::Error,
    },
}
