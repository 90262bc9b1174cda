use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading configuration or trip data.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Trip data file not found: {0}")]
    DataFileMissing(PathBuf),
    #[error("Required column `{0}` is missing from the trip data")]
    MissingColumn(String),
    #[error("Row {row}: cannot parse start time `{value}`")]
    InvalidTimestamp { row: usize, value: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Errors surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
    #[error("Terminal input failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
