//! Error types for command runners

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Command failed: {stderr}")]
    CommandFailed { stderr: String },

    #[error("Failed to spawn command: {0}")]
    SpawnError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
