//! Error types for dockscout-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Runner error: {0}")]
    Runner(#[from] dockscout_runner::RunnerError),

    #[error("Invalid configured command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
