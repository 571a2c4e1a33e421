//! Command runner trait and implementations for dockscout
//!
//! This crate provides the seam between the inventory engine and the
//! container runtime CLI. The engine only ever sees [`CommandRunner`];
//! the production implementation shells out to `docker`/`podman`.

mod cli_runner;
mod error;

pub use cli_runner::CliRunner;
pub use error::*;

use async_trait::async_trait;

/// Executes runtime commands on behalf of the engine.
///
/// Three execution modes cover everything the engine needs:
/// captured output for polling, detached submission for lifecycle
/// actions, and an attached terminal for interactive sessions.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion and return captured stdout.
    ///
    /// A non-zero exit yields [`RunnerError::CommandFailed`] carrying the
    /// captured stderr.
    async fn capture(&self, args: &[String]) -> Result<String>;

    /// Spawn detached with stdio discarded. Only a failure to spawn is an
    /// error; the remote command's own outcome is not observed here.
    async fn submit(&self, args: &[String]) -> Result<()>;

    /// Run attached to the caller's terminal and wait for exit. `session`
    /// names the interactive session for diagnostics.
    async fn attach(&self, args: &[String], session: &str) -> Result<()>;
}
