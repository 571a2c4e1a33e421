//! CLI-backed command runner
//!
//! Shells out to the docker/podman binary instead of speaking the daemon
//! API. This keeps credential handling with the runtime CLI and works
//! unchanged against remote hosts via `-H <host>`.

use crate::{CommandRunner, Result, RunnerError};
use async_trait::async_trait;
use dockscout_config::GlobalConfig;
use std::process::Stdio;
use tokio::process::Command;

/// Command runner that invokes the container runtime CLI
pub struct CliRunner {
    /// Binary to invoke ("docker" or "podman")
    runtime: String,
    /// Remote daemon address for `-H`, if any
    host: Option<String>,
}

impl CliRunner {
    pub fn new(runtime: impl Into<String>, host: Option<String>) -> Self {
        Self {
            runtime: runtime.into(),
            host,
        }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(
            config.defaults.runtime.clone(),
            config.defaults.host.clone(),
        )
    }

    /// Full argument list with the `-H <host>` prefix applied
    fn full_args(&self, args: &[String]) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(ref host) = self.host {
            full.push("-H".to_string());
            full.push(host.clone());
        }
        full.extend(args.iter().cloned());
        full
    }

    fn build_command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.runtime);
        cmd.args(self.full_args(args));
        cmd
    }
}

#[async_trait]
impl CommandRunner for CliRunner {
    async fn capture(&self, args: &[String]) -> Result<String> {
        let output = self
            .build_command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RunnerError::CommandFailed { stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    async fn submit(&self, args: &[String]) -> Result<()> {
        tracing::debug!("Submitting: {} {}", self.runtime, args.join(" "));

        let child = self
            .build_command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| RunnerError::SpawnError(e.to_string()))?;

        // Detached: the child keeps running, its outcome is not observed.
        drop(child);
        Ok(())
    }

    async fn attach(&self, args: &[String], session: &str) -> Result<()> {
        tracing::debug!("Attaching session '{}': {} {}", session, self.runtime, args.join(" "));

        let status = self
            .build_command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| RunnerError::SpawnError(e.to_string()))?;

        tracing::debug!("Session '{}' ended with {}", session, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_args_without_host() {
        let runner = CliRunner::new("docker", None);
        assert_eq!(
            runner.full_args(&args(&["ps", "-a"])),
            args(&["ps", "-a"])
        );
    }

    #[test]
    fn test_full_args_with_host() {
        let runner = CliRunner::new("docker", Some("192.168.56.106".to_string()));
        assert_eq!(
            runner.full_args(&args(&["start", "web"])),
            args(&["-H", "192.168.56.106", "start", "web"])
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = GlobalConfig::default();
        config.defaults.runtime = "podman".to_string();
        config.defaults.host = Some("tcp://10.0.0.5:2375".to_string());

        let runner = CliRunner::from_config(&config);
        assert_eq!(runner.runtime, "podman");
        assert_eq!(runner.host.as_deref(), Some("tcp://10.0.0.5:2375"));
    }

    #[tokio::test]
    async fn test_capture_missing_binary_is_io_error() {
        let runner = CliRunner::new("dockscout-test-no-such-binary", None);
        let err = runner.capture(&args(&["ps"])).await.unwrap_err();
        assert!(matches!(err, RunnerError::IoError(_)));
    }
}
