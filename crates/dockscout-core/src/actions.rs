//! Lifecycle action dispatch
//!
//! Maps each UI action to an exact runtime command, submits it, and
//! records one telemetry event per call. The dispatcher is stateless and
//! idempotent at this layer; outcomes of the remote commands themselves
//! surface through whatever consumes their output, not here.

use crate::{CoreError, Result, TelemetryClient};
use dockscout_config::GlobalConfig;
use dockscout_runner::CommandRunner;
use std::collections::HashMap;
use std::sync::Arc;

pub struct ActionDispatcher {
    runner: Arc<dyn CommandRunner>,
    telemetry: Arc<dyn TelemetryClient>,
    logs_options: String,
    execution_command: Option<String>,
}

fn to_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn split_options(options: &str) -> Result<Vec<String>> {
    shell_words::split(options).map_err(|e| CoreError::InvalidCommand(e.to_string()))
}

impl ActionDispatcher {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        telemetry: Arc<dyn TelemetryClient>,
        config: &GlobalConfig,
    ) -> Self {
        Self {
            runner,
            telemetry,
            logs_options: config.containers.logs_options.clone(),
            execution_command: config.containers.execution_command.clone(),
        }
    }

    /// Show the filtered `ps` line for one container
    pub async fn get(&self, name: &str) -> Result<()> {
        let args = to_args(&["ps", "-a", "--filter", &format!("name={}", name)]);
        self.runner.submit(&args).await?;
        self.telemetry.event("getContainer");
        Ok(())
    }

    pub async fn start(&self, name: &str) -> Result<()> {
        self.runner.submit(&to_args(&["start", name])).await?;
        self.telemetry.event("startContainer");
        Ok(())
    }

    /// Attach the terminal to the container's primary process
    pub async fn attach(&self, name: &str) -> Result<()> {
        let session = format!("attach {}", name);
        self.runner
            .attach(&to_args(&["attach", name]), &session)
            .await?;
        self.telemetry.event("attachContainer");
        Ok(())
    }

    pub async fn stop(&self, name: &str) -> Result<()> {
        self.runner.submit(&to_args(&["stop", name])).await?;
        self.telemetry.event("stopContainer");
        Ok(())
    }

    pub async fn restart(&self, name: &str) -> Result<()> {
        self.runner.submit(&to_args(&["restart", name])).await?;
        self.telemetry.event("restartContainer");
        Ok(())
    }

    pub async fn stats(&self, name: &str) -> Result<()> {
        self.runner.submit(&to_args(&["stats", name])).await?;
        self.telemetry.event("showContainerStatistics");
        Ok(())
    }

    /// Stream logs in an attached session, with the configured options
    pub async fn logs(&self, name: &str) -> Result<()> {
        let mut args = to_args(&["logs", name]);
        args.extend(split_options(&self.logs_options)?);
        let session = format!("logs {}", name);
        self.runner.attach(&args, &session).await?;
        self.telemetry.event("showContainerLogs");
        Ok(())
    }

    pub async fn inspect(&self, name: &str) -> Result<()> {
        self.runner.submit(&to_args(&["inspect", name])).await?;
        self.telemetry.event("inspectContainer");
        Ok(())
    }

    pub async fn remove(&self, name: &str) -> Result<()> {
        self.runner.submit(&to_args(&["rm", name])).await?;
        self.telemetry.event("removeContainer");
        Ok(())
    }

    /// Run the configured command in the container; a bare exec when none
    /// is configured.
    pub async fn exec_command(&self, name: &str) -> Result<()> {
        let mut props = HashMap::new();
        let mut args = to_args(&["exec", name]);

        if let Some(ref command) = self.execution_command {
            args.extend(split_options(command)?);
            props.insert("executionCommand".to_string(), command.clone());
        }

        self.runner.submit(&args).await?;
        self.telemetry.event_with("executeCommandInContainer", props);
        Ok(())
    }

    /// Open an interactive bash shell in the container
    pub async fn exec_bash(&self, name: &str) -> Result<()> {
        self.runner
            .attach(&to_args(&["exec", "-it", name, "bash"]), name)
            .await?;
        self.telemetry.event("executeInBashInContainer");
        Ok(())
    }
}
