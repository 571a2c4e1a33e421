//! Test support utilities for dockscout-core
//!
//! Provides MockRunner and recording telemetry/notifier implementations
//! for unit testing the engine without a container runtime.

use crate::{Notifier, TelemetryClient};
use async_trait::async_trait;
use dockscout_runner::{CommandRunner, Result, RunnerError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Records which methods were called on the mock runner
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerCall {
    Capture { args: Vec<String> },
    Submit { args: Vec<String> },
    Attach { args: Vec<String>, session: String },
}

/// Configurable mock command runner
pub struct MockRunner {
    pub calls: Arc<Mutex<Vec<RunnerCall>>>,
    /// Results handed out to consecutive `capture` calls; when the queue
    /// is empty the default is used.
    capture_queue: Arc<Mutex<VecDeque<Result<String>>>>,
    default_capture: Arc<Mutex<Result<String>>>,
    submit_result: Arc<Mutex<Result<()>>>,
    attach_result: Arc<Mutex<Result<()>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            capture_queue: Arc::new(Mutex::new(VecDeque::new())),
            default_capture: Arc::new(Mutex::new(Ok(String::new()))),
            submit_result: Arc::new(Mutex::new(Ok(()))),
            attach_result: Arc::new(Mutex::new(Ok(()))),
        }
    }

    /// Mock whose every capture returns the given output
    pub fn with_output(output: &str) -> Self {
        let mock = Self::new();
        mock.set_capture(Ok(output.to_string()));
        mock
    }

    /// Mock whose every capture fails with the given stderr
    pub fn failing(stderr: &str) -> Self {
        let mock = Self::new();
        mock.set_capture(Err(RunnerError::CommandFailed {
            stderr: stderr.to_string(),
        }));
        mock
    }

    /// Set the default capture result
    pub fn set_capture(&self, result: Result<String>) {
        *self.default_capture.lock().unwrap() = result;
    }

    /// Queue a one-shot capture result ahead of the default
    pub fn push_capture(&self, result: Result<String>) {
        self.capture_queue.lock().unwrap().push_back(result);
    }

    /// Set the result for submit calls
    pub fn set_submit(&self, result: Result<()>) {
        *self.submit_result.lock().unwrap() = result;
    }

    /// Set the result for attach calls
    pub fn set_attach(&self, result: Result<()>) {
        *self.attach_result.lock().unwrap() = result;
    }

    pub fn calls(&self) -> Vec<RunnerCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn capture_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RunnerCall::Capture { .. }))
            .count()
    }

    pub fn was_called(&self, call: &RunnerCall) -> bool {
        self.calls.lock().unwrap().contains(call)
    }

    fn record(&self, call: RunnerCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clone a Result<T> (RunnerError doesn't implement Clone)
fn clone_result<T: Clone>(r: &Result<T>) -> Result<T> {
    match r {
        Ok(v) => Ok(v.clone()),
        Err(e) => Err(clone_runner_error(e)),
    }
}

fn clone_runner_error(e: &RunnerError) -> RunnerError {
    match e {
        RunnerError::CommandFailed { stderr } => RunnerError::CommandFailed {
            stderr: stderr.clone(),
        },
        RunnerError::SpawnError(s) => RunnerError::SpawnError(s.clone()),
        RunnerError::IoError(_) => RunnerError::SpawnError("IO error (cloned)".into()),
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn capture(&self, args: &[String]) -> Result<String> {
        self.record(RunnerCall::Capture {
            args: args.to_vec(),
        });
        if let Some(result) = self.capture_queue.lock().unwrap().pop_front() {
            return result;
        }
        clone_result(&self.default_capture.lock().unwrap())
    }

    async fn submit(&self, args: &[String]) -> Result<()> {
        self.record(RunnerCall::Submit {
            args: args.to_vec(),
        });
        clone_result(&self.submit_result.lock().unwrap())
    }

    async fn attach(&self, args: &[String], session: &str) -> Result<()> {
        self.record(RunnerCall::Attach {
            args: args.to_vec(),
            session: session.to_string(),
        });
        clone_result(&self.attach_result.lock().unwrap())
    }
}

/// Telemetry client that records events for assertions
#[derive(Default)]
pub struct RecordingTelemetry {
    pub events: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, HashMap<String, String>)> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|(n, _)| n).collect()
    }
}

impl TelemetryClient for RecordingTelemetry {
    fn event_with(&self, name: &str, props: HashMap<String, String>) {
        self.events.lock().unwrap().push((name.to_string(), props));
    }
}

/// Notifier that records messages for assertions
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
