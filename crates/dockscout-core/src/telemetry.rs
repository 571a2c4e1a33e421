//! Telemetry and notification seams
//!
//! Both are fire-and-forget surfaces owned by the host: telemetry records
//! usage events and must never block or fail visibly; the notifier is the
//! single channel for user-visible error messages.

use std::collections::HashMap;

/// Fire-and-forget event recorder
pub trait TelemetryClient: Send + Sync {
    /// Record an event with a property map
    fn event_with(&self, name: &str, props: HashMap<String, String>);

    /// Record a bare event
    fn event(&self, name: &str) {
        self.event_with(name, HashMap::new());
    }
}

/// User-visible notification surface
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Telemetry client that writes events to the tracing log
#[derive(Debug, Default)]
pub struct LogTelemetry;

impl TelemetryClient for LogTelemetry {
    fn event_with(&self, name: &str, props: HashMap<String, String>) {
        let props = serde_json::to_string(&props).unwrap_or_else(|_| "{}".to_string());
        tracing::debug!(target: "telemetry", event = name, %props);
    }
}

/// Telemetry client that drops all events
#[derive(Debug, Default)]
pub struct NoopTelemetry;

impl TelemetryClient for NoopTelemetry {
    fn event_with(&self, _name: &str, _props: HashMap<String, String>) {}
}

/// Notifier that prints to stderr
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
