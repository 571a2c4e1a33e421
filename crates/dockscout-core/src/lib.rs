//! Core logic for dockscout container inventory management
//!
//! This crate provides:
//! - Parsing of runtime `ps` output into container records
//! - The inventory synchronizer (poll, cache, reconcile, notify-once)
//! - The auto-refresh scheduler
//! - Lifecycle action dispatch with telemetry
//! - Telemetry and notification seams for the host surface

mod actions;
mod error;
mod inventory;
mod record;
mod scheduler;
mod telemetry;

pub use actions::*;
pub use error::*;
pub use inventory::*;
pub use record::*;
pub use scheduler::*;
pub use telemetry::*;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
