//! CLI command implementations

mod lifecycle;
mod manage;

use anyhow::{anyhow, bail, Result};
use dockscout_core::{selection_name, InventorySynchronizer};

pub use lifecycle::*;
pub use manage::*;

use crate::selector::pick_container;

/// Resolve a container name from an argument or an interactive pick
pub async fn resolve_name(
    sync: &InventorySynchronizer,
    container: Option<String>,
    prompt: &str,
) -> Result<String> {
    if let Some(name) = container {
        return Ok(name);
    }

    let candidates = sync.search_candidates().await?;
    if candidates.is_empty() {
        bail!("No containers found on the host.");
    }

    match pick_container(&candidates, prompt)? {
        Some(label) => selection_name(&label)
            .map(String::from)
            .ok_or_else(|| anyhow!("Empty selection")),
        None => bail!("Selection cancelled"),
    }
}
