//! Management commands: list, watch, search, config

use anyhow::{Context, Result};
use dockscout_config::GlobalConfig;
use dockscout_core::{ActionDispatcher, ContainerRecord, InventorySynchronizer};
use std::sync::Arc;

use super::lifecycle;
use crate::selector::pick_container;

const NAME_WIDTH: usize = 24;
const IMAGE_WIDTH: usize = 28;

fn print_inventory(records: &[ContainerRecord]) {
    if records.is_empty() {
        println!("No containers found.");
        return;
    }

    println!(
        "  {:<NAME_WIDTH$} {:<IMAGE_WIDTH$} STATUS",
        "NAME", "IMAGE"
    );
    println!("{}", "-".repeat(70));

    for record in records {
        let symbol = if record.is_running() { "●" } else { "○" };
        println!(
            "{} {:<NAME_WIDTH$} {:<IMAGE_WIDTH$} {}",
            symbol, record.name, record.image, record.status
        );
    }
}

/// One-shot container listing
pub async fn list(sync: &InventorySynchronizer) -> Result<()> {
    let records = sync.fetch_inventory().await;
    // One-shot command: don't leave the refresh loop running.
    sync.shutdown();
    print_inventory(&records);
    Ok(())
}

/// Live dashboard: render every snapshot the refresh loop publishes
pub async fn watch(sync: &Arc<InventorySynchronizer>) -> Result<()> {
    let records = sync.fetch_inventory().await;
    render_screen(&records);

    if sync.auto_refresh_interval().is_zero() {
        println!("\nAuto-refresh is disabled (containers.auto_refresh_interval = 0).");
        return Ok(());
    }

    let mut rx = sync.subscribe();
    loop {
        rx.changed()
            .await
            .context("refresh loop ended unexpectedly")?;
        let records = rx.borrow_and_update().clone();
        render_screen(&records);
    }
}

fn render_screen(records: &[ContainerRecord]) {
    // ANSI clear + home
    print!("\x1b[2J\x1b[1;1H");
    print_inventory(records);
}

/// Interactive search: pick a container, then describe it
pub async fn search(sync: &InventorySynchronizer, dispatcher: &ActionDispatcher) -> Result<()> {
    let candidates = sync.search_candidates().await?;
    if candidates.is_empty() {
        println!("No containers found.");
        return Ok(());
    }

    match pick_container(&candidates, "Search container")? {
        Some(label) => {
            let name = dockscout_core::selection_name(&label)
                .ok_or_else(|| anyhow::anyhow!("Empty selection"))?;
            lifecycle::get(dispatcher, name).await
        }
        // Cancellation takes no further action.
        None => Ok(()),
    }
}

/// Show or edit configuration
pub async fn config(edit: bool) -> Result<()> {
    let config_path = GlobalConfig::config_path()?;

    if edit {
        let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

        if !config_path.exists() {
            let config = GlobalConfig::default();
            config.save()?;
            println!("Created default config at {:?}", config_path);
        }

        std::process::Command::new(&editor)
            .arg(&config_path)
            .status()
            .context(format!("Failed to open editor: {}", editor))?;
    } else if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("# Config file: {:?}\n", config_path);
        println!("{}", content);
    } else {
        println!("# Config file: {:?} (not created yet)\n", config_path);
        println!("# Default configuration:");
        let config = GlobalConfig::default();
        let content = toml::to_string_pretty(&config)?;
        println!("{}", content);
        println!("\n# Run 'dockscout config --edit' to create and edit the config file.");
    }

    Ok(())
}
