//! Interactive container quick-pick for CLI commands

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Select};

/// Present `name (image)` labels for single-choice selection.
///
/// Returns None when the user cancels (Esc/q).
pub fn pick_container(labels: &[String], prompt: &str) -> Result<Option<String>> {
    if !std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        bail!("Cannot show interactive selector: not a TTY. Specify the container name as an argument.");
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| labels[i].clone()))
}
