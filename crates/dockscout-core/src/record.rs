//! Container records parsed from runtime `ps` output
//!
//! The list command is asked for four space-joined fields per line:
//! `{{.ID}} {{.Names}} {{.Image}} {{.Status}}`. The status tail may itself
//! contain spaces (`Up 2 minutes`), so a line is split into three leading
//! tokens plus the remainder. Names or images containing spaces cannot be
//! represented in this format; lines that do not yield four fields are
//! dropped rather than producing misaligned records.

/// One container as reported by the list command. Immutable once parsed;
/// the inventory is always replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    /// Short identifier, unique at poll time
    pub id: String,
    /// Human-readable name; the sole key used to target lifecycle actions
    pub name: String,
    /// Image reference, display-only
    pub image: String,
    /// Raw trailing status fragment, e.g. `Up 2 minutes`
    pub status: String,
}

impl ContainerRecord {
    /// Parse one raw line. Returns None for blank or short lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut parts = line.splitn(4, char::is_whitespace);
        let id = parts.next()?;
        let name = parts.next()?;
        let image = parts.next()?;
        let status = parts.next()?.trim_start();

        Some(Self {
            id: id.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            status: status.to_string(),
        })
    }

    /// A container is running iff the status begins with the `Up` token.
    pub fn is_running(&self) -> bool {
        self.status.split_whitespace().next() == Some("Up")
    }
}

impl std::fmt::Display for ContainerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.image)
    }
}

/// Non-blank lines of a raw list output, kept verbatim for the cache.
pub fn filter_raw_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Parse a full list output into records, skipping blank and short lines.
pub fn parse_inventory(output: &str) -> Vec<ContainerRecord> {
    output.lines().filter_map(ContainerRecord::parse).collect()
}

/// Derive a `name (image)` quick-pick label from a cached raw line.
pub fn search_label(line: &str) -> Option<String> {
    let mut parts = line.split_whitespace();
    let _id = parts.next()?;
    let name = parts.next()?;
    let image = parts.next()?;
    Some(format!("{} ({})", name, image))
}

/// The container name is the leading token of a quick-pick label.
pub fn selection_name(label: &str) -> Option<&str> {
    label.split_whitespace().next()
}
