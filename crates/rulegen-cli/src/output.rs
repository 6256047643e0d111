use serde::Serialize;
use std::path::Path;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// What `generate` did with one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Created,
    Updated,
    Unchanged,
}

impl WriteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteStatus::Created => "created",
            WriteStatus::Updated => "updated",
            WriteStatus::Unchanged => "unchanged",
        }
    }
}

/// `  created: .cursor/rules/xss.mdc`, with the path shown relative to `base`.
pub fn status_line(status: WriteStatus, path: &Path, base: &Path) -> String {
    let shown = path.strip_prefix(base).unwrap_or(path);
    format!("  {}: {}", status.as_str(), shown.display())
}
