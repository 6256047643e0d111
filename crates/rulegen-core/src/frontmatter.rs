//! Frontmatter construction shared by every format that emits a metadata header.
//!
//! Output shape:
//!
//! ```text
//! ---
//! description: <text>
//! languages:
//!   - <lang>
//! alwaysApply: <true|false>
//! ---
//!
//! <body>
//! ```

use crate::error::Result;
use serde_yaml::{Mapping, Value};

pub const FENCE: &str = "---";

/// Ordered `key: value` lines of a fenced YAML header.
///
/// Each entry goes through `serde_yaml`, so values that would not read back
/// as the same string come out quoted or as block scalars.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    buffer: String,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(self, key: &str, value: &str) -> Result<Self> {
        self.entry(key, Value::String(value.to_string()))
    }

    /// A sequence with each item on its own indented `  - ` line.
    pub fn list<S: AsRef<str>>(mut self, key: &str, items: &[S]) -> Result<Self> {
        self.buffer.push_str(key);
        self.buffer.push_str(":\n");
        for item in items {
            let rendered = serde_yaml::to_string(&[item.as_ref()])?;
            for line in rendered.lines() {
                self.buffer.push_str("  ");
                self.buffer.push_str(line);
                self.buffer.push('\n');
            }
        }
        Ok(self)
    }

    pub fn flag(self, key: &str, value: bool) -> Result<Self> {
        self.entry(key, Value::Bool(value))
    }

    fn entry(mut self, key: &str, value: Value) -> Result<Self> {
        let mut map = Mapping::new();
        map.insert(Value::String(key.to_string()), value);
        self.buffer.push_str(&serde_yaml::to_string(&map)?);
        Ok(self)
    }

    /// Wrap the fields in fences, then a blank line, then `body` verbatim.
    pub fn render(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.buffer.len() + body.len() + 16);
        out.push_str(FENCE);
        out.push('\n');
        out.push_str(&self.buffer);
        out.push_str(FENCE);
        out.push_str("\n\n");
        out.push_str(body);
        out
    }
}

/// Build the standard rule header.
///
/// `description` is omitted when empty, `globs` when `None` or empty, and
/// `languages` when the slice is empty. `alwaysApply` is always present.
pub fn rule_frontmatter(
    description: &str,
    globs: Option<&str>,
    languages: &[String],
    always_apply: bool,
) -> Result<Frontmatter> {
    let mut fm = Frontmatter::new();
    if !description.is_empty() {
        fm = fm.scalar("description", description)?;
    }
    if let Some(globs) = globs.filter(|g| !g.is_empty()) {
        fm = fm.scalar("globs", globs)?;
    }
    if !languages.is_empty() {
        fm = fm.list("languages", languages)?;
    }
    fm.flag("alwaysApply", always_apply)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
