use crate::error::{Result, RuleError};
use crate::paths;
use crate::rule::Rule;
use crate::validate::{
    truncate_description, validate_description, validate_name_with_limit,
};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// DescriptionPolicy
// ---------------------------------------------------------------------------

/// What a format does with a description longer than its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionPolicy {
    Reject,
    Truncate,
}

impl DescriptionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptionPolicy::Reject => "reject",
            DescriptionPolicy::Truncate => "truncate",
        }
    }
}

impl fmt::Display for DescriptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RenderInput
// ---------------------------------------------------------------------------

/// Everything a renderer sees: the rule, its description after the format's
/// policy was applied, and the glob string.
pub struct RenderInput<'a> {
    pub rule: &'a Rule,
    pub description: &'a str,
    pub globs: &'a str,
}

pub type Renderer = fn(&RenderInput) -> Result<String>;

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// A target tool, described as data plus an injected renderer.
///
/// Formats that share a file shape share the same `render` fn and differ
/// only by name, paths, and limits.
#[derive(Clone, Copy)]
pub struct Format {
    pub name: &'static str,
    pub display_name: &'static str,
    pub extension: &'static str,
    pub subpath: &'static str,
    pub skill_dir: Option<&'static str>,
    pub name_max: usize,
    pub description_max: usize,
    pub description_policy: DescriptionPolicy,
    pub render: Renderer,
}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Format")
            .field("name", &self.name)
            .field("extension", &self.extension)
            .field("subpath", &self.subpath)
            .field("description_policy", &self.description_policy)
            .finish_non_exhaustive()
    }
}

impl Format {
    pub fn format_name(&self) -> &'static str {
        self.name
    }

    pub fn file_extension(&self) -> &'static str {
        self.extension
    }

    pub fn output_subpath(&self) -> &'static str {
        self.subpath
    }

    pub fn validate_name<'a>(&self, name: &'a str) -> Result<&'a str> {
        validate_name_with_limit(name, self.name_max)
    }

    /// Apply this format's description policy.
    pub fn prepare_description<'a>(&self, description: &'a str) -> Result<Cow<'a, str>> {
        match self.description_policy {
            DescriptionPolicy::Reject => {
                validate_description(description, self.description_max).map(Cow::Borrowed)
            }
            DescriptionPolicy::Truncate => {
                if description.trim().is_empty() {
                    return Err(RuleError::EmptyDescription);
                }
                Ok(truncate_description(description, self.description_max))
            }
        }
    }

    /// Render the complete file contents for one rule.
    pub fn generate(&self, rule: &Rule, globs: &str) -> Result<String> {
        let description = self.prepare_description(&rule.description)?;
        let input = RenderInput {
            rule,
            description: &description,
            globs,
        };
        (self.render)(&input)
    }

    pub fn file_name(&self, name: &str) -> Result<String> {
        let name = self.validate_name(name)?;
        Ok(format!("{name}{}", self.extension))
    }

    /// `root/<subpath>/<name><extension>`
    pub fn output_path(&self, root: &Path, name: &str) -> Result<PathBuf> {
        Ok(root.join(self.subpath).join(self.file_name(name)?))
    }

    /// Name of the skill this format's rules belong to: the last component of
    /// `skill_dir`, which the tool requires to match the manifest's `name`.
    pub fn skill_name(&self) -> Option<&'static str> {
        self.skill_dir?.rsplit('/').next()
    }

    /// `root/<skill_dir>/SKILL.md`, for skill-based formats.
    pub fn skill_manifest_path(&self, root: &Path) -> Option<PathBuf> {
        self.skill_dir
            .map(|dir| root.join(dir).join(paths::SKILL_MD))
    }
}

// ---------------------------------------------------------------------------
// Formats registry
// ---------------------------------------------------------------------------

pub struct Formats {
    formats: Vec<Format>,
}

impl Formats {
    pub fn new(formats: Vec<Format>) -> Self {
        Self { formats }
    }

    pub fn get(&self, name: &str) -> Option<&Format> {
        self.formats.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Format> {
        self.formats.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.name).collect()
    }

    /// Look up each requested name, in request order. Duplicates collapse.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Format>> {
        let mut selected: Vec<&Format> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let format = self
                .get(name)
                .ok_or_else(|| RuleError::UnknownFormat(name.to_string()))?;
            if !selected.iter().any(|f| f.name == format.name) {
                selected.push(format);
            }
        }
        Ok(selected)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
