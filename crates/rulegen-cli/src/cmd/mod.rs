pub mod check;
pub mod formats;
pub mod generate;

use anyhow::Context;
use rulegen_core::config::Config;
use rulegen_core::formats::default_formats;
use rulegen_core::{paths, Formats, RuleDocument};
use std::path::{Path, PathBuf};

/// Config, registry, and parsed rule documents for one run.
pub struct Workspace {
    pub config: Config,
    pub registry: Formats,
    pub docs: Vec<RuleDocument>,
    pub format_names: Vec<String>,
}

impl Workspace {
    pub fn load(root: &Path, rules: Option<&Path>, formats: &[String]) -> anyhow::Result<Self> {
        let config = Config::load(root).context("failed to load rulegen.yaml")?;
        let registry = default_formats();

        let rules_dir: PathBuf = match rules {
            Some(dir) => root.join(dir),
            None => paths::rules_dir(root, &config.rules_dir),
        };
        let docs = RuleDocument::load_dir(&rules_dir)
            .with_context(|| format!("failed to load rules from {}", rules_dir.display()))?;
        tracing::debug!(count = docs.len(), dir = %rules_dir.display(), "loaded rule documents");

        let format_names = if formats.is_empty() {
            config.format_names(&registry)
        } else {
            formats.to_vec()
        };

        Ok(Self {
            config,
            registry,
            docs,
            format_names,
        })
    }
}
