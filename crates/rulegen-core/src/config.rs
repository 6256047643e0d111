use crate::error::Result;
use crate::format::Formats;
use crate::paths;
use crate::tags::TagCatalog;
use crate::validate::{validate_description, DESCRIPTION_MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SkillConfig
// ---------------------------------------------------------------------------

/// Contents of the generated `SKILL.md` for skill-based formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    #[serde(default = "default_skill_description")]
    pub description: String,
    #[serde(default = "default_skill_body")]
    pub body: String,
}

fn default_skill_description() -> String {
    "Security rules for writing and reviewing code. Use when generating, modifying, or reviewing source code.".to_string()
}

fn default_skill_body() -> String {
    "# Software Security\n\nApply the rules in `rules/` whenever you write or review code.\n"
        .to_string()
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            description: default_skill_description(),
            body: default_skill_body(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_rules_dir")]
    pub rules_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Format names to emit. Absent means every registered format; an
    /// explicit empty list emits nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
    #[serde(default)]
    pub known_tags: TagCatalog,
    #[serde(default)]
    pub skill: SkillConfig,
}

fn default_rules_dir() -> String {
    paths::DEFAULT_RULES_DIR.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            output_dir: default_output_dir(),
            formats: None,
            known_tags: TagCatalog::default(),
            skill: SkillConfig::default(),
        }
    }
}

impl Config {
    /// Load `rulegen.yaml` from `root`, or defaults when it does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Requested format names, falling back to every registered format when
    /// the config does not list any.
    pub fn format_names(&self, registry: &Formats) -> Vec<String> {
        match &self.formats {
            Some(names) => names.clone(),
            None => registry.names().into_iter().map(str::to_string).collect(),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, registry: &Formats) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let formats = self.formats.as_deref().unwrap_or_default();
        if self.formats.is_some() && formats.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "formats is empty: nothing will be generated".to_string(),
            });
        }
        for name in formats {
            if registry.get(name).is_none() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "unknown format '{name}' (known: {})",
                        registry.names().join(", ")
                    ),
                });
            }
        }

        if let Err(e) = validate_description(&self.skill.description, DESCRIPTION_MAX_LENGTH) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("skill.description: {e}"),
            });
        }

        if self.rules_dir.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "rules_dir is empty".to_string(),
            });
        }

        if self.known_tags.iter().next().is_none() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "known_tags is empty: every rule tag will be reported as unknown"
                    .to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::default_formats;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.rules_dir, "rules");
        assert_eq!(cfg.output_dir, ".");
        assert!(cfg.formats.is_none());
        assert!(cfg.known_tags.is_known("privacy"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("rulegen.yaml"),
            "formats:\n  - opencode\nknown_tags:\n  - crypto\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.formats, Some(vec!["opencode".to_string()]));
        assert!(cfg.known_tags.is_known("crypto"));
        assert_eq!(cfg.rules_dir, "rules");
        assert_eq!(cfg.skill.description, default_skill_description());
    }

    #[test]
    fn save_and_reload() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.rules_dir = "security/rules".to_string();
        cfg.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.rules_dir, "security/rules");
        assert_eq!(loaded.known_tags, TagCatalog::default());
    }

    #[test]
    fn format_names_default_to_registry() {
        let registry = default_formats();
        let cfg = Config::default();
        assert_eq!(
            cfg.format_names(&registry),
            vec!["agentskills", "opencode", "cursor"]
        );
    }

    #[test]
    fn validate_flags_unknown_format_and_blank_skill_description() {
        let registry = default_formats();
        let mut cfg = Config::default();
        cfg.formats = Some(vec!["opencode".to_string(), "vim".to_string()]);
        cfg.skill.description = " ".to_string();
        let warnings = cfg.validate(&registry);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Error));
        assert!(warnings[0].message.contains("'vim'"));
    }

    #[test]
    fn explicit_empty_formats_selects_nothing_and_warns() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("rulegen.yaml"), "formats: []\n").unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        let registry = default_formats();
        assert!(cfg.format_names(&registry).is_empty());

        let warnings = cfg.validate(&registry);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Warning);
        assert!(warnings[0].message.contains("formats is empty"));
    }

    #[test]
    fn unset_formats_not_written_on_save() {
        let dir = TempDir::new().unwrap();
        Config::default().save(dir.path()).unwrap();
        let data = std::fs::read_to_string(dir.path().join("rulegen.yaml")).unwrap();
        assert!(!data.contains("formats"));
        assert!(Config::load(dir.path()).unwrap().formats.is_none());
    }

    #[test]
    fn default_config_is_clean() {
        assert!(Config::default().validate(&default_formats()).is_empty());
    }
}
