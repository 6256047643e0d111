use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "rulegen.yaml";
pub const DEFAULT_RULES_DIR: &str = "rules";
pub const DEFAULT_SKILL_NAME: &str = "software-security";

pub const SKILL_MD: &str = "SKILL.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn rules_dir(root: &Path, rules_dir: &str) -> PathBuf {
    root.join(rules_dir)
}
