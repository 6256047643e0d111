//! The registered target formats.
//!
//! | name          | output subpath                              | over-length description |
//! |---------------|---------------------------------------------|-------------------------|
//! | `agentskills` | `.agents/skills/software-security/rules`    | truncated               |
//! | `opencode`    | `.opencode/skills/software-security/rules`  | rejected                |
//! | `cursor`      | `.cursor/rules`                             | truncated               |
//!
//! OpenCode discovers skills by scanning for `SKILL.md` in
//! `.opencode/skills/<skill-name>/`, where the directory name must equal the
//! manifest's `name`. Rule files live under the skill's `rules/` directory and
//! share the Agent Skills rule file shape.

use crate::error::Result;
use crate::format::{DescriptionPolicy, Format, Formats, RenderInput};
use crate::frontmatter::{rule_frontmatter, Frontmatter};
use crate::validate::{
    validate_description, validate_name, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH,
};

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// `.md` rule file: description, languages, alwaysApply. Globs are ignored.
pub fn render_rule_markdown(input: &RenderInput) -> Result<String> {
    let fm = rule_frontmatter(
        input.description,
        None,
        &input.rule.languages,
        input.rule.always_apply,
    )?;
    Ok(fm.render(&input.rule.content))
}

/// Cursor `.mdc` rule file: like the markdown rule file, plus `globs`.
pub fn render_cursor_rule(input: &RenderInput) -> Result<String> {
    let fm = rule_frontmatter(
        input.description,
        Some(input.globs),
        &input.rule.languages,
        input.rule.always_apply,
    )?;
    Ok(fm.render(&input.rule.content))
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

pub const AGENT_SKILLS: Format = Format {
    name: "agentskills",
    display_name: "Agent Skills",
    extension: ".md",
    subpath: ".agents/skills/software-security/rules",
    skill_dir: Some(".agents/skills/software-security"),
    name_max: NAME_MAX_LENGTH,
    description_max: DESCRIPTION_MAX_LENGTH,
    description_policy: DescriptionPolicy::Truncate,
    render: render_rule_markdown,
};

pub const OPENCODE: Format = Format {
    name: "opencode",
    display_name: "OpenCode",
    extension: ".md",
    subpath: ".opencode/skills/software-security/rules",
    skill_dir: Some(".opencode/skills/software-security"),
    name_max: NAME_MAX_LENGTH,
    description_max: DESCRIPTION_MAX_LENGTH,
    description_policy: DescriptionPolicy::Reject,
    render: render_rule_markdown,
};

pub const CURSOR: Format = Format {
    name: "cursor",
    display_name: "Cursor",
    extension: ".mdc",
    subpath: ".cursor/rules",
    skill_dir: None,
    name_max: NAME_MAX_LENGTH,
    description_max: DESCRIPTION_MAX_LENGTH,
    description_policy: DescriptionPolicy::Truncate,
    render: render_cursor_rule,
};

pub fn default_formats() -> Formats {
    Formats::new(vec![AGENT_SKILLS, OPENCODE, CURSOR])
}

// ---------------------------------------------------------------------------
// SKILL.md
// ---------------------------------------------------------------------------

/// Render a skill manifest. The skill's directory must be named `name`.
pub fn skill_manifest(name: &str, description: &str, body: &str) -> Result<String> {
    let name = validate_name(name)?;
    let description = validate_description(description, DESCRIPTION_MAX_LENGTH)?;
    let fm = Frontmatter::new()
        .scalar("name", name)?
        .scalar("description", description)?;
    Ok(fm.render(body))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleErrorKind;
    use crate::paths;
    use crate::rule::Rule;
    use std::path::{Path, PathBuf};

    fn sql_rule() -> Rule {
        Rule::new("Use parameterized queries", "# SQL\n\nBind every value.\n")
            .with_languages(["python", "go"])
    }

    #[test]
    fn agentskills_rule_file() {
        let out = AGENT_SKILLS.generate(&sql_rule(), "**/*.py").unwrap();
        assert_eq!(
            out,
            "---\ndescription: Use parameterized queries\nlanguages:\n  - python\n  - go\nalwaysApply: false\n---\n\n# SQL\n\nBind every value.\n"
        );
    }

    #[test]
    fn opencode_shares_agentskills_rendering() {
        let rule = sql_rule().always_apply(true);
        assert_eq!(
            OPENCODE.generate(&rule, "ignored").unwrap(),
            AGENT_SKILLS.generate(&rule, "").unwrap()
        );
    }

    #[test]
    fn generate_is_deterministic() {
        let rule = sql_rule();
        for format in default_formats().iter() {
            assert_eq!(
                format.generate(&rule, "**/*.go").unwrap(),
                format.generate(&rule, "**/*.go").unwrap(),
                "{} output differs between calls",
                format.name
            );
        }
    }

    #[test]
    fn always_apply_literals() {
        let on = AGENT_SKILLS.generate(&sql_rule().always_apply(true), "").unwrap();
        let off = AGENT_SKILLS.generate(&sql_rule(), "").unwrap();
        assert!(on.contains("\nalwaysApply: true\n"));
        assert!(off.contains("\nalwaysApply: false\n"));
    }

    #[test]
    fn no_languages_field_when_empty() {
        let rule = Rule::new("Rotate secrets", "body");
        for format in default_formats().iter() {
            let out = format.generate(&rule, "").unwrap();
            assert!(!out.contains("languages"), "{}: {out}", format.name);
        }
    }

    #[test]
    fn over_length_description_policies() {
        let original: String = "abcdefghij".repeat(103).chars().take(1027).collect();
        let rule = Rule::new(original.clone(), "body");

        let err = OPENCODE.generate(&rule, "").unwrap_err();
        assert_eq!(err.kind(), RuleErrorKind::DescriptionTooLong);

        let out = AGENT_SKILLS.generate(&rule, "").unwrap();
        let line = out
            .lines()
            .find_map(|l| l.strip_prefix("description: "))
            .unwrap();
        assert_eq!(line.chars().count(), 1024);
        assert!(line.ends_with("..."));
        assert_eq!(&line[..1021], &original[..1021]);
    }

    #[test]
    fn empty_description_fails_for_every_format() {
        let rule = Rule::new("   ", "body");
        for format in default_formats().iter() {
            let err = format.generate(&rule, "").unwrap_err();
            assert_eq!(err.kind(), RuleErrorKind::EmptyDescription);
        }
    }

    #[test]
    fn cursor_embeds_globs_only_when_present() {
        let with = CURSOR.generate(&sql_rule(), "**/*.py, **/*.go").unwrap();
        let globs_line = with.lines().find(|l| l.starts_with("globs: ")).unwrap();
        assert!(globs_line.contains("**/*.py, **/*.go"));

        let without = CURSOR.generate(&sql_rule(), "").unwrap();
        assert!(!without.contains("globs"));

        let md = AGENT_SKILLS.generate(&sql_rule(), "**/*.py").unwrap();
        assert!(!md.contains("globs"));
    }

    #[test]
    fn subpaths_are_distinct_relative_and_non_empty() {
        let formats = default_formats();
        let subpaths: Vec<_> = formats.iter().map(|f| f.output_subpath()).collect();
        for (i, a) in subpaths.iter().enumerate() {
            assert!(!a.is_empty());
            assert!(Path::new(a).is_relative());
            for b in &subpaths[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn skill_dirs_follow_discovery_convention() {
        let root = Path::new("/proj");
        assert_eq!(OPENCODE.skill_name(), Some(paths::DEFAULT_SKILL_NAME));
        assert_eq!(
            OPENCODE.skill_manifest_path(root).unwrap(),
            PathBuf::from("/proj/.opencode/skills/software-security/SKILL.md")
        );
        assert_eq!(
            OPENCODE.output_path(root, "xss").unwrap(),
            PathBuf::from("/proj/.opencode/skills/software-security/rules/xss.md")
        );
        for format in [AGENT_SKILLS, OPENCODE] {
            let dir = format.skill_dir.unwrap();
            assert!(format.subpath.starts_with(dir));
            assert_eq!(format.subpath, format!("{dir}/rules"));
        }
    }

    #[test]
    fn registry_lookup() {
        let formats = default_formats();
        assert_eq!(formats.names(), vec!["agentskills", "opencode", "cursor"]);
        assert_eq!(formats.get("cursor").unwrap().file_extension(), ".mdc");
        assert!(formats.get("windsurf").is_none());
    }

    #[test]
    fn skill_manifest_layout() {
        let out = skill_manifest("software-security", "Secure coding rules", "# Rules\n").unwrap();
        assert_eq!(
            out,
            "---\nname: software-security\ndescription: Secure coding rules\n---\n\n# Rules\n"
        );
    }

    #[test]
    fn skill_manifest_validates() {
        assert_eq!(
            skill_manifest("Bad", "d", "").unwrap_err().kind(),
            RuleErrorKind::InvalidNameFormat
        );
        assert_eq!(
            skill_manifest("ok", &"x".repeat(1025), "").unwrap_err().kind(),
            RuleErrorKind::DescriptionTooLong
        );
    }
}
