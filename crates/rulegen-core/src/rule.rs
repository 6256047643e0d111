//! The canonical rule model and the loader for source rule documents.

use crate::error::{Result, RuleError};
use crate::frontmatter::FENCE;
use crate::validate::validate_name;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One security rule, already parsed. Formats only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub description: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub always_apply: bool,
    pub content: String,
}

impl Rule {
    pub fn new(description: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            languages: Vec::new(),
            always_apply: false,
            content: content.into(),
        }
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn always_apply(mut self, always_apply: bool) -> Self {
        self.always_apply = always_apply;
        self
    }
}

// ---------------------------------------------------------------------------
// RuleDocument
// ---------------------------------------------------------------------------

/// A rule as loaded from disk: its identifier, the rule itself, and its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDocument {
    pub name: String,
    pub rule: Rule,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceMeta {
    description: String,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    always_apply: bool,
    #[serde(default)]
    tags: Vec<String>,
}

impl RuleDocument {
    /// Parse a source document. `name` is validated as an identifier.
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        let name = validate_name(name)?;
        let (fm, body) = split_frontmatter(source)
            .ok_or_else(|| RuleError::MissingFrontmatter(name.to_string()))?;
        let meta: SourceMeta = serde_yaml::from_str(fm)?;
        Ok(Self {
            name: name.to_string(),
            rule: Rule {
                description: meta.description,
                languages: meta.languages,
                always_apply: meta.always_apply,
                content: body.to_string(),
            },
            tags: meta.tags,
        })
    }

    /// Load a document from a `<name>.md` file; the file stem is the rule name.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = std::fs::read_to_string(path)?;
        Self::parse(&name, &source)
    }

    /// Load every `*.md` document in `dir`, sorted by file name.
    pub fn load_dir(dir: &Path) -> Result<Vec<Self>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "md") {
                paths.push(path);
            }
        }
        paths.sort();
        paths.iter().map(|p| Self::load(p)).collect()
    }
}

// ---------------------------------------------------------------------------
// Frontmatter splitting
// ---------------------------------------------------------------------------

/// Split `content` into the YAML between the opening `---` line and the next
/// line that is exactly `---`, and the body that follows, with leading blank
/// lines removed from the body.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))?;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let bare = line.strip_suffix('\n').unwrap_or(line);
        let bare = bare.strip_suffix('\r').unwrap_or(bare);
        if bare == FENCE {
            let body = &rest[offset + line.len()..];
            return Some((&rest[..offset], body.trim_start_matches(['\r', '\n'])));
        }
        offset += line.len();
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleErrorKind;
    use tempfile::TempDir;

    const SQL_RULE: &str = "---\ndescription: Use parameterized queries\nlanguages:\n  - python\n  - go\nalwaysApply: false\ntags:\n  - web\n---\n\n# SQL Injection\n\nNever concatenate input.\n";

    #[test]
    fn parse_full_document() {
        let doc = RuleDocument::parse("sql-injection", SQL_RULE).unwrap();
        assert_eq!(doc.name, "sql-injection");
        assert_eq!(doc.rule.description, "Use parameterized queries");
        assert_eq!(doc.rule.languages, vec!["python", "go"]);
        assert!(!doc.rule.always_apply);
        assert_eq!(doc.tags, vec!["web"]);
        assert_eq!(
            doc.rule.content,
            "# SQL Injection\n\nNever concatenate input.\n"
        );
    }

    #[test]
    fn optional_fields_default() {
        let doc = RuleDocument::parse("secrets", "---\ndescription: No secrets\n---\nbody\n").unwrap();
        assert!(doc.rule.languages.is_empty());
        assert!(!doc.rule.always_apply);
        assert!(doc.tags.is_empty());
        assert_eq!(doc.rule.content, "body\n");
    }

    #[test]
    fn crlf_frontmatter() {
        let src = "---\r\ndescription: Windows\r\nalwaysApply: true\r\n---\r\nbody";
        let doc = RuleDocument::parse("crlf", src).unwrap();
        assert_eq!(doc.rule.description, "Windows");
        assert!(doc.rule.always_apply);
        assert_eq!(doc.rule.content, "body");
    }

    #[test]
    fn missing_frontmatter_is_an_error() {
        let err = RuleDocument::parse("plain", "# Just markdown\n").unwrap_err();
        assert_eq!(err.kind(), RuleErrorKind::MissingFrontmatter);
    }

    #[test]
    fn closing_fence_must_be_a_whole_line() {
        let (fm, body) = split_frontmatter("---\na: 1\n---- x\n---\nbody").unwrap();
        assert_eq!(fm, "a: 1\n---- x\n");
        assert_eq!(body, "body");

        let (fm, body) = split_frontmatter("---\na: 1\n---\r\n\r\nbody").unwrap();
        assert_eq!(fm, "a: 1\n");
        assert_eq!(body, "body");

        assert!(split_frontmatter("---\na: 1\n---foo\nbody\n").is_none());
    }

    #[test]
    fn empty_frontmatter_and_fence_at_eof() {
        assert_eq!(split_frontmatter("---\n---\nbody"), Some(("", "body")));
        assert_eq!(split_frontmatter("---\na: 1\n---"), Some(("a: 1\n", "")));
    }

    #[test]
    fn dash_runs_inside_header_are_not_fences() {
        // `----` stays in the header, which then fails to parse instead of
        // being cut short.
        let err = RuleDocument::parse("dashes", "---\ndescription: d\n----\n---\nbody\n")
            .unwrap_err();
        assert_eq!(err.kind(), RuleErrorKind::Yaml);

        let err = RuleDocument::parse("trailing", "---\ndescription: d\n---foo\nbody\n")
            .unwrap_err();
        assert_eq!(err.kind(), RuleErrorKind::MissingFrontmatter);
    }

    #[test]
    fn missing_description_is_a_yaml_error() {
        let err = RuleDocument::parse("nodesc", "---\nlanguages: [go]\n---\nbody\n").unwrap_err();
        assert_eq!(err.kind(), RuleErrorKind::Yaml);
    }

    #[test]
    fn invalid_name_rejected_before_parsing() {
        let err = RuleDocument::parse("Bad_Name", SQL_RULE).unwrap_err();
        assert_eq!(err.kind(), RuleErrorKind::InvalidNameFormat);
    }

    #[test]
    fn load_dir_sorts_and_skips_non_markdown() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("xss.md"), SQL_RULE).unwrap();
        std::fs::write(dir.path().join("csrf.md"), SQL_RULE).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.md")).unwrap();

        let docs = RuleDocument::load_dir(dir.path()).unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["csrf", "xss"]);
    }

    #[test]
    fn builder_sets_fields() {
        let rule = Rule::new("d", "c")
            .with_languages(["rust"])
            .always_apply(true);
        assert_eq!(rule.languages, vec!["rust"]);
        assert!(rule.always_apply);
    }
}
