//! Render every rule document through every selected format, without writing.

use rulegen_core::config::SkillConfig;
use rulegen_core::formats::skill_manifest;
use rulegen_core::globs::globs_for_languages;
use rulegen_core::tags::TagCatalog;
use rulegen_core::{Format, RuleDocument, RuleError};
use std::path::{Path, PathBuf};

/// One file to be written.
#[derive(Debug)]
pub struct Artifact {
    pub format: &'static str,
    pub path: PathBuf,
    pub contents: String,
}

/// A rule (or skill manifest) a format refused.
#[derive(Debug)]
pub struct Failure {
    pub format: &'static str,
    pub subject: String,
    pub error: RuleError,
}

#[derive(Debug, Default)]
pub struct Plan {
    pub artifacts: Vec<Artifact>,
    pub failures: Vec<Failure>,
}

impl Plan {
    pub fn build(
        docs: &[RuleDocument],
        formats: &[&Format],
        out: &Path,
        skill: &SkillConfig,
        catalog: &TagCatalog,
    ) -> Self {
        let mut plan = Plan::default();

        for doc in docs {
            let unknown = catalog.unknown(&doc.tags);
            if !unknown.is_empty() {
                tracing::warn!(rule = %doc.name, tags = ?unknown, "rule has unknown tags");
            }
        }

        for format in formats {
            if let (Some(name), Some(path)) =
                (format.skill_name(), format.skill_manifest_path(out))
            {
                match skill_manifest(name, &skill.description, &skill.body) {
                    Ok(contents) => plan.artifacts.push(Artifact {
                        format: format.name,
                        path,
                        contents,
                    }),
                    Err(error) => plan.failures.push(Failure {
                        format: format.name,
                        subject: name.to_string(),
                        error,
                    }),
                }
            }

            for doc in docs {
                let globs = globs_for_languages(&doc.rule.languages);
                let rendered = format.output_path(out, &doc.name).and_then(|path| {
                    format
                        .generate(&doc.rule, &globs)
                        .map(|contents| (path, contents))
                });
                match rendered {
                    Ok((path, contents)) => {
                        tracing::debug!(format = format.name, rule = %doc.name, path = %path.display(), "rendered");
                        plan.artifacts.push(Artifact {
                            format: format.name,
                            path,
                            contents,
                        });
                    }
                    Err(error) => plan.failures.push(Failure {
                        format: format.name,
                        subject: doc.name.clone(),
                        error,
                    }),
                }
            }
        }

        plan
    }

    pub fn report_failures(&self) {
        for f in &self.failures {
            eprintln!("  failed: [{}] {}: {}", f.format, f.subject, f.error);
        }
    }
}
