use super::Workspace;
use crate::output::{print_json, status_line, WriteStatus};
use crate::plan::Plan;
use anyhow::Context;
use rulegen_core::io;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Written {
    format: &'static str,
    path: String,
    status: WriteStatus,
}

pub fn run(
    root: &Path,
    rules: Option<&Path>,
    out: Option<&Path>,
    formats: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let ws = Workspace::load(root, rules, formats)?;
    let selected = ws.registry.select(&ws.format_names)?;
    let out = match out {
        Some(dir) => root.join(dir),
        None => root.join(&ws.config.output_dir),
    };

    for warning in ws.config.validate(&ws.registry) {
        tracing::warn!("config: {}", warning.message);
    }

    let plan = Plan::build(
        &ws.docs,
        &selected,
        &out,
        &ws.config.skill,
        &ws.config.known_tags,
    );
    if !plan.failures.is_empty() {
        plan.report_failures();
        anyhow::bail!(
            "{} rule(s) failed validation; nothing written",
            plan.failures.len()
        );
    }

    let mut written = Vec::with_capacity(plan.artifacts.len());
    for artifact in &plan.artifacts {
        let existed = artifact.path.exists();
        let status = if !io::differs(&artifact.path, artifact.contents.as_bytes()) {
            WriteStatus::Unchanged
        } else {
            io::atomic_write(&artifact.path, artifact.contents.as_bytes())
                .with_context(|| format!("failed to write {}", artifact.path.display()))?;
            if existed {
                WriteStatus::Updated
            } else {
                WriteStatus::Created
            }
        };
        let shown = artifact
            .path
            .strip_prefix(&out)
            .unwrap_or(&artifact.path)
            .display()
            .to_string();
        tracing::debug!(
            format = artifact.format,
            path = %shown,
            status = status.as_str(),
            "wrote"
        );
        if !json {
            println!("{}", status_line(status, &artifact.path, &out));
        }
        written.push(Written {
            format: artifact.format,
            path: shown,
            status,
        });
    }

    if json {
        print_json(&written)?;
    }
    Ok(())
}
