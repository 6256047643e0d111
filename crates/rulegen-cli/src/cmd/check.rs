use super::Workspace;
use crate::output::print_json;
use crate::plan::Plan;
use std::path::Path;

pub fn run(
    root: &Path,
    rules: Option<&Path>,
    formats: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let ws = Workspace::load(root, rules, formats)?;
    let selected = ws.registry.select(&ws.format_names)?;
    let out = root.join(&ws.config.output_dir);
    let plan = Plan::build(
        &ws.docs,
        &selected,
        &out,
        &ws.config.skill,
        &ws.config.known_tags,
    );

    if json {
        let failures: Vec<_> = plan
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "format": f.format,
                    "subject": f.subject,
                    "error": f.error.to_string(),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "rules": ws.docs.len(),
            "formats": ws.format_names,
            "failures": failures,
        }))?;
    } else if plan.failures.is_empty() {
        println!(
            "{} rule(s) valid for {} format(s).",
            ws.docs.len(),
            selected.len()
        );
    } else {
        plan.report_failures();
    }

    if !plan.failures.is_empty() {
        anyhow::bail!("{} rule(s) failed validation", plan.failures.len());
    }
    Ok(())
}
