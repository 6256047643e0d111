use crate::output::print_json;
use rulegen_core::format::Format;
use rulegen_core::formats::default_formats;
use serde::Serialize;

#[derive(Serialize)]
struct FormatRow {
    name: &'static str,
    display_name: &'static str,
    extension: &'static str,
    subpath: &'static str,
    skill_dir: Option<&'static str>,
    description_policy: &'static str,
}

impl FormatRow {
    const HEADERS: [&'static str; 5] = ["NAME", "TOOL", "EXT", "SUBPATH", "LONG DESCRIPTION"];

    fn from_format(f: &Format) -> Self {
        Self {
            name: f.format_name(),
            display_name: f.display_name,
            extension: f.file_extension(),
            subpath: f.output_subpath(),
            skill_dir: f.skill_dir,
            description_policy: f.description_policy.as_str(),
        }
    }

    fn cells(&self) -> [&'static str; 5] {
        [
            self.name,
            self.display_name,
            self.extension,
            self.subpath,
            self.description_policy,
        ]
    }
}

/// Column-aligned listing: header, dashed rule, one line per format.
fn format_table(rows: &[FormatRow]) -> String {
    let mut widths = FormatRow::HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.len());
        }
    }

    let line = |cells: [&str; 5]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = line(FormatRow::HEADERS);
    out.push('\n');
    out.push_str(&widths.map(|w| "-".repeat(w)).join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.cells()));
        out.push('\n');
    }
    out
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let rows: Vec<FormatRow> = default_formats()
        .iter()
        .map(FormatRow::from_format)
        .collect();

    if json {
        return print_json(&rows);
    }
    print!("{}", format_table(&rows));
    Ok(())
}
