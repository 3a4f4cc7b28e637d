//! Shared output formatting for resolution results.

use anyhow::Result;
use rulegate_core::{FileResolution, RuleEntry};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<Vec<&'a RuleEntry>>,
}

/// Renders resolution results in the specified format.
///
/// Paths are shown relative to `root` where possible.
pub fn render(
    results: &[(PathBuf, FileResolution)],
    root: &Path,
    format: OutputFormat,
    show_disabled: bool,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(results, root, show_disabled),
        OutputFormat::Json => render_json(results, root, show_disabled)?,
        OutputFormat::Compact => render_compact(results, root),
    })
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn visible<'a>(
    resolution: &'a FileResolution,
    show_disabled: bool,
) -> Option<impl Iterator<Item = &'a RuleEntry>> {
    resolution.rule_set().map(move |set| {
        set.entries()
            .iter()
            .filter(move |e| show_disabled || e.is_enabled())
    })
}

fn render_text(results: &[(PathBuf, FileResolution)], root: &Path, show_disabled: bool) -> String {
    let mut out = String::new();
    let mut excluded = 0;

    for (path, resolution) in results {
        let shown = display_path(path, root);
        let Some(set) = resolution.rule_set() else {
            excluded += 1;
            let _ = writeln!(out, "{shown}: excluded");
            continue;
        };

        let _ = writeln!(
            out,
            "{shown}: {}/{} rules enabled",
            set.enabled_count(),
            set.len()
        );
        for entry in visible(resolution, show_disabled).into_iter().flatten() {
            let state = if entry.is_enabled() { "on " } else { "off" };
            let _ = write!(out, "  {state} {}", entry.code());
            for (key, value) in entry.options().iter() {
                let _ = write!(out, " {key}={value}");
            }
            out.push('\n');
        }
    }

    let _ = writeln!(
        out,
        "Resolved {} file(s), {} excluded",
        results.len() - excluded,
        excluded
    );
    out
}

fn render_json(
    results: &[(PathBuf, FileResolution)],
    root: &Path,
    show_disabled: bool,
) -> Result<String> {
    let reports: Vec<FileReport<'_>> = results
        .iter()
        .map(|(path, resolution)| FileReport {
            path: display_path(path, root),
            excluded: resolution.is_excluded(),
            rules: visible(resolution, show_disabled).map(Iterator::collect),
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&reports)?;
    json.push('\n');
    Ok(json)
}

fn render_compact(results: &[(PathBuf, FileResolution)], root: &Path) -> String {
    let mut out = String::new();
    for (path, resolution) in results {
        let shown = display_path(path, root);
        match resolution.rule_set() {
            None => {
                let _ = writeln!(out, "{shown}: excluded");
            }
            Some(set) => {
                let codes: Vec<&str> = set.enabled_codes().map(|c| c.as_str()).collect();
                let _ = writeln!(out, "{shown}: {}", codes.join(","));
            }
        }
    }
    out
}
