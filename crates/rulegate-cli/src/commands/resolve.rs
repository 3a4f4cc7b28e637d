//! Resolve command implementation.

use anyhow::{Context, Result};
use rulegate_catalog::builtin_catalog;
use rulegate_core::Engine;
use std::path::{Path, PathBuf};

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Source file extensions considered for resolution.
const EXTENSIONS: &[&str] = &["py", "pyi"];

/// Runs the resolve command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    show_disabled: bool,
    source: &ConfigSource,
) -> Result<()> {
    let catalog = builtin_catalog().context("Failed to build rule catalog")?;
    let config = config_resolver::load(source, &catalog)?;

    let cwd = std::env::current_dir()?;
    let root = source.project_root(&cwd);

    let engine = Engine::builder()
        .catalog(catalog)
        .root(&root)
        .config(config)
        .build()
        .context("Failed to build engine")?;

    let files = discover_files(&cwd, paths)?;
    tracing::info!("Resolving {} file(s) under {}", files.len(), root.display());

    let results = engine.resolve_files(&files);
    let report = super::output::render(&results, engine.root(), format, show_disabled)?;
    print!("{report}");

    Ok(())
}

/// Walks `paths` (files or directories) honoring `.gitignore`.
///
/// Returns absolute, sorted, de-duplicated paths of source files.
fn discover_files(cwd: &Path, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let path = cwd.join(path);
        if path.is_file() {
            files.push(path);
            continue;
        }

        let mut builder = ignore::WalkBuilder::new(&path);
        builder.hidden(false).git_ignore(true);

        for entry in builder.build() {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            let file = entry.path();
            if !file.is_file() {
                continue;
            }
            let supported = file
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| EXTENSIONS.contains(&e));
            if supported {
                files.push(file.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
