//! Validate command implementation.

use anyhow::{Context, Result};
use rulegate_catalog::builtin_catalog;

use crate::config_resolver::{self, ConfigSource};

/// Runs the validate command.
///
/// Invalid configuration is returned as an error carrying every problem.
pub fn run(source: &ConfigSource) -> Result<()> {
    let catalog = builtin_catalog().context("Failed to build rule catalog")?;
    let config = config_resolver::load(source, &catalog)?;

    match source.path() {
        Some(path) => println!(
            "{}: OK ({} declaration(s), {} override block(s), {} exclude pattern(s))",
            path.display(),
            config.declarations().len(),
            config.overrides().len(),
            config.exclude().len()
        ),
        None => println!("No configuration file found; catalog defaults apply"),
    }
    Ok(())
}
