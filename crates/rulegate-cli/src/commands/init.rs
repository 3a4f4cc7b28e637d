//! Init command implementation.

use anyhow::{bail, Context, Result};
use rulegate_catalog::Preset;
use std::path::{Path, PathBuf};

/// Runs the init command in the current directory.
pub fn run(preset: Preset, force: bool) -> Result<()> {
    let path = write_config(Path::new("."), preset, force)?;

    println!("Created {} ({preset} preset)", path.display());
    println!("\nNext steps:");
    println!("  1. Edit rulegate.toml to adjust rule selection");
    println!("  2. Run: rulegate validate");
    println!("  3. Run: rulegate resolve src");

    Ok(())
}

fn write_config(dir: &Path, preset: Preset, force: bool) -> Result<PathBuf> {
    let config_path = dir.join("rulegate.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, preset.config_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
