//! List rules command implementation.

use anyhow::{bail, Context, Result};
use rulegate_catalog::{builtin_catalog, linter_for, Preset};
use rulegate_core::RuleMeta;

/// Runs the list-rules command.
pub fn run(category: Option<&str>) -> Result<()> {
    let catalog = builtin_catalog().context("Failed to build rule catalog")?;

    let rules: Vec<&RuleMeta> = match category {
        Some(prefix) => {
            let rules = catalog.category(prefix);
            if rules.is_empty() {
                bail!(
                    "Unknown category `{prefix}`. Run `rulegate list-rules` to see all categories."
                );
            }
            rules.iter().collect()
        }
        None => catalog.iter().map(|(_, rule)| rule).collect(),
    };

    println!("Available rules:\n");
    println!(
        "{:<8} {:<48} {:<11} {:<8} Description",
        "Code", "Name", "Stability", "Default"
    );
    println!("{}", "-".repeat(110));

    for rule in &rules {
        println!(
            "{:<8} {:<48} {:<11} {:<8} {}",
            rule.code(),
            rule.name(),
            rule.stability(),
            if rule.default_enabled() { "on" } else { "off" },
            rule.description()
        );
    }

    if category.is_some() {
        return Ok(());
    }

    println!("\nCategories:");
    for (prefix, count) in catalog.categories() {
        let linter = linter_for(prefix).map_or("", |l| l.name);
        println!("  {prefix:<5} {linter:<28} {count} rule(s)");
    }

    println!("\nOptions:");
    for spec in catalog.options() {
        let scope = if spec.is_overridable() { "" } else { " (global only)" };
        println!(
            "  {:<48} default {}{scope}",
            format!("[lint.{}] {}", spec.section(), spec.name()),
            spec.default_value()
        );
    }

    println!("\nPresets (rulegate init --preset <name>):");
    for preset in Preset::ALL {
        println!("  {preset}");
    }

    Ok(())
}
