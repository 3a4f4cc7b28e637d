//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/rulegate.toml` or `.rulegate.toml`
//! 3. `~/.rulegate/config.toml` (global fallback)
//! 4. No config found → catalog defaults

use anyhow::{Context, Result};
use rulegate_core::{Catalog, ConfigFile, LintConfig};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.rulegate/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }

    /// Returns the directory patterns are anchored to.
    ///
    /// Project and explicit configs anchor at their own directory; global
    /// and default configs anchor at `fallback`.
    #[must_use]
    pub fn project_root(&self, fallback: &Path) -> PathBuf {
        match self {
            Self::Explicit(p) | Self::Project(p) => match p.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => fallback.join(dir),
                _ => fallback.to_path_buf(),
            },
            Self::Global(_) | Self::Default => fallback.to_path_buf(),
        }
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["rulegate.toml", ".rulegate.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Resolution with the global directory injected, so tests need no env vars.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let project = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists());
    if let Some(path) = project {
        tracing::debug!("Found project config: {}", path.display());
        return ConfigSource::Project(path);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(path) if path.exists() => {
            tracing::debug!("Found global config: {}", path.display());
            ConfigSource::Global(path)
        }
        _ => ConfigSource::Default,
    }
}

/// Returns the global config directory path.
///
/// Resolution: `$RULEGATE_CONFIG_DIR` > `~/.rulegate/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("RULEGATE_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".rulegate"))
}

/// Reads and validates the configuration named by `source`.
///
/// Validation failures surface as [`rulegate_core::ValidationErrors`]
/// inside the returned error.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load(source: &ConfigSource, catalog: &Catalog) -> Result<LintConfig> {
    let Some(path) = source.path() else {
        tracing::debug!("No configuration file found, using catalog defaults");
        return Ok(LintConfig::new());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }

    let file = ConfigFile::from_file(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    let config = file
        .validate(catalog)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegate_core::{RuleDef, ValidationErrors};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_without_existence_check() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("rulegate.toml"), "").unwrap();

        let explicit = Path::new("/nonexistent/lint.toml");
        let result = resolve_inner(tmp.path(), Some(explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit.to_path_buf()));
    }

    #[test]
    fn project_names_are_checked_in_order() {
        for present in [&["rulegate.toml", ".rulegate.toml"][..], &[".rulegate.toml"][..]] {
            let tmp = TempDir::new().unwrap();
            for name in present {
                fs::write(tmp.path().join(name), "").unwrap();
            }
            let result = resolve_inner(tmp.path(), None, None);
            assert_eq!(result, ConfigSource::Project(tmp.path().join(present[0])));
        }
    }

    #[test]
    fn global_config_is_the_last_resort() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let global_dir = Some(global.path().to_path_buf());

        assert_eq!(
            resolve_inner(project.path(), None, global_dir.clone()),
            ConfigSource::Default
        );

        fs::write(global.path().join("config.toml"), "").unwrap();
        let result = resolve_inner(project.path(), None, global_dir);
        assert!(result.is_global());
        assert_eq!(result.path(), Some(global.path().join("config.toml").as_path()));
    }

    #[test]
    fn project_root_follows_config_location() {
        let cwd = Path::new("/work");
        assert_eq!(
            ConfigSource::Project(PathBuf::from("/repo/rulegate.toml")).project_root(cwd),
            PathBuf::from("/repo")
        );
        assert_eq!(
            ConfigSource::Explicit(PathBuf::from("rulegate.toml")).project_root(cwd),
            PathBuf::from("/work")
        );
        assert_eq!(
            ConfigSource::Explicit(PathBuf::from("cfg/lint.toml")).project_root(cwd),
            PathBuf::from("/work/cfg")
        );
        assert_eq!(
            ConfigSource::Global(PathBuf::from("/home/u/.rulegate/config.toml")).project_root(cwd),
            PathBuf::from("/work")
        );
    }

    #[test]
    fn load_validates_against_catalog() {
        let catalog = Catalog::builder()
            .rule(RuleDef::new("S101", "assert"))
            .build()
            .unwrap();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rulegate.toml");

        fs::write(&path, "[lint]\nignore = [\"S101\"]\n").unwrap();
        let config = load(&ConfigSource::Project(path.clone()), &catalog).unwrap();
        assert_eq!(config.declarations().len(), 1);

        fs::write(&path, "[lint]\nselect = [\"ZZZ999\"]\n").unwrap();
        let err = load(&ConfigSource::Project(path), &catalog).unwrap_err();
        assert!(err.downcast_ref::<ValidationErrors>().is_some());
    }

    #[test]
    fn misshapen_keys_are_reported_as_validation_errors() {
        let catalog = Catalog::builder()
            .rule(RuleDef::new("S101", "assert"))
            .build()
            .unwrap();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rulegate.toml");
        fs::write(&path, "exclude = \"tests\"\n[lint]\nselect = [\"ZZZ999\"]\n").unwrap();

        let err = load(&ConfigSource::Project(path), &catalog).unwrap_err();
        let errors = err.downcast_ref::<ValidationErrors>().unwrap();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn load_default_uses_catalog_defaults() {
        let catalog = Catalog::builder().build().unwrap();
        let config = load(&ConfigSource::Default, &catalog).unwrap();
        assert_eq!(config, LintConfig::new());
    }
}
