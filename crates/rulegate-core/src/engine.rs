//! Long-lived resolution engine.
//!
//! The [`Engine`] owns the catalog and the active configuration snapshot.
//! Readers load the snapshot once per resolution, so a concurrent
//! [`Engine::reload`] is observed either entirely or not at all.

use crate::cache::ResolutionCache;
use crate::catalog::Catalog;
use crate::config::{load_config, ConfigError};
use crate::model::LintConfig;
use crate::pattern::PathMatcher;
use crate::resolve::{matching_overrides, resolve_with_overrides, EffectiveRuleSet};

use arc_swap::ArcSwap;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No catalog was supplied.
    #[error("engine requires a rule catalog")]
    MissingCatalog,

    /// The working directory could not be determined for a relative root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builder for configuring an [`Engine`].
#[derive(Debug)]
pub struct EngineBuilder {
    catalog: Option<Arc<Catalog>>,
    root: Option<PathBuf>,
    config: Option<LintConfig>,
    memoize: bool,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            catalog: None,
            root: None,
            config: None,
            memoize: true,
        }
    }
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Sets the project root that patterns are anchored to.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the initial configuration (default: catalog defaults only).
    #[must_use]
    pub fn config(mut self, config: LintConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether resolved rule sets are memoized (default: true).
    #[must_use]
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog was set or a relative root cannot be
    /// made absolute.
    pub fn build(self) -> Result<Engine, EngineError> {
        let catalog = self.catalog.ok_or(EngineError::MissingCatalog)?;

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let snapshot = Snapshot {
            version: 1,
            config: self.config.unwrap_or_default(),
            matcher: PathMatcher::new(&root),
        };

        info!(
            rules = catalog.len(),
            root = %root.display(),
            memoize = self.memoize,
            "engine ready"
        );

        Ok(Engine {
            catalog,
            root,
            current: ArcSwap::from_pointee(snapshot),
            cache: self.memoize.then(ResolutionCache::new),
        })
    }
}

/// One immutable configuration generation.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    config: LintConfig,
    matcher: PathMatcher,
}

impl Snapshot {
    /// Returns the generation number, starting at 1.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Returns the path matcher.
    #[must_use]
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }
}

/// Outcome of resolving one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileResolution {
    /// An exclude pattern covers the file; no rules run on it.
    Excluded,
    /// The file's effective rule set.
    Resolved(Arc<EffectiveRuleSet>),
}

impl FileResolution {
    /// Returns true if the file is excluded.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }

    /// Returns the rule set, if the file is analyzed.
    #[must_use]
    pub fn rule_set(&self) -> Option<&EffectiveRuleSet> {
        match self {
            Self::Excluded => None,
            Self::Resolved(set) => Some(set),
        }
    }
}

/// Resolves effective rule sets against a swappable configuration.
///
/// Use [`Engine::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Engine {
    catalog: Arc<Catalog>,
    root: PathBuf,
    current: ArcSwap<Snapshot>,
    cache: Option<ResolutionCache>,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the active snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Replaces the active configuration, returning the new version.
    ///
    /// `config` must have been validated against this engine's catalog.
    /// Concurrent reloads are applied one after another, each getting the
    /// next version.
    pub fn reload(&self, config: LintConfig) -> u64 {
        let matcher = PathMatcher::new(&self.root);
        let previous = self.current.rcu(|current| Snapshot {
            version: current.version + 1,
            config: config.clone(),
            matcher: matcher.clone(),
        });
        let version = previous.version + 1;
        if let Some(cache) = &self.cache {
            cache.purge_before(version);
        }
        info!(version, "configuration reloaded");
        version
    }

    /// Parses, validates and activates configuration text.
    ///
    /// On error the active configuration is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text does not parse or validate.
    pub fn reload_str(&self, content: &str) -> Result<u64, ConfigError> {
        let config = load_config(content, &self.catalog)?;
        Ok(self.reload(config))
    }

    /// Returns true if the active exclude patterns cover `file_path`.
    #[must_use]
    pub fn is_excluded(&self, file_path: &Path) -> bool {
        let snapshot = self.current.load();
        snapshot
            .matcher
            .is_excluded(file_path, snapshot.config.exclude())
    }

    /// Resolves one file against the active snapshot.
    #[must_use]
    pub fn resolve_file(&self, file_path: &Path) -> FileResolution {
        let snapshot = self.current.load_full();
        self.resolve_in(&snapshot, file_path)
    }

    /// Resolves many files in parallel against a single snapshot.
    ///
    /// Results are returned in input order.
    #[must_use]
    pub fn resolve_files<P>(&self, paths: &[P]) -> Vec<(PathBuf, FileResolution)>
    where
        P: AsRef<Path> + Sync,
    {
        let snapshot = self.current.load_full();
        let results: Vec<(PathBuf, FileResolution)> = paths
            .par_iter()
            .map(|p| {
                let path = p.as_ref();
                (path.to_path_buf(), self.resolve_in(&snapshot, path))
            })
            .collect();

        let excluded = results.iter().filter(|(_, r)| r.is_excluded()).count();
        info!(
            version = snapshot.version,
            files = results.len(),
            excluded,
            "resolved files"
        );
        results
    }

    fn resolve_in(&self, snapshot: &Snapshot, file_path: &Path) -> FileResolution {
        if snapshot
            .matcher
            .is_excluded(file_path, snapshot.config.exclude())
        {
            debug!(path = %file_path.display(), "excluded");
            return FileResolution::Excluded;
        }

        let matched = matching_overrides(file_path, &snapshot.config, &snapshot.matcher);
        let compute = || resolve_with_overrides(&snapshot.config, &self.catalog, &matched);
        let set = match &self.cache {
            Some(cache) => cache.get_or_compute(snapshot.version, &matched, compute),
            None => Arc::new(compute()),
        };
        FileResolution::Resolved(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleDef;

    fn catalog() -> Catalog {
        Catalog::builder()
            .rules([
                RuleDef::new("ANN101", "missing-type-self"),
                RuleDef::new("F401", "unused-import").enabled_by_default(),
                RuleDef::new("S101", "assert"),
            ])
            .build()
            .unwrap()
    }

    fn engine(config: &str) -> Engine {
        let catalog = catalog();
        let config = load_config(config, &catalog).unwrap();
        Engine::builder()
            .catalog(catalog)
            .root("/project")
            .config(config)
            .build()
            .unwrap()
    }

    #[test]
    fn build_requires_catalog() {
        let result = Engine::builder().root("/project").build();
        assert!(matches!(result, Err(EngineError::MissingCatalog)));
    }

    #[test]
    fn excluded_files_are_not_resolved() {
        let engine = engine("exclude = [\"tests\"]\n");
        assert!(engine.resolve_file(Path::new("tests/test_app.py")).is_excluded());
        assert!(engine.is_excluded(Path::new("tests/unit/foo.py")));

        let resolution = engine.resolve_file(Path::new("src/app.py"));
        assert!(resolution.rule_set().unwrap().is_enabled("F401"));
    }

    #[test]
    fn files_with_same_overrides_share_a_rule_set() {
        let engine = engine(
            r#"
[lint]
select = ["S101"]

[lint.per-file-ignores]
"tests/*" = ["S101"]
"#,
        );
        let a = engine.resolve_file(Path::new("src/a.py"));
        let b = engine.resolve_file(Path::new("src/b.py"));
        let t = engine.resolve_file(Path::new("tests/t.py"));

        match (&a, &b) {
            (FileResolution::Resolved(a), FileResolution::Resolved(b)) => {
                assert!(Arc::ptr_eq(a, b));
            }
            _ => panic!("expected resolved files"),
        }
        assert_ne!(a, t);
    }

    #[test]
    fn memoization_can_be_disabled() {
        let engine = Engine::builder()
            .catalog(catalog())
            .root("/project")
            .memoize(false)
            .build()
            .unwrap();
        let a = engine.resolve_file(Path::new("src/a.py"));
        let b = engine.resolve_file(Path::new("src/b.py"));
        assert_eq!(a, b);
    }

    #[test]
    fn reload_swaps_configuration() {
        let engine = engine("[lint]\nselect = [\"S101\"]\n");
        let before = engine.snapshot();
        assert!(engine
            .resolve_file(Path::new("src/app.py"))
            .rule_set()
            .unwrap()
            .is_enabled("S101"));

        let version = engine.reload_str("[lint]\nignore = [\"ALL\"]\n").unwrap();
        assert_eq!(version, 2);
        assert_eq!(engine.snapshot().version(), 2);
        assert_eq!(before.version(), 1);
        assert_eq!(
            engine
                .resolve_file(Path::new("src/app.py"))
                .rule_set()
                .unwrap()
                .enabled_count(),
            0
        );
    }

    #[test]
    fn failed_reload_keeps_active_configuration() {
        let engine = engine("[lint]\nselect = [\"S101\"]\n");
        let err = engine.reload_str("[lint]\nselect = [\"ZZZ999\"]\n");
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
        assert_eq!(engine.snapshot().version(), 1);
    }

    #[test]
    fn concurrent_reloads_get_distinct_ordered_versions() {
        let engine = engine("");
        let mut versions: Vec<u64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| engine.reload(LintConfig::new())))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        versions.sort_unstable();

        assert_eq!(versions, (2..=9).collect::<Vec<u64>>());
        assert_eq!(engine.snapshot().version(), 9);
    }

    #[test]
    fn stale_snapshot_does_not_repopulate_cache() {
        let engine = engine("");
        let old = engine.snapshot();
        engine.reload(LintConfig::new());

        let resolution = engine.resolve_in(&old, Path::new("src/app.py"));
        assert!(!resolution.is_excluded());
        assert!(engine.cache.as_ref().unwrap().is_empty());
    }

    #[test]
    fn extend_exclude_and_extend_select_apply() {
        let engine = engine(
            r#"
exclude = ["tests"]
extend-exclude = ["build"]

[lint]
ignore = ["ALL"]
extend-select = ["S101"]
"#,
        );
        assert!(engine.is_excluded(Path::new("build/lib/app.py")));
        assert!(engine.is_excluded(Path::new("tests/test_app.py")));

        let resolution = engine.resolve_file(Path::new("src/app.py"));
        let set = resolution.rule_set().unwrap();
        assert!(set.is_enabled("S101"));
        assert!(!set.is_enabled("F401"));
    }

    #[test]
    fn global_select_all_is_applied_before_ignores() {
        let engine = engine("[lint]\nignore = [\"ANN101\"]\nselect = [\"ALL\"]\n");
        let resolution = engine.resolve_file(Path::new("src/app.py"));
        let set = resolution.rule_set().unwrap();
        assert!(!set.is_enabled("ANN101"));
        assert!(set.is_enabled("S101"));
    }

    #[test]
    fn resolve_files_preserves_input_order() {
        let engine = engine("exclude = [\"sim\"]\n");
        let paths = ["src/a.py", "sim/run.py", "src/b.py"];
        let results = engine.resolve_files(&paths);

        let flags: Vec<(&str, bool)> = results
            .iter()
            .map(|(p, r)| (p.to_str().unwrap(), r.is_excluded()))
            .collect();
        assert_eq!(
            flags,
            [("src/a.py", false), ("sim/run.py", true), ("src/b.py", false)]
        );
    }
}
