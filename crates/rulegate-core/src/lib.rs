//! # rulegate-core
//!
//! Rule-selection resolution for lint configurations.
//!
//! Given a catalog of rules and a declarative `select`/`ignore`/override
//! configuration, this crate computes the concrete set of active rules (and
//! their option values) for each analyzed file. It includes:
//!
//! - [`Catalog`] for the immutable, indexed rule table
//! - [`Selector`] and [`expand`] for `ALL` / category / code tokens
//! - [`PathPattern`] and [`PathMatcher`] for exclusions and overrides
//! - [`ConfigFile`] and [`ValidationErrors`] for loading and checking config
//! - [`resolve`] and [`EffectiveRuleSet`] for per-file resolution
//! - [`Engine`] for memoized, reloadable, parallel resolution
//!
//! ## Example
//!
//! ```ignore
//! use rulegate_core::{load_config, Engine};
//!
//! let config = load_config(&std::fs::read_to_string("rulegate.toml")?, &catalog)?;
//! let engine = Engine::builder()
//!     .catalog(catalog)
//!     .root(".")
//!     .config(config)
//!     .build()?;
//!
//! if let Some(rules) = engine.resolve_file("src/app.py".as_ref()).rule_set() {
//!     println!("{} rules enabled", rules.enabled_count());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod catalog;
mod code;
mod config;
mod engine;
mod model;
mod options;
mod pattern;
mod resolve;
mod selector;
mod validate;

pub use cache::ResolutionCache;
pub use catalog::{
    Catalog, CatalogBuilder, CatalogError, RuleDef, RuleId, RuleMeta, Stability, ALL_SELECTOR,
};
pub use code::{Category, CodeError, RuleCode};
pub use config::{load_config, ConfigError, ConfigFile};
pub use engine::{Engine, EngineBuilder, EngineError, FileResolution, Snapshot};
pub use model::{Declaration, LintConfig, OverrideBlock, Polarity};
pub use options::{bind, BoundOptions, OptionKind, OptionSpec, OptionTable, OptionValue};
pub use pattern::{PathMatcher, PathPattern, PatternError};
pub use resolve::{
    matching_overrides, resolve, resolve_with_overrides, EffectiveRuleSet, RuleEntry,
};
pub use selector::{expand, expand_codes, Selector, UnknownCode};
pub use validate::{validate, ValidationError, ValidationErrors};
