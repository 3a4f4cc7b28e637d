//! # rulegate-catalog
//!
//! Built-in rule catalog for rulegate.
//!
//! The catalog covers representative Python lint rules and the options they
//! read. Rules are grouped into categories by code prefix:
//!
//! | Prefix | Linter | Options |
//! |--------|--------|---------|
//! | ANN | flake8-annotations | `[lint.flake8-annotations]` |
//! | B | flake8-bugbear | |
//! | C | mccabe | `[lint.mccabe]` |
//! | COM | flake8-commas | |
//! | D | pydocstyle | |
//! | E / W | pycodestyle | `[lint.pycodestyle]` |
//! | F | pyflakes | |
//! | I | isort | |
//! | ISC | flake8-implicit-str-concat | |
//! | N | pep8-naming | |
//! | PT | flake8-pytest-style | `[lint.flake8-pytest-style]` |
//! | S | flake8-bandit | |
//! | UP | pyupgrade | `[lint.pyupgrade]` |
//!
//! ## Usage
//!
//! ```ignore
//! use rulegate_catalog::builtin_catalog;
//! use rulegate_core::load_config;
//!
//! let catalog = builtin_catalog()?;
//! let config = load_config(&text, &catalog)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod linters;
mod options;
mod presets;
mod rules;

pub use linters::{linter_for, linters, Linter};
pub use options::option_specs;
pub use presets::Preset;
pub use rules::rule_defs;

/// Re-export core types for convenience.
pub use rulegate_core::{Catalog, CatalogError, RuleMeta, Stability};

use tracing::debug;

/// Builds the built-in catalog.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the built-in table is inconsistent.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let catalog = Catalog::builder()
        .options(option_specs())
        .rules(rule_defs())
        .build()?;
    debug!(
        rules = catalog.len(),
        options = catalog.options().count(),
        "built-in catalog ready"
    );
    Ok(catalog)
}
