//! Validated configuration model.
//!
//! Everything here has already passed validation against a catalog: selectors
//! name existing rules, patterns compiled, option values type-checked. The
//! types are immutable once built.

use crate::options::OptionTable;
use crate::pattern::PathPattern;
use crate::selector::Selector;

use serde::Serialize;
use std::fmt;

/// Whether a declaration turns rules on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Enable the selected rules.
    Select,
    /// Disable the selected rules.
    Ignore,
}

impl Polarity {
    /// Returns the enabled flag this polarity writes.
    #[must_use]
    pub fn enables(self) -> bool {
        matches!(self, Self::Select)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Ignore => write!(f, "ignore"),
        }
    }
}

/// A selector with a polarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    selector: Selector,
    polarity: Polarity,
}

impl Declaration {
    /// Creates a declaration.
    #[must_use]
    pub fn new(selector: Selector, polarity: Polarity) -> Self {
        Self { selector, polarity }
    }

    /// Shorthand for a `Select` declaration.
    #[must_use]
    pub fn select(selector: Selector) -> Self {
        Self::new(selector, Polarity::Select)
    }

    /// Shorthand for an `Ignore` declaration.
    #[must_use]
    pub fn ignore(selector: Selector) -> Self {
        Self::new(selector, Polarity::Ignore)
    }

    /// Returns the selector.
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Returns the polarity.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns `true` for `select = ["ALL"]`.
    #[must_use]
    pub fn selects_all(&self) -> bool {
        self.polarity == Polarity::Select && self.selector == Selector::All
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity, self.selector)
    }
}

/// Path-scoped declarations and options layered over the global config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideBlock {
    source: String,
    pattern: PathPattern,
    declarations: Vec<Declaration>,
    options: OptionTable,
}

impl OverrideBlock {
    /// Creates an override block.
    ///
    /// `source` names where the block was declared (e.g. `lint.overrides[0]`).
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        pattern: PathPattern,
        declarations: Vec<Declaration>,
        options: OptionTable,
    ) -> Self {
        Self {
            source: source.into(),
            pattern,
            declarations,
            options,
        }
    }

    /// Returns the configuration key the block came from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the file pattern.
    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Returns the declarations in configuration order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Returns the option values set by this block.
    #[must_use]
    pub fn options(&self) -> &OptionTable {
        &self.options
    }
}

/// A validated configuration.
///
/// This is the aggregate root consumed by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintConfig {
    target_version: Option<String>,
    exclude: Vec<PathPattern>,
    declarations: Vec<Declaration>,
    options: OptionTable,
    overrides: Vec<OverrideBlock>,
}

impl LintConfig {
    /// Creates an empty configuration: catalog defaults only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target version hint.
    #[must_use]
    pub fn with_target_version(mut self, version: impl Into<String>) -> Self {
        self.target_version = Some(version.into());
        self
    }

    /// Adds an exclude pattern.
    #[must_use]
    pub fn with_exclude(mut self, pattern: PathPattern) -> Self {
        self.exclude.push(pattern);
        self
    }

    /// Appends a global declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Sets the global option table.
    #[must_use]
    pub fn with_options(mut self, options: OptionTable) -> Self {
        self.options = options;
        self
    }

    /// Appends an override block.
    #[must_use]
    pub fn with_override(mut self, block: OverrideBlock) -> Self {
        self.overrides.push(block);
        self
    }

    /// Returns the target version hint, if any.
    #[must_use]
    pub fn target_version(&self) -> Option<&str> {
        self.target_version.as_deref()
    }

    /// Returns the exclude patterns.
    #[must_use]
    pub fn exclude(&self) -> &[PathPattern] {
        &self.exclude
    }

    /// Returns the global declarations in configuration order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Returns the global option values.
    #[must_use]
    pub fn options(&self) -> &OptionTable {
        &self.options
    }

    /// Returns the override blocks in configuration order.
    #[must_use]
    pub fn overrides(&self) -> &[OverrideBlock] {
        &self.overrides
    }
}
