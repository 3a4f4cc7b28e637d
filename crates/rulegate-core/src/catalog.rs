//! The immutable rule catalog.
//!
//! A [`Catalog`] is an indexed table of every rule the tool knows about,
//! sorted by code. It is built once through [`CatalogBuilder`] and shared
//! read-only afterwards.

use crate::code::{CodeError, RuleCode};
use crate::options::OptionSpec;

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::Range;

/// Reserved selector token; no category may use this name.
pub const ALL_SELECTOR: &str = "ALL";

/// Index of a rule within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(usize);

impl RuleId {
    /// Returns the position of the rule in catalog order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stability tier of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    /// Stable rule.
    #[default]
    Stable,
    /// Rule under evaluation; behavior may change.
    Preview,
    /// Rule scheduled for removal.
    Deprecated,
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Stable => "stable",
            Self::Preview => "preview",
            Self::Deprecated => "deprecated",
        })
    }
}

/// Metadata describing one rule.
#[derive(Debug, Clone)]
pub struct RuleMeta {
    code: RuleCode,
    name: &'static str,
    description: &'static str,
    default_enabled: bool,
    stability: Stability,
    options: Vec<&'static str>,
}

impl RuleMeta {
    /// Returns the rule code.
    #[must_use]
    pub fn code(&self) -> &RuleCode {
        &self.code
    }

    /// Returns the kebab-case rule name (e.g. `complex-structure`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Whether the rule is on when no declaration mentions it.
    #[must_use]
    pub fn default_enabled(&self) -> bool {
        self.default_enabled
    }

    /// Returns the stability tier.
    #[must_use]
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Returns the dotted option keys this rule depends on.
    #[must_use]
    pub fn options(&self) -> &[&'static str] {
        &self.options
    }
}

/// Declarative description of a rule, consumed by [`CatalogBuilder`].
#[derive(Debug, Clone)]
pub struct RuleDef {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    default_enabled: bool,
    stability: Stability,
    options: Vec<&'static str>,
}

impl RuleDef {
    /// Creates a stable, default-disabled rule definition.
    #[must_use]
    pub fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            description: "",
            default_enabled: false,
            stability: Stability::Stable,
            options: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Marks the rule as enabled by default.
    #[must_use]
    pub fn enabled_by_default(mut self) -> Self {
        self.default_enabled = true;
        self
    }

    /// Sets the stability tier.
    #[must_use]
    pub fn stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    /// Declares a dependency on an option (dotted key, e.g. `mccabe.max-complexity`).
    #[must_use]
    pub fn option(mut self, key: &'static str) -> Self {
        self.options.push(key);
        self
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A rule code failed to parse.
    #[error("invalid rule code: {0}")]
    InvalidCode(#[from] CodeError),

    /// The same code was registered twice.
    #[error("duplicate rule code `{0}`")]
    DuplicateCode(String),

    /// The same option key was registered twice.
    #[error("duplicate option `{0}`")]
    DuplicateOption(String),

    /// A rule depends on an option that was never registered.
    #[error("rule `{code}` depends on unknown option `{option}`")]
    UnknownOption {
        /// The rule declaring the dependency.
        code: String,
        /// The missing option key.
        option: String,
    },

    /// A rule uses the reserved `ALL` token as its category.
    #[error("rule `{0}` uses the reserved category `ALL`")]
    ReservedCategory(String),
}

/// Builder for a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    rules: Vec<RuleDef>,
    options: Vec<OptionSpec>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    #[must_use]
    pub fn rule(mut self, rule: RuleDef) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers multiple rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleDef>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Registers an option.
    #[must_use]
    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    /// Registers multiple options.
    #[must_use]
    pub fn options(mut self, specs: impl IntoIterator<Item = OptionSpec>) -> Self {
        self.options.extend(specs);
        self
    }

    /// Builds the catalog, sorting rules by code and building the indexes.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found (bad or duplicate codes,
    /// duplicate options, dangling option references).
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut options = BTreeMap::new();
        for spec in self.options {
            let key = spec.key();
            if options.contains_key(&key) {
                return Err(CatalogError::DuplicateOption(key));
            }
            options.insert(key, spec);
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for def in self.rules {
            let code = RuleCode::new(def.code)?;
            if code.category() == ALL_SELECTOR {
                return Err(CatalogError::ReservedCategory(def.code.to_string()));
            }
            if let Some(missing) = def.options.iter().find(|k| !options.contains_key(**k)) {
                return Err(CatalogError::UnknownOption {
                    code: def.code.to_string(),
                    option: (*missing).to_string(),
                });
            }
            rules.push(RuleMeta {
                code,
                name: def.name,
                description: def.description,
                default_enabled: def.default_enabled,
                stability: def.stability,
                options: def.options,
            });
        }
        rules.sort_by(|a, b| a.code.cmp(&b.code));

        let mut by_code = HashMap::with_capacity(rules.len());
        let mut categories: BTreeMap<String, Range<usize>> = BTreeMap::new();
        for (i, rule) in rules.iter().enumerate() {
            if by_code.insert(rule.code.clone(), RuleId(i)).is_some() {
                return Err(CatalogError::DuplicateCode(rule.code.to_string()));
            }
            categories
                .entry(rule.code.category().to_string())
                .and_modify(|range| range.end = i + 1)
                .or_insert(i..i + 1);
        }

        Ok(Catalog {
            rules,
            by_code,
            categories,
            options,
        })
    }
}

/// Immutable, sorted rule table with code and category indexes.
#[derive(Debug)]
pub struct Catalog {
    rules: Vec<RuleMeta>,
    by_code: HashMap<RuleCode, RuleId>,
    categories: BTreeMap<String, Range<usize>>,
    options: BTreeMap<String, OptionSpec>,
}

impl Catalog {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the catalog has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rule with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id belongs to a different catalog.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> &RuleMeta {
        &self.rules[id.0]
    }

    /// Iterates over all rules in code order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (RuleId, &RuleMeta)> {
        self.rules.iter().enumerate().map(|(i, r)| (RuleId(i), r))
    }

    /// Looks up a rule by code.
    #[must_use]
    pub fn lookup(&self, code: &RuleCode) -> Option<RuleId> {
        self.by_code.get(code).copied()
    }

    /// Looks up a rule by code text.
    #[must_use]
    pub fn lookup_str(&self, code: &str) -> Option<RuleId> {
        RuleCode::new(code).ok().and_then(|c| self.lookup(&c))
    }

    /// Returns the id range of a category, or `None` if it has no rules.
    #[must_use]
    pub fn category_range(&self, prefix: &str) -> Option<Range<usize>> {
        self.categories.get(prefix).cloned()
    }

    /// Returns the rules of a category in code order.
    #[must_use]
    pub fn category(&self, prefix: &str) -> &[RuleMeta] {
        self.categories
            .get(prefix)
            .map_or(&[], |range| &self.rules[range.clone()])
    }

    /// Iterates over category prefixes with their rule counts.
    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.categories
            .iter()
            .map(|(prefix, range)| (prefix.as_str(), range.len()))
    }

    /// Returns the option spec for a dotted key.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&OptionSpec> {
        self.options.get(key)
    }

    /// Returns true if the catalog knows the option section (e.g. `mccabe`).
    #[must_use]
    pub fn has_option_section(&self, section: &str) -> bool {
        self.options.values().any(|spec| spec.section() == section)
    }

    /// Iterates over all option specs in key order.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }

    pub(crate) fn id_range(range: Range<usize>) -> impl Iterator<Item = RuleId> {
        range.map(RuleId)
    }
}
