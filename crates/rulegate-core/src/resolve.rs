//! Per-file rule resolution.
//!
//! Resolution starts from the catalog defaults, or from every rule enabled
//! when the global declarations include `select = ["ALL"]`. It then writes
//! each declaration's polarity into every code its selector expands to: first
//! the remaining global declarations, then those of each matching override
//! block, all in configuration order. A later write for a code always wins,
//! whatever the breadth of the selectors involved.

use crate::catalog::{Catalog, RuleId};
use crate::code::RuleCode;
use crate::model::{Declaration, LintConfig};
use crate::options::{bind, BoundOptions, OptionTable};
use crate::pattern::PathMatcher;
use crate::selector::expand;

use serde::Serialize;
use std::path::Path;
use tracing::{debug, trace};

/// Resolved state of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    code: RuleCode,
    enabled: bool,
    #[serde(skip_serializing_if = "BoundOptions::is_empty")]
    options: BoundOptions,
}

impl RuleEntry {
    /// Returns the rule code.
    #[must_use]
    pub fn code(&self) -> &RuleCode {
        &self.code
    }

    /// Returns true if the rule runs on the file.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the options bound to the rule.
    #[must_use]
    pub fn options(&self) -> &BoundOptions {
        &self.options
    }
}

/// The active rules and their options for one file.
///
/// Holds exactly one entry per catalog rule, in code order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectiveRuleSet {
    entries: Vec<RuleEntry>,
}

impl EffectiveRuleSet {
    /// Returns all entries in code order.
    #[must_use]
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Returns the number of entries (the catalog size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true for an empty catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for a code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&RuleEntry> {
        self.entries
            .binary_search_by(|entry| entry.code.as_str().cmp(code))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Returns true if `code` is a known, enabled rule.
    #[must_use]
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get(code).is_some_and(RuleEntry::is_enabled)
    }

    /// Returns the bound options of `code`.
    #[must_use]
    pub fn options_for(&self, code: &str) -> Option<&BoundOptions> {
        self.get(code).map(RuleEntry::options)
    }

    /// Iterates over the enabled codes in code order.
    pub fn enabled_codes(&self) -> impl Iterator<Item = &RuleCode> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| &entry.code)
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.enabled).count()
    }
}

/// Resolves the effective rule set for `file_path`.
///
/// The file is assumed not to be excluded; callers check
/// [`PathMatcher::is_excluded`] first.
///
/// # Panics
///
/// Panics if `config` references codes absent from `catalog`, which
/// validation against the same catalog rules out.
#[must_use]
pub fn resolve(
    file_path: &Path,
    config: &LintConfig,
    catalog: &Catalog,
    matcher: &PathMatcher,
) -> EffectiveRuleSet {
    let matched = matching_overrides(file_path, config, matcher);
    resolve_with_overrides(config, catalog, &matched)
}

/// Returns the indexes of the override blocks matching `file_path`, in
/// configuration order.
#[must_use]
pub fn matching_overrides(
    file_path: &Path,
    config: &LintConfig,
    matcher: &PathMatcher,
) -> Vec<usize> {
    config
        .overrides()
        .iter()
        .enumerate()
        .filter(|(_, block)| matcher.matches(block.pattern(), file_path))
        .map(|(i, _)| i)
        .collect()
}

/// Resolves a rule set given the override blocks already known to match.
///
/// The result depends only on the configuration and the block indexes, which
/// makes them a sound memoization key.
///
/// # Panics
///
/// Panics if an index is out of range or `config` references codes absent
/// from `catalog`.
#[must_use]
pub fn resolve_with_overrides(
    config: &LintConfig,
    catalog: &Catalog,
    matched: &[usize],
) -> EffectiveRuleSet {
    let mut enabled: Vec<bool> = catalog
        .iter()
        .map(|(_, rule)| rule.default_enabled())
        .collect();

    // A global `select = ["ALL"]` replaces the defaults before any other
    // global declaration runs, wherever it appears.
    let global = config.declarations();
    if global.iter().any(Declaration::selects_all) {
        trace!("select ALL: every rule enabled as baseline");
        enabled.fill(true);
    }
    apply(
        &mut enabled,
        global.iter().filter(|d| !d.selects_all()),
        catalog,
    );

    let mut override_options: Vec<&OptionTable> = Vec::with_capacity(matched.len());
    for &index in matched {
        let block = &config.overrides()[index];
        debug!(block = block.source(), pattern = %block.pattern(), "applying override");
        apply(&mut enabled, block.declarations(), catalog);
        override_options.push(block.options());
    }

    let entries = catalog
        .iter()
        .map(|(id, rule)| RuleEntry {
            code: rule.code().clone(),
            enabled: enabled[id.index()],
            options: bind(
                rule.options(),
                |key| catalog.option(key),
                config.options(),
                &override_options,
            ),
        })
        .collect();

    EffectiveRuleSet { entries }
}

fn apply<'d>(
    enabled: &mut [bool],
    declarations: impl IntoIterator<Item = &'d Declaration>,
    catalog: &Catalog,
) {
    for declaration in declarations {
        let ids: Vec<RuleId> = match expand(declaration.selector(), catalog) {
            Ok(ids) => ids,
            Err(e) => unreachable!("validated configuration references {e}"),
        };
        trace!(%declaration, rules = ids.len(), "applying declaration");
        let value = declaration.polarity().enables();
        for id in ids {
            enabled[id.index()] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleDef;
    use crate::model::OverrideBlock;
    use crate::options::{OptionKind, OptionSpec, OptionValue};
    use crate::pattern::PathPattern;
    use crate::selector::Selector;

    fn catalog() -> Catalog {
        Catalog::builder()
            .option(OptionSpec::new(
                "mccabe",
                "max-complexity",
                OptionKind::UnsignedInt,
                OptionValue::UnsignedInt(10),
            ))
            .rules([
                RuleDef::new("ANN001", "missing-type-function-argument"),
                RuleDef::new("ANN101", "missing-type-self"),
                RuleDef::new("ANN401", "any-type"),
                RuleDef::new("C901", "complex-structure").option("mccabe.max-complexity"),
                RuleDef::new("E711", "none-comparison").enabled_by_default(),
                RuleDef::new("F401", "unused-import").enabled_by_default(),
                RuleDef::new("S101", "assert"),
            ])
            .build()
            .unwrap()
    }

    fn select(s: &str) -> Declaration {
        Declaration::select(Selector::parse(s).unwrap())
    }

    fn ignore(s: &str) -> Declaration {
        Declaration::ignore(Selector::parse(s).unwrap())
    }

    fn block(pattern: &str, declarations: Vec<Declaration>) -> OverrideBlock {
        OverrideBlock::new(
            format!("override `{pattern}`"),
            PathPattern::new(pattern).unwrap(),
            declarations,
            OptionTable::new(),
        )
    }

    fn run(config: &LintConfig, file: &str) -> EffectiveRuleSet {
        resolve(Path::new(file), config, &catalog(), &PathMatcher::new("/project"))
    }

    fn enabled(set: &EffectiveRuleSet) -> Vec<&str> {
        set.enabled_codes().map(RuleCode::as_str).collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let set = run(&LintConfig::new(), "src/app.py");
        assert_eq!(enabled(&set), ["E711", "F401"]);
    }

    #[test]
    fn result_is_total_over_catalog() {
        let config = LintConfig::new().with_declaration(ignore("ALL"));
        let set = run(&config, "src/app.py");
        assert_eq!(set.len(), catalog().len());
        assert_eq!(set.enabled_count(), 0);
    }

    #[test]
    fn select_all_enables_every_code() {
        let config = LintConfig::new().with_declaration(select("ALL"));
        let set = run(&config, "src/app.py");
        assert_eq!(set.enabled_count(), set.len());
    }

    #[test]
    fn select_all_then_ignore_disables_only_that_code() {
        let config = LintConfig::new()
            .with_declaration(select("ALL"))
            .with_declaration(ignore("ANN101"));
        let set = run(&config, "src/app.py");
        assert!(!set.is_enabled("ANN101"));
        assert_eq!(set.enabled_count(), set.len() - 1);
    }

    #[test]
    fn global_select_all_is_a_baseline() {
        let config = LintConfig::new()
            .with_declaration(ignore("ANN101"))
            .with_declaration(select("ALL"));
        let set = run(&config, "src/app.py");
        assert!(!set.is_enabled("ANN101"));
        assert_eq!(set.enabled_count(), set.len() - 1);
    }

    #[test]
    fn select_all_in_override_is_positional() {
        let config = LintConfig::new()
            .with_declaration(ignore("S"))
            .with_override(block("tests/*", vec![ignore("ANN"), select("ALL")]))
            .with_override(block("docs/*", vec![select("ALL"), ignore("ANN")]));

        let tests = run(&config, "tests/test_app.py");
        assert!(tests.is_enabled("S101"));
        assert!(tests.is_enabled("ANN001"));

        let docs = run(&config, "docs/conf.py");
        assert!(docs.is_enabled("S101"));
        assert!(!docs.is_enabled("ANN001"));

        assert!(!run(&config, "src/app.py").is_enabled("S101"));
    }

    #[test]
    fn later_exact_code_beats_earlier_category() {
        let config = LintConfig::new()
            .with_declaration(select("ANN"))
            .with_declaration(ignore("ANN101"));
        let set = run(&config, "src/app.py");
        assert!(set.is_enabled("ANN001"));
        assert!(!set.is_enabled("ANN101"));
        assert!(set.is_enabled("ANN401"));
    }

    #[test]
    fn later_category_beats_earlier_exact_code() {
        let config = LintConfig::new()
            .with_declaration(ignore("ANN101"))
            .with_declaration(select("ANN"));
        let set = run(&config, "src/app.py");
        assert!(set.is_enabled("ANN101"));
    }

    #[test]
    fn override_augments_global_baseline() {
        let config = LintConfig::new()
            .with_declaration(select("ANN001"))
            .with_declaration(select("S101"))
            .with_override(block("tests/*", vec![ignore("S101")]));

        let inside = run(&config, "tests/test_app.py");
        assert!(inside.is_enabled("ANN001"));
        assert!(!inside.is_enabled("S101"));

        let outside = run(&config, "src/app.py");
        assert!(outside.is_enabled("ANN001"));
        assert!(outside.is_enabled("S101"));
    }

    #[test]
    fn overrides_apply_in_configuration_order() {
        let config = LintConfig::new()
            .with_override(block("tests/**", vec![select("S101")]))
            .with_override(block("tests/fixtures/*", vec![ignore("S")]));

        assert!(run(&config, "tests/test_app.py").is_enabled("S101"));
        assert!(!run(&config, "tests/fixtures/data.py").is_enabled("S101"));
    }

    #[test]
    fn options_follow_override_then_global_then_default() {
        let mut global = OptionTable::new();
        global.insert("mccabe.max-complexity", OptionValue::UnsignedInt(25));
        let mut legacy = OptionTable::new();
        legacy.insert("mccabe.max-complexity", OptionValue::UnsignedInt(40));

        let config = LintConfig::new()
            .with_options(global)
            .with_override(OverrideBlock::new(
                "legacy",
                PathPattern::new("legacy/**").unwrap(),
                Vec::new(),
                legacy,
            ));

        let threshold = |set: &EffectiveRuleSet| {
            set.options_for("C901")
                .and_then(|o| o.get("mccabe.max-complexity"))
                .and_then(OptionValue::as_u64)
        };
        assert_eq!(threshold(&run(&config, "src/app.py")), Some(25));
        assert_eq!(threshold(&run(&config, "legacy/old.py")), Some(40));
        assert_eq!(threshold(&run(&LintConfig::new(), "src/app.py")), Some(10));
    }

    #[test]
    fn matching_overrides_reports_indexes() {
        let config = LintConfig::new()
            .with_override(block("tests/**", vec![]))
            .with_override(block("src/*", vec![]))
            .with_override(block("**/conftest.py", vec![]));
        let matcher = PathMatcher::new("/project");

        assert_eq!(
            matching_overrides(Path::new("tests/conftest.py"), &config, &matcher),
            [0, 2]
        );
        assert!(matching_overrides(Path::new("docs/index.py"), &config, &matcher).is_empty());
    }

    #[test]
    fn resolution_is_idempotent() {
        let config = LintConfig::new()
            .with_declaration(select("ALL"))
            .with_declaration(ignore("ANN"));
        assert_eq!(run(&config, "src/app.py"), run(&config, "src/app.py"));
    }

    #[test]
    fn unknown_code_lookup_is_false() {
        let set = run(&LintConfig::new(), "src/app.py");
        assert!(!set.is_enabled("ZZZ999"));
        assert!(set.get("ZZZ999").is_none());
    }
}
