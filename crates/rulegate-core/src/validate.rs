//! Raw configuration → [`LintConfig`] conversion with validation.
//!
//! Every check runs independently and all problems are collected, so a user
//! can fix a configuration file in one pass.

use crate::catalog::Catalog;
use crate::config::ConfigFile;
use crate::model::{Declaration, LintConfig, OverrideBlock, Polarity};
use crate::options::OptionTable;
use crate::pattern::{PathPattern, PatternError};
use crate::selector::Selector;

use std::collections::BTreeMap;
use tracing::debug;

/// A single validation problem, naming the offending configuration key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ValidationError {
    /// An exact code that is not in the catalog.
    #[error("{key}: unknown rule code `{code}`")]
    #[diagnostic(
        code(rulegate::unknown_rule_code),
        help("run `rulegate list-rules` to see the available codes")
    )]
    UnknownRuleCode {
        /// Offending key (e.g. `lint.select[3]`).
        key: String,
        /// The code as written.
        code: String,
    },

    /// A category prefix with no rules.
    #[error("{key}: no rules in category `{prefix}`")]
    #[diagnostic(
        code(rulegate::unknown_category),
        help("run `rulegate list-rules` to see the available categories")
    )]
    UnknownCategory {
        /// Offending key.
        key: String,
        /// The prefix as written.
        prefix: String,
    },

    /// An option value of the wrong shape.
    #[error("{key}: expected {expected}, found {found}")]
    #[diagnostic(code(rulegate::option_type_mismatch))]
    OptionTypeMismatch {
        /// Offending key (e.g. `lint.mccabe.max-complexity`).
        key: String,
        /// Description of the accepted values.
        expected: String,
        /// Description of the value found.
        found: String,
    },

    /// An option section or option name the catalog does not declare.
    #[error("{key}: unknown option")]
    #[diagnostic(code(rulegate::unknown_option))]
    UnknownOption {
        /// Offending key.
        key: String,
    },

    /// An exclude or override pattern that does not compile.
    #[error("{key}: invalid path pattern: {source}")]
    #[diagnostic(code(rulegate::invalid_path_pattern))]
    InvalidPathPattern {
        /// Offending key.
        key: String,
        /// Why the pattern was rejected.
        source: PatternError,
    },

    /// Contradictory values for an option that cannot vary per path.
    #[error("{key}: {reason}")]
    #[diagnostic(code(rulegate::conflicting_override))]
    ConflictingOverride {
        /// Offending key.
        key: String,
        /// Dotted option key.
        option: String,
        /// Human readable explanation.
        reason: String,
    },

    /// A key holding a value of the wrong shape, or a malformed token.
    #[error("{key}: {message}")]
    #[diagnostic(code(rulegate::config_parse))]
    ConfigParse {
        /// Offending key.
        key: String,
        /// What is wrong.
        message: String,
    },
}

impl ValidationError {
    /// Returns the configuration key the error refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownRuleCode { key, .. }
            | Self::UnknownCategory { key, .. }
            | Self::OptionTypeMismatch { key, .. }
            | Self::UnknownOption { key }
            | Self::InvalidPathPattern { key, .. }
            | Self::ConflictingOverride { key, .. }
            | Self::ConfigParse { key, .. } => key,
        }
    }
}

/// All validation problems of one configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("configuration validation errors:\n{}", format_errors(.errors))]
#[diagnostic(
    code(rulegate::invalid_config),
    help("analysis does not start until the configuration is valid")
)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Returns the individual errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validates a raw configuration file against a catalog.
///
/// # Errors
///
/// Returns every problem found; the partial result is discarded.
pub fn validate(file: &ConfigFile, catalog: &Catalog) -> Result<LintConfig, ValidationErrors> {
    let mut v = Validator {
        catalog,
        errors: Vec::new(),
    };

    let mut config = LintConfig::new();
    match &file.target_version {
        Some(toml::Value::String(version)) => {
            config = config.with_target_version(version.clone());
        }
        Some(other) => v.parse_error(
            "target-version",
            format!("expected a string, found {}", other.type_str()),
        ),
        None => {}
    }

    for (name, value) in [
        ("exclude", &file.exclude),
        ("extend-exclude", &file.extend_exclude),
    ] {
        let Some(value) = value else {
            continue;
        };
        for pattern in v.patterns(name, value) {
            config = config.with_exclude(pattern);
        }
    }

    let mut options = OptionTable::new();
    let mut overrides = Vec::new();
    let lint = match &file.lint {
        Some(toml::Value::Table(table)) => Some(table),
        Some(other) => {
            v.parse_error(
                "lint",
                format!("expected a table, found {}", other.type_str()),
            );
            None
        }
        None => None,
    };
    for (name, value) in lint.into_iter().flatten() {
        let key = format!("lint.{name}");
        match name.as_str() {
            "select" | "extend-select" => {
                for declaration in v.declarations(&key, value, Polarity::Select) {
                    config = config.with_declaration(declaration);
                }
            }
            "ignore" | "extend-ignore" => {
                for declaration in v.declarations(&key, value, Polarity::Ignore) {
                    config = config.with_declaration(declaration);
                }
            }
            "per-file-ignores" | "extend-per-file-ignores" => {
                v.per_file_ignores(&key, value, &mut overrides);
            }
            "overrides" => v.override_blocks(&key, value, &mut overrides),
            section => v.option_section(&key, section, value, &mut options),
        }
    }

    for key in file.unknown.keys() {
        v.errors.push(ValidationError::UnknownOption { key: key.clone() });
    }

    v.check_conflicts(&options, &overrides);

    if !v.errors.is_empty() {
        return Err(ValidationErrors { errors: v.errors });
    }

    debug!(
        declarations = config.declarations().len(),
        overrides = overrides.len(),
        exclude = config.exclude().len(),
        "configuration validated"
    );

    config = config.with_options(options);
    for block in overrides {
        config = config.with_override(block);
    }
    Ok(config)
}

struct Validator<'c> {
    catalog: &'c Catalog,
    errors: Vec<ValidationError>,
}

impl Validator<'_> {
    fn parse_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::ConfigParse {
            key: key.into(),
            message: message.into(),
        });
    }

    fn pattern(&mut self, key: &str, raw: &str) -> Option<PathPattern> {
        PathPattern::new(raw)
            .map_err(|source| {
                self.errors.push(ValidationError::InvalidPathPattern {
                    key: key.to_string(),
                    source,
                });
            })
            .ok()
    }

    /// Compiles an array of pattern strings.
    fn patterns(&mut self, key: &str, value: &toml::Value) -> Vec<PathPattern> {
        let Some(items) = value.as_array() else {
            self.parse_error(
                key,
                format!("expected an array of patterns, found {}", value.type_str()),
            );
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_key = format!("{key}[{i}]");
            match item.as_str() {
                Some(raw) => out.extend(self.pattern(&item_key, raw)),
                None => self.parse_error(
                    item_key,
                    format!("expected a pattern string, found {}", item.type_str()),
                ),
            }
        }
        out
    }

    /// Parses a selector array, checking every token against the catalog.
    fn declarations(
        &mut self,
        key: &str,
        value: &toml::Value,
        polarity: Polarity,
    ) -> Vec<Declaration> {
        let Some(items) = value.as_array() else {
            self.parse_error(
                key,
                format!("expected an array of selectors, found {}", value.type_str()),
            );
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_key = format!("{key}[{i}]");
            let Some(token) = item.as_str() else {
                self.parse_error(
                    item_key,
                    format!("expected a selector string, found {}", item.type_str()),
                );
                continue;
            };
            match Selector::parse(token) {
                Ok(selector) => {
                    if self.selector_exists(&item_key, &selector) {
                        out.push(Declaration::new(selector, polarity));
                    }
                }
                Err(e) => self.parse_error(item_key, e.to_string()),
            }
        }
        out
    }

    fn selector_exists(&mut self, key: &str, selector: &Selector) -> bool {
        match selector {
            Selector::All => true,
            Selector::Category(category) => {
                let known = self.catalog.category_range(category.as_str()).is_some();
                if !known {
                    self.errors.push(ValidationError::UnknownCategory {
                        key: key.to_string(),
                        prefix: category.to_string(),
                    });
                }
                known
            }
            Selector::Code(code) => {
                let known = self.catalog.lookup(code).is_some();
                if !known {
                    self.errors.push(ValidationError::UnknownRuleCode {
                        key: key.to_string(),
                        code: code.to_string(),
                    });
                }
                known
            }
        }
    }

    /// Validates one `[lint.<section>]` option table into `into`.
    fn option_section(
        &mut self,
        key: &str,
        section: &str,
        value: &toml::Value,
        into: &mut OptionTable,
    ) {
        let Some(table) = value.as_table() else {
            self.errors.push(ValidationError::UnknownOption {
                key: key.to_string(),
            });
            return;
        };
        if !self.catalog.has_option_section(section) {
            self.errors.push(ValidationError::UnknownOption {
                key: key.to_string(),
            });
            return;
        }

        for (name, raw) in table {
            let option_key = format!("{section}.{name}");
            let Some(spec) = self.catalog.option(&option_key) else {
                self.errors.push(ValidationError::UnknownOption {
                    key: format!("{key}.{name}"),
                });
                continue;
            };
            match spec.kind().coerce(raw) {
                Some(value) => {
                    into.insert(option_key, value);
                }
                None => self.errors.push(ValidationError::OptionTypeMismatch {
                    key: format!("{key}.{name}"),
                    expected: spec.kind().to_string(),
                    found: describe(raw),
                }),
            }
        }
    }

    /// `[lint.per-file-ignores]`: one Ignore-only block per pattern.
    fn per_file_ignores(
        &mut self,
        key: &str,
        value: &toml::Value,
        into: &mut Vec<OverrideBlock>,
    ) {
        let Some(table) = value.as_table() else {
            self.parse_error(
                key,
                format!(
                    "expected a table of pattern = [codes], found {}",
                    value.type_str()
                ),
            );
            return;
        };
        for (raw_pattern, codes) in table {
            let block_key = format!("{key}.\"{raw_pattern}\"");
            let pattern = self.pattern(&block_key, raw_pattern);
            let declarations = self.declarations(&block_key, codes, Polarity::Ignore);
            if let Some(pattern) = pattern {
                into.push(OverrideBlock::new(
                    block_key,
                    pattern,
                    declarations,
                    OptionTable::new(),
                ));
            }
        }
    }

    /// `[[lint.overrides]]`: full blocks with their own declarations and options.
    fn override_blocks(
        &mut self,
        key: &str,
        value: &toml::Value,
        into: &mut Vec<OverrideBlock>,
    ) {
        let Some(blocks) = value.as_array() else {
            self.parse_error(
                key,
                format!("expected an array of tables, found {}", value.type_str()),
            );
            return;
        };
        for (i, block) in blocks.iter().enumerate() {
            let block_key = format!("{key}[{i}]");
            let Some(table) = block.as_table() else {
                self.parse_error(
                    &block_key,
                    format!("expected a table, found {}", block.type_str()),
                );
                continue;
            };
            if let Some(block) = self.override_block(&block_key, table) {
                into.push(block);
            }
        }
    }

    fn override_block(&mut self, key: &str, table: &toml::Table) -> Option<OverrideBlock> {
        let pattern = match table.get("path") {
            Some(toml::Value::String(raw)) => self.pattern(&format!("{key}.path"), raw),
            Some(other) => {
                self.parse_error(
                    format!("{key}.path"),
                    format!("expected a string, found {}", other.type_str()),
                );
                None
            }
            None => {
                self.parse_error(key, "missing required key `path`");
                None
            }
        };

        let mut declarations = Vec::new();
        let mut options = OptionTable::new();
        for (name, value) in table {
            let entry_key = format!("{key}.{name}");
            match name.as_str() {
                "path" => {}
                "select" | "extend-select" => {
                    declarations.extend(self.declarations(&entry_key, value, Polarity::Select));
                }
                "ignore" | "extend-ignore" => {
                    declarations.extend(self.declarations(&entry_key, value, Polarity::Ignore));
                }
                section => self.option_section(&entry_key, section, value, &mut options),
            }
        }

        pattern.map(|p| OverrideBlock::new(key, p, declarations, options))
    }

    /// Checks global-only options and blocks sharing a pattern.
    fn check_conflicts(&mut self, global: &OptionTable, overrides: &[OverrideBlock]) {
        for block in overrides {
            for (option, value) in block.options().iter() {
                let Some(spec) = self.catalog.option(option) else {
                    continue;
                };
                if spec.is_overridable() {
                    continue;
                }
                let baseline = global.get(option).unwrap_or(spec.default_value());
                if value != baseline {
                    self.errors.push(ValidationError::ConflictingOverride {
                        key: format!("{}.{option}", block.source()),
                        option: option.to_string(),
                        reason: format!(
                            "`{option}` cannot vary per path (global value {baseline}, override sets {value})"
                        ),
                    });
                }
            }
        }

        let mut by_pattern: BTreeMap<&str, Vec<&OverrideBlock>> = BTreeMap::new();
        for block in overrides {
            by_pattern
                .entry(block.pattern().as_str())
                .or_default()
                .push(block);
        }
        for blocks in by_pattern.values().filter(|b| b.len() > 1) {
            for (i, later) in blocks.iter().enumerate().skip(1) {
                for (option, value) in later.options().iter() {
                    let earlier = blocks[..i].iter().find_map(|b| {
                        b.options()
                            .get(option)
                            .filter(|v| *v != value)
                            .map(|v| (b, v))
                    });
                    if let Some((earlier, previous)) = earlier {
                        self.errors.push(ValidationError::ConflictingOverride {
                            key: format!("{}.{option}", later.source()),
                            option: option.to_string(),
                            reason: format!(
                                "`{option}` set to {value} here but {previous} in {} for the same pattern `{}`",
                                earlier.source(),
                                later.pattern()
                            ),
                        });
                    }
                }
            }
        }
    }
}

fn describe(value: &toml::Value) -> String {
    match value {
        toml::Value::Integer(i) if *i < 0 => format!("negative integer {i}"),
        other => format!("{} {other}", other.type_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleDef;
    use crate::options::{OptionKind, OptionSpec, OptionValue};

    fn catalog() -> Catalog {
        Catalog::builder()
            .options([
                OptionSpec::new(
                    "mccabe",
                    "max-complexity",
                    OptionKind::UnsignedInt,
                    OptionValue::UnsignedInt(10),
                ),
                OptionSpec::new(
                    "pycodestyle",
                    "max-line-length",
                    OptionKind::UnsignedInt,
                    OptionValue::UnsignedInt(88),
                )
                .global_only(),
            ])
            .rules([
                RuleDef::new("ANN101", "missing-type-self"),
                RuleDef::new("ANN401", "any-type"),
                RuleDef::new("C901", "complex-structure").option("mccabe.max-complexity"),
                RuleDef::new("E501", "line-too-long").option("pycodestyle.max-line-length"),
                RuleDef::new("S101", "assert"),
            ])
            .build()
            .unwrap()
    }

    fn check(toml_str: &str) -> Result<LintConfig, ValidationErrors> {
        ConfigFile::parse(toml_str).unwrap().validate(&catalog())
    }

    fn errors(toml_str: &str) -> Vec<ValidationError> {
        check(toml_str).unwrap_err().into_iter().collect()
    }

    // -- Happy path --

    #[test]
    fn empty_config_is_valid() {
        let config = check("").unwrap();
        assert!(config.declarations().is_empty());
        assert!(config.overrides().is_empty());
    }

    #[test]
    fn declarations_follow_key_order() {
        let config = check(
            r#"
[lint]
ignore = ["ANN101"]
select = ["ALL"]
extend-ignore = ["S"]
"#,
        )
        .unwrap();
        let rendered: Vec<String> = config
            .declarations()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["ignore ANN101", "select ALL", "ignore S"]);
    }

    #[test]
    fn options_and_overrides_are_collected() {
        let config = check(
            r#"
exclude = ["tests"]

[lint]
select = ["ALL"]

[lint.per-file-ignores]
"scripts/*" = ["S101"]

[[lint.overrides]]
path = "legacy/**"
ignore = ["ANN"]

[lint.overrides.mccabe]
max-complexity = 40

[lint.mccabe]
max-complexity = 25
"#,
        )
        .unwrap();

        assert_eq!(config.exclude().len(), 1);
        assert_eq!(
            config.options().get("mccabe.max-complexity"),
            Some(&OptionValue::UnsignedInt(25))
        );
        let sources: Vec<&str> = config
            .overrides()
            .iter()
            .map(OverrideBlock::source)
            .collect();
        assert_eq!(sources, ["lint.per-file-ignores.\"scripts/*\"", "lint.overrides[0]"]);
        assert_eq!(
            config.overrides()[1].options().get("mccabe.max-complexity"),
            Some(&OptionValue::UnsignedInt(40))
        );
    }

    // -- Error cases --

    #[test]
    fn unknown_code_is_rejected() {
        let errs = errors("[lint]\nselect = [\"ZZZ999\"]\n");
        assert_eq!(
            errs,
            [ValidationError::UnknownRuleCode {
                key: "lint.select[0]".into(),
                code: "ZZZ999".into(),
            }]
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let errs = errors("[lint]\nignore = [\"PT\"]\n");
        assert!(matches!(
            &errs[..],
            [ValidationError::UnknownCategory { prefix, .. }] if prefix == "PT"
        ));
    }

    #[test]
    fn malformed_selector_is_a_parse_error() {
        let errs = errors("[lint]\nselect = [\"ann-101\", 7]\n");
        assert_eq!(errs.len(), 2);
        assert!(errs.iter().all(|e| matches!(e, ValidationError::ConfigParse { .. })));
        assert_eq!(errs[1].key(), "lint.select[1]");
    }

    #[test]
    fn option_type_mismatch_is_rejected() {
        let errs = errors("[lint.mccabe]\nmax-complexity = -3\n");
        assert!(matches!(
            &errs[..],
            [ValidationError::OptionTypeMismatch { key, .. }] if key == "lint.mccabe.max-complexity"
        ));

        let errs = errors("[lint.mccabe]\nmax-complexity = \"25\"\n");
        assert!(matches!(&errs[..], [ValidationError::OptionTypeMismatch { .. }]));
    }

    #[test]
    fn unknown_options_are_rejected() {
        let errs = errors(
            r#"
[lint]
preview = true

[lint.mccabe]
max-depth = 3

[lint.isort]
force-single-line = true
"#,
        );
        let keys: Vec<&str> = errs.iter().map(ValidationError::key).collect();
        assert_eq!(keys, ["lint.preview", "lint.mccabe.max-depth", "lint.isort"]);
        assert!(errs.iter().all(|e| matches!(e, ValidationError::UnknownOption { .. })));
    }

    #[test]
    fn invalid_patterns_are_rejected() {
        let errs = errors(
            r#"
exclude = ["tests//unit"]

[[lint.overrides]]
path = "/**/x"
ignore = ["S101"]
"#,
        );
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].key(), "exclude[0]");
        assert_eq!(errs[1].key(), "lint.overrides[0].path");
        assert!(errs.iter().all(|e| matches!(e, ValidationError::InvalidPathPattern { .. })));
    }

    #[test]
    fn override_without_path_is_rejected() {
        let errs = errors("[[lint.overrides]]\nignore = [\"S101\"]\n");
        assert!(matches!(
            &errs[..],
            [ValidationError::ConfigParse { key, .. }] if key == "lint.overrides[0]"
        ));
    }

    #[test]
    fn global_only_option_cannot_vary_per_path() {
        let errs = errors(
            r#"
[lint.pycodestyle]
max-line-length = 100

[[lint.overrides]]
path = "tests/*"
[lint.overrides.pycodestyle]
max-line-length = 120
"#,
        );
        assert!(matches!(
            &errs[..],
            [ValidationError::ConflictingOverride { option, .. }] if option == "pycodestyle.max-line-length"
        ));
    }

    #[test]
    fn global_only_option_may_repeat_global_value() {
        assert!(check(
            r#"
[lint.pycodestyle]
max-line-length = 100

[[lint.overrides]]
path = "tests/*"
[lint.overrides.pycodestyle]
max-line-length = 100
"#,
        )
        .is_ok());
    }

    #[test]
    fn same_pattern_with_contradictory_values_conflicts() {
        let errs = errors(
            r#"
[[lint.overrides]]
path = "tests/*"
[lint.overrides.mccabe]
max-complexity = 20

[[lint.overrides]]
path = "tests/*"
[lint.overrides.mccabe]
max-complexity = 30
"#,
        );
        assert!(matches!(
            &errs[..],
            [ValidationError::ConflictingOverride { key, .. }] if key == "lint.overrides[1].mccabe.max-complexity"
        ));
    }

    #[test]
    fn all_errors_are_reported_together() {
        let errs = errors(
            r#"
exclude = [""]

[lint]
select = ["ZZZ999", "QQ"]
ignore = ["ANN101"]

[lint.mccabe]
max-complexity = true
"#,
        );
        assert_eq!(errs.len(), 4);
    }

    #[test]
    fn shape_errors_join_the_batch() {
        let errs = errors(
            r#"
exclude = "tests"
line-length = 88

[lint]
select = ["ZZZ999"]
"#,
        );
        assert_eq!(errs.len(), 3);
        assert!(matches!(&errs[0], ValidationError::ConfigParse { key, .. } if key == "exclude"));
        assert!(matches!(&errs[1], ValidationError::UnknownRuleCode { .. }));
        assert!(matches!(&errs[2], ValidationError::UnknownOption { key } if key == "line-length"));
    }

    #[test]
    fn misshapen_top_level_values_are_parse_errors() {
        let errs = errors("target-version = 311\nlint = 3\nextend-exclude = [1]\n");
        let keys: Vec<&str> = errs.iter().map(ValidationError::key).collect();
        assert_eq!(keys, ["target-version", "extend-exclude[0]", "lint"]);
        assert!(errs.iter().all(|e| matches!(e, ValidationError::ConfigParse { .. })));
    }

    #[test]
    fn extend_keys_are_positional() {
        let config = check(
            r#"
exclude = ["tests"]
extend-exclude = ["build", "sim/**"]

[lint]
select = ["ANN"]
ignore = ["ANN101"]
extend-select = ["ANN101"]
"#,
        )
        .unwrap();
        let rendered: Vec<String> = config
            .declarations()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["select ANN", "ignore ANN101", "select ANN101"]);
        let exclude: Vec<&str> = config.exclude().iter().map(PathPattern::as_str).collect();
        assert_eq!(exclude, ["tests", "build", "sim/**"]);
    }

    #[test]
    fn extend_per_file_ignores_append_blocks() {
        let config = check(
            r#"
[lint.per-file-ignores]
"tests/*" = ["S101"]

[lint.extend-per-file-ignores]
"scripts/*" = ["S101", "ANN"]
"#,
        )
        .unwrap();
        let sources: Vec<&str> = config
            .overrides()
            .iter()
            .map(OverrideBlock::source)
            .collect();
        assert_eq!(
            sources,
            [
                "lint.per-file-ignores.\"tests/*\"",
                "lint.extend-per-file-ignores.\"scripts/*\""
            ]
        );
        assert_eq!(config.overrides()[1].declarations().len(), 2);
    }

    #[test]
    fn error_display_names_key() {
        let err = check("[lint]\nselect = [\"ZZZ999\"]\n").unwrap_err();
        insta::assert_snapshot!(err.errors()[0].to_string(), @"lint.select[0]: unknown rule code `ZZZ999`");
        assert!(err.to_string().contains("  - lint.select[0]"));
    }
}
