//! Rule option schema and option binding.
//!
//! Options live in named sections (`[lint.mccabe]`) and are addressed by a
//! dotted key, e.g. `mccabe.max-complexity`. Rules list the option keys they
//! depend on; [`bind`] picks the most specific value for each of them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Shape of an option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` / `false`.
    Bool,
    /// A non-negative integer.
    UnsignedInt,
    /// Free-form string.
    String,
    /// One of a fixed set of strings.
    Enum(&'static [&'static str]),
    /// Array of strings.
    StringList,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("a boolean"),
            Self::UnsignedInt => f.write_str("a non-negative integer"),
            Self::String => f.write_str("a string"),
            Self::Enum(values) => write!(f, "one of {}", values.join(", ")),
            Self::StringList => f.write_str("an array of strings"),
        }
    }
}

impl OptionKind {
    /// Converts a raw TOML value into an [`OptionValue`] of this kind.
    ///
    /// Returns `None` if the value does not have the expected shape.
    #[must_use]
    pub fn coerce(&self, value: &toml::Value) -> Option<OptionValue> {
        match (self, value) {
            (Self::Bool, toml::Value::Boolean(b)) => Some(OptionValue::Bool(*b)),
            (Self::UnsignedInt, toml::Value::Integer(i)) => {
                u64::try_from(*i).ok().map(OptionValue::UnsignedInt)
            }
            (Self::String, toml::Value::String(s)) => Some(OptionValue::String(s.clone())),
            (Self::Enum(allowed), toml::Value::String(s)) => allowed
                .contains(&s.as_str())
                .then(|| OptionValue::String(s.clone())),
            (Self::StringList, toml::Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map(String::from))
                .collect::<Option<Vec<_>>>()
                .map(OptionValue::StringList),
            _ => None,
        }
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean value.
    Bool(bool),
    /// Non-negative integer value.
    UnsignedInt(u64),
    /// String value (also used for enum options).
    String(String),
    /// List of strings.
    StringList(Vec<String>),
}

impl OptionValue {
    /// Returns the value as a boolean, if it is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an unsigned integer, if it is one.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UnsignedInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::UnsignedInt(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::StringList(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Schema entry for one configurable option.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    section: &'static str,
    name: &'static str,
    kind: OptionKind,
    default: OptionValue,
    overridable: bool,
    description: &'static str,
}

impl OptionSpec {
    /// Creates a new option spec; options are overridable per path by default.
    #[must_use]
    pub fn new(
        section: &'static str,
        name: &'static str,
        kind: OptionKind,
        default: OptionValue,
    ) -> Self {
        Self {
            section,
            name,
            kind,
            default,
            overridable: true,
            description: "",
        }
    }

    /// Marks the option as global-only: override blocks may not change it.
    #[must_use]
    pub fn global_only(mut self) -> Self {
        self.overridable = false;
        self
    }

    /// Sets the human readable description.
    #[must_use]
    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Returns the dotted key (`section.name`).
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}.{}", self.section, self.name)
    }

    /// Returns the section name (e.g. `mccabe`).
    #[must_use]
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Returns the option name within its section (e.g. `max-complexity`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value kind.
    #[must_use]
    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    /// Returns the built-in default.
    #[must_use]
    pub fn default_value(&self) -> &OptionValue {
        &self.default
    }

    /// Whether override blocks may set a different value than the global one.
    #[must_use]
    pub fn is_overridable(&self) -> bool {
        self.overridable
    }

    /// Returns the description text.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        self.description
    }
}

/// Validated option values for one scope, keyed by dotted option key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTable {
    values: BTreeMap<String, OptionValue>,
}

impl OptionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: OptionValue) -> Option<OptionValue> {
        self.values.insert(key.into(), value)
    }

    /// Gets a value by dotted key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Returns true if no values are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Option values attached to one rule in an effective rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoundOptions {
    values: BTreeMap<String, OptionValue>,
}

impl BoundOptions {
    /// Gets a bound value by dotted key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Returns true if the rule has no configurable options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Binds the options a rule depends on.
///
/// `overrides` are the option tables of the override blocks matching the
/// file, in configuration order. For each option key the last override that
/// sets it wins, then the global table, then the schema default.
///
/// # Panics
///
/// Panics if the rule declares an option key absent from `specs`; catalogs
/// reject such rules at build time.
#[must_use]
pub fn bind<'a>(
    option_keys: &[&str],
    specs: impl Fn(&str) -> Option<&'a OptionSpec>,
    global: &OptionTable,
    overrides: &[&OptionTable],
) -> BoundOptions {
    let mut values = BTreeMap::new();
    for &key in option_keys {
        let value = overrides
            .iter()
            .rev()
            .find_map(|table| table.get(key))
            .or_else(|| global.get(key))
            .cloned()
            .unwrap_or_else(|| match specs(key) {
                Some(spec) => spec.default_value().clone(),
                None => unreachable!("rule depends on unregistered option `{key}`"),
            });
        values.insert(key.to_string(), value);
    }
    BoundOptions { values }
}
