//! Rule codes and categories.
//!
//! A rule code is a short uppercase category prefix followed by a numeric
//! suffix, e.g. `ANN101` (category `ANN`, number `101`) or `C901`.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// Maximum length of a category prefix.
pub const MAX_CATEGORY_LEN: usize = 4;

/// Maximum length of the numeric suffix of a code.
pub const MAX_NUMBER_LEN: usize = 4;

/// Errors from parsing codes and categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Prefix is missing, too long, or not uppercase ASCII letters.
    #[error("`{0}` is not a valid rule category (1-{MAX_CATEGORY_LEN} uppercase letters)")]
    InvalidCategory(String),

    /// Code does not have the `PREFIX` + `digits` shape.
    #[error("`{0}` is not a valid rule code (category letters followed by 1-{MAX_NUMBER_LEN} digits)")]
    InvalidCode(String),
}

/// A validated rule code such as `ANN101`.
///
/// Cloning is cheap; the text is shared.
#[derive(Clone)]
pub struct RuleCode {
    text: Arc<str>,
    split: usize,
}

impl RuleCode {
    /// Parses a rule code.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidCode`] if the text is not letters followed by digits.
    pub fn new(code: &str) -> Result<Self, CodeError> {
        let split = code
            .find(|c: char| !c.is_ascii_uppercase())
            .ok_or_else(|| CodeError::InvalidCode(code.to_string()))?;
        let (prefix, number) = code.split_at(split);
        if prefix.is_empty()
            || prefix.len() > MAX_CATEGORY_LEN
            || number.is_empty()
            || number.len() > MAX_NUMBER_LEN
            || !number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CodeError::InvalidCode(code.to_string()));
        }
        Ok(Self {
            text: Arc::from(code),
            split,
        })
    }

    /// Returns the full code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the category prefix (e.g. `ANN`).
    #[must_use]
    pub fn category(&self) -> &str {
        &self.text[..self.split]
    }

    /// Returns the numeric suffix as written (e.g. `006` for `UP006`).
    #[must_use]
    pub fn number(&self) -> &str {
        &self.text[self.split..]
    }
}

// Text ordering equals (category, number) ordering: digits sort before letters,
// so every code of a category precedes codes of any longer category it prefixes.
impl Ord for RuleCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for RuleCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RuleCode {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for RuleCode {}

impl Hash for RuleCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Debug for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleCode({})", self.text)
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl FromStr for RuleCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for RuleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// A category prefix such as `ANN` or `D`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Parses a category prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidCategory`] unless the text is 1-4 uppercase letters.
    pub fn new(prefix: &str) -> Result<Self, CodeError> {
        if prefix.is_empty()
            || prefix.len() > MAX_CATEGORY_LEN
            || !prefix.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(CodeError::InvalidCategory(prefix.to_string()));
        }
        Ok(Self(prefix.to_string()))
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&RuleCode> for Category {
    fn from(code: &RuleCode) -> Self {
        Self(code.category().to_string())
    }
}
