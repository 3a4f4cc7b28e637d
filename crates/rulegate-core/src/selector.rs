//! Selector tokens and their expansion into concrete rule sets.

use crate::catalog::{Catalog, RuleId, ALL_SELECTOR};
use crate::code::{Category, CodeError, RuleCode};

use std::fmt;
use std::str::FromStr;

/// A configuration token naming one rule, one category, or every rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `ALL`: every rule in the catalog.
    All,
    /// A category prefix such as `ANN`.
    Category(Category),
    /// A full rule code such as `ANN101`.
    Code(RuleCode),
}

impl Selector {
    /// Parses a selector token.
    ///
    /// Letters only → category (or `ALL`), letters followed by digits → code.
    ///
    /// # Errors
    ///
    /// Returns a [`CodeError`] if the token is neither shape.
    pub fn parse(token: &str) -> Result<Self, CodeError> {
        if token == ALL_SELECTOR {
            return Ok(Self::All);
        }
        if token.bytes().all(|b| b.is_ascii_uppercase()) {
            return Category::new(token).map(Self::Category);
        }
        RuleCode::new(token).map(Self::Code)
    }
}

impl FromStr for Selector {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SELECTOR),
            Self::Category(category) => write!(f, "{category}"),
            Self::Code(code) => write!(f, "{code}"),
        }
    }
}

/// Raised when an exact code is absent from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule code `{0}`")]
pub struct UnknownCode(pub RuleCode);

/// Expands a selector into the ids of the rules it denotes, in catalog order.
///
/// A category with no rules expands to an empty set; validation reports it.
///
/// # Errors
///
/// Returns [`UnknownCode`] if an exact code is not in the catalog.
pub fn expand(selector: &Selector, catalog: &Catalog) -> Result<Vec<RuleId>, UnknownCode> {
    match selector {
        Selector::All => Ok(catalog.iter().map(|(id, _)| id).collect()),
        Selector::Category(category) => Ok(catalog
            .category_range(category.as_str())
            .map(|range| Catalog::id_range(range).collect())
            .unwrap_or_default()),
        Selector::Code(code) => catalog
            .lookup(code)
            .map(|id| vec![id])
            .ok_or_else(|| UnknownCode(code.clone())),
    }
}

/// Expands a selector into rule codes, in catalog order.
///
/// # Errors
///
/// Returns [`UnknownCode`] if an exact code is not in the catalog.
pub fn expand_codes<'c>(
    selector: &Selector,
    catalog: &'c Catalog,
) -> Result<Vec<&'c RuleCode>, UnknownCode> {
    Ok(expand(selector, catalog)?
        .into_iter()
        .map(|id| catalog.rule(id).code())
        .collect())
}
