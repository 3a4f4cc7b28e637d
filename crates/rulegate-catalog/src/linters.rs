//! Linter names for rule categories.

/// A source linter and the rule category it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linter {
    /// Category prefix of the linter's rules.
    pub prefix: &'static str,
    /// Upstream linter name.
    pub name: &'static str,
}

impl Linter {
    const fn new(prefix: &'static str, name: &'static str) -> Self {
        Self { prefix, name }
    }
}

const LINTERS: &[Linter] = &[
    Linter::new("ANN", "flake8-annotations"),
    Linter::new("B", "flake8-bugbear"),
    Linter::new("C", "mccabe"),
    Linter::new("COM", "flake8-commas"),
    Linter::new("D", "pydocstyle"),
    Linter::new("E", "pycodestyle (errors)"),
    Linter::new("F", "pyflakes"),
    Linter::new("I", "isort"),
    Linter::new("ISC", "flake8-implicit-str-concat"),
    Linter::new("N", "pep8-naming"),
    Linter::new("PT", "flake8-pytest-style"),
    Linter::new("S", "flake8-bandit"),
    Linter::new("UP", "pyupgrade"),
    Linter::new("W", "pycodestyle (warnings)"),
];

/// Returns all linters, sorted by prefix.
#[must_use]
pub fn linters() -> &'static [Linter] {
    LINTERS
}

/// Returns the linter owning a category prefix.
#[must_use]
pub fn linter_for(prefix: &str) -> Option<&'static Linter> {
    LINTERS.iter().find(|l| l.prefix == prefix)
}
