//! Starter configurations for common adoption levels.

use std::fmt;

const HEADER: &str = "# rulegate configuration
# Declarations apply in order; for each rule code the last one wins.

exclude = [\".venv\", \"build\", \"dist\"]
";

const RECOMMENDED: &str = "
[lint]
select = [\"E\", \"F\", \"W\", \"I\", \"B\", \"UP\"]

[lint.per-file-ignores]
\"**/__init__.py\" = [\"F401\"]
";

const STRICT: &str = "
[lint]
select = [\"ALL\"]
# Pairs that contradict each other, and rules that fight a code formatter
ignore = [\"D203\", \"D213\", \"COM812\", \"ISC001\"]

[lint.mccabe]
max-complexity = 10

[lint.per-file-ignores]
\"tests/**\" = [\"S101\", \"D\", \"ANN\"]
";

/// Preset configurations for `rulegate init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Default-enabled rules only.
    Minimal,
    /// Common error, style and modernization families.
    #[default]
    Recommended,
    /// Every rule, minus known conflicts.
    Strict,
}

impl Preset {
    /// All presets, from least to most strict.
    pub const ALL: [Self; 3] = [Self::Minimal, Self::Recommended, Self::Strict];

    /// Returns the preset name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Recommended => "recommended",
            Self::Strict => "strict",
        }
    }

    /// Renders the starter configuration file.
    #[must_use]
    pub fn config_toml(self) -> String {
        let body = match self {
            Self::Minimal => "",
            Self::Recommended => RECOMMENDED,
            Self::Strict => STRICT,
        };
        format!("{HEADER}{body}")
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
