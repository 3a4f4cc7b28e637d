//! Path patterns for exclusions and override blocks.
//!
//! Patterns are `/` separated and anchored to the project root:
//! - a literal segment matches the same path component (case sensitive)
//! - `*` matches exactly one component
//! - `**` matches any number of components, including none
//! - a segment containing glob characters (`test_*.py`) matches one component
//!
//! A leading `/` or `./` spells the root anchor explicitly.

use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Errors from compiling a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern is empty.
    #[error("pattern is empty")]
    Empty,

    /// Two separators with nothing between them, or a trailing separator.
    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),

    /// `**` combined with other characters in a single segment.
    #[error("pattern `{0}`: `**` must be a whole segment")]
    MisplacedRecursive(String),

    /// An explicit root anchor followed by a leading `**`.
    #[error("pattern `{0}` is anchored to the root but starts with `**`")]
    ConflictingAnchor(String),

    /// A segment glob failed to compile.
    #[error("pattern `{pattern}`: {reason}")]
    InvalidGlob {
        /// The full pattern.
        pattern: String,
        /// Glob compiler message.
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    AnyOne,
    Recursive,
    Glob(glob::Pattern),
}

impl Segment {
    fn matches(&self, component: &str) -> bool {
        match self {
            Self::Literal(s) => s == component,
            Self::AnyOne => true,
            Self::Glob(p) => p.matches(component),
            Self::Recursive => unreachable!("recursive segments are handled by the matcher"),
        }
    }
}

/// A compiled, root-anchored path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] for empty patterns, empty segments,
    /// misplaced `**`, conflicting anchors or invalid segment globs.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        let (body, explicit_anchor) = match pattern
            .strip_prefix("./")
            .or_else(|| pattern.strip_prefix('/'))
        {
            Some(rest) => (rest, true),
            None => (pattern, false),
        };
        if body.is_empty() {
            return Err(PatternError::EmptySegment(pattern.to_string()));
        }

        let mut segments: Vec<Segment> = Vec::new();
        for part in body.split('/') {
            if part.is_empty() {
                return Err(PatternError::EmptySegment(pattern.to_string()));
            }
            let segment = match part {
                "**" => Segment::Recursive,
                "*" => Segment::AnyOne,
                p if p.contains("**") => {
                    return Err(PatternError::MisplacedRecursive(pattern.to_string()));
                }
                p if p.contains(['*', '?', '[']) => {
                    Segment::Glob(glob::Pattern::new(p).map_err(|e| PatternError::InvalidGlob {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })?)
                }
                p => Segment::Literal(p.to_string()),
            };
            // `a/**/**/b` is the same as `a/**/b`
            if segment == Segment::Recursive && segments.last() == Some(&Segment::Recursive) {
                continue;
            }
            segments.push(segment);
        }

        if explicit_anchor && segments.first() == Some(&Segment::Recursive) {
            return Err(PatternError::ConflictingAnchor(pattern.to_string()));
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Returns the pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Tests whether the pattern matches all components of a root-relative path.
    #[must_use]
    pub fn matches_components(&self, components: &[&str]) -> bool {
        match_parts(components, &self.segments)
    }

    /// Tests whether the pattern matches the path or one of its leading ancestors.
    ///
    /// `tests` thus covers `tests/unit/foo.py` but not `src/tests_helper.py`.
    #[must_use]
    pub fn matches_prefix_of(&self, components: &[&str]) -> bool {
        (1..=components.len()).any(|end| match_parts(&components[..end], &self.segments))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn match_parts(path: &[&str], pattern: &[Segment]) -> bool {
    let Some((first, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    match first {
        Segment::Recursive => (0..=path.len()).any(|i| match_parts(&path[i..], rest)),
        segment => match path.split_first() {
            Some((component, remaining)) => {
                segment.matches(component) && match_parts(remaining, rest)
            }
            None => false,
        },
    }
}

/// Evaluates patterns against file paths relative to a configured root.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    root: PathBuf,
}

impl PathMatcher {
    /// Creates a matcher anchored at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the configured root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Splits a file path into root-relative components.
    ///
    /// Returns `None` for paths outside the root or that escape it via `..`.
    #[must_use]
    pub fn components<'p>(&self, file_path: &'p Path) -> Option<Vec<Cow<'p, str>>> {
        let relative = if file_path.is_absolute() {
            file_path.strip_prefix(&self.root).ok()?
        } else {
            file_path.strip_prefix(&self.root).unwrap_or(file_path)
        };

        let mut out = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => out.push(part.to_string_lossy()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(out)
    }

    /// Tests whether `pattern` matches `file_path` in full.
    #[must_use]
    pub fn matches(&self, pattern: &PathPattern, file_path: &Path) -> bool {
        self.components(file_path).is_some_and(|parts| {
            let parts: Vec<&str> = parts.iter().map(|p| &**p).collect();
            pattern.matches_components(&parts)
        })
    }

    /// Tests whether any exclude pattern covers `file_path`.
    ///
    /// A pattern excludes a file when it matches the file itself or any
    /// directory above it.
    #[must_use]
    pub fn is_excluded(&self, file_path: &Path, exclude: &[PathPattern]) -> bool {
        let Some(parts) = self.components(file_path) else {
            return false;
        };
        let parts: Vec<&str> = parts.iter().map(|p| &**p).collect();
        exclude.iter().any(|p| p.matches_prefix_of(&parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(p: &str) -> PathPattern {
        PathPattern::new(p).unwrap()
    }

    fn matcher() -> PathMatcher {
        PathMatcher::new("/project")
    }

    #[test]
    fn literal_pattern_is_anchored() {
        let m = matcher();
        assert!(m.matches(&pattern("src/app.py"), Path::new("src/app.py")));
        assert!(!m.matches(&pattern("app.py"), Path::new("src/app.py")));
        assert!(!m.matches(&pattern("src/app.py"), Path::new("lib/src/app.py")));
    }

    #[test]
    fn single_wildcard_matches_one_component() {
        let m = matcher();
        let p = pattern("tests/*");
        assert!(m.matches(&p, Path::new("tests/test_app.py")));
        assert!(!m.matches(&p, Path::new("tests/unit/test_app.py")));
        assert!(!m.matches(&p, Path::new("tests")));
    }

    #[test]
    fn recursive_wildcard_matches_any_depth() {
        let m = matcher();
        let p = pattern("tests/**");
        assert!(m.matches(&p, Path::new("tests")));
        assert!(m.matches(&p, Path::new("tests/a/b/c.py")));

        let p = pattern("**/conftest.py");
        assert!(m.matches(&p, Path::new("conftest.py")));
        assert!(m.matches(&p, Path::new("tests/unit/conftest.py")));
        assert!(!m.matches(&p, Path::new("tests/unit/conftest.pyi")));
    }

    #[test]
    fn segment_glob_matches_within_component() {
        let m = matcher();
        let p = pattern("tests/test_*.py");
        assert!(m.matches(&p, Path::new("tests/test_app.py")));
        assert!(!m.matches(&p, Path::new("tests/helper.py")));
        assert!(!m.matches(&p, Path::new("tests/sub/test_app.py")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matcher().matches(&pattern("Tests/*"), Path::new("tests/a.py")));
    }

    #[test]
    fn exclusion_covers_descendants() {
        let m = matcher();
        let exclude = vec![pattern("tests"), pattern("sim")];
        assert!(m.is_excluded(Path::new("tests/unit/foo"), &exclude));
        assert!(m.is_excluded(Path::new("tests/test_app.py"), &exclude));
        assert!(m.is_excluded(Path::new("sim"), &exclude));
        assert!(!m.is_excluded(Path::new("src/tests_helper"), &exclude));
        assert!(!m.is_excluded(Path::new("src/tests/foo.py"), &exclude));
        assert!(!m.is_excluded(Path::new("src/app.py"), &exclude));
    }

    #[test]
    fn absolute_paths_are_relativized() {
        let m = matcher();
        let exclude = vec![pattern("tests")];
        assert!(m.is_excluded(Path::new("/project/tests/a.py"), &exclude));
        assert!(!m.is_excluded(Path::new("/elsewhere/tests/a.py"), &exclude));
        assert!(m.matches(&pattern("src/*"), Path::new("/project/src/app.py")));
    }

    #[test]
    fn dot_prefixed_paths_are_normalized() {
        let m = matcher();
        assert!(m.matches(&pattern("src/app.py"), Path::new("./src/app.py")));
        assert!(!m.matches(&pattern("src/app.py"), Path::new("../src/app.py")));
    }

    #[test]
    fn explicit_anchor_is_accepted() {
        let m = matcher();
        assert!(m.matches(&pattern("/src/*"), Path::new("src/app.py")));
        assert!(m.matches(&pattern("./src/*"), Path::new("src/app.py")));
    }

    #[test]
    fn invalid_patterns_are_rejected() {
        assert_eq!(PathPattern::new(""), Err(PatternError::Empty));
        assert!(matches!(
            PathPattern::new("tests//unit"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            PathPattern::new("tests/"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            PathPattern::new("/"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            PathPattern::new("src/a**"),
            Err(PatternError::MisplacedRecursive(_))
        ));
        assert!(matches!(
            PathPattern::new("/**/tests"),
            Err(PatternError::ConflictingAnchor(_))
        ));
        assert!(matches!(
            PathPattern::new("src/[a"),
            Err(PatternError::InvalidGlob { .. })
        ));
    }
}
