//! Option schema of the built-in rules.

use rulegate_core::{OptionKind, OptionSpec, OptionValue};

/// Exception names `pytest.raises` must narrow with `match=`.
const RAISES_REQUIRE_MATCH_FOR: &[&str] = &[
    "BaseException",
    "Exception",
    "ValueError",
    "OSError",
    "IOError",
    "EnvironmentError",
    "socket.error",
];

/// Returns every option the built-in rules depend on.
#[must_use]
pub fn option_specs() -> Vec<OptionSpec> {
    let mut specs = Vec::new();
    specs.extend(mccabe());
    specs.extend(pycodestyle());
    specs.extend(flake8_annotations());
    specs.extend(flake8_pytest_style());
    specs.extend(pyupgrade());
    specs
}

fn mccabe() -> [OptionSpec; 1] {
    [OptionSpec::new(
        "mccabe",
        "max-complexity",
        OptionKind::UnsignedInt,
        OptionValue::UnsignedInt(10),
    )
    .description("Maximum cyclomatic complexity allowed for a function")]
}

fn pycodestyle() -> [OptionSpec; 2] {
    [
        OptionSpec::new(
            "pycodestyle",
            "max-line-length",
            OptionKind::UnsignedInt,
            OptionValue::UnsignedInt(88),
        )
        .global_only()
        .description("Line length at which E501 reports"),
        OptionSpec::new(
            "pycodestyle",
            "ignore-overlong-task-comments",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Skip E501 for lines that end in a task comment (TODO, FIXME)"),
    ]
}

fn flake8_annotations() -> [OptionSpec; 5] {
    [
        OptionSpec::new(
            "flake8-annotations",
            "mypy-init-return",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Allow omitting the return type of `__init__` with typed arguments"),
        OptionSpec::new(
            "flake8-annotations",
            "suppress-dummy-args",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Skip arguments matching the dummy variable pattern"),
        OptionSpec::new(
            "flake8-annotations",
            "suppress-none-returning",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Skip functions that only return `None`"),
        OptionSpec::new(
            "flake8-annotations",
            "allow-star-arg-any",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Allow `Any` for `*args` and `**kwargs`"),
        OptionSpec::new(
            "flake8-annotations",
            "ignore-fully-untyped",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Skip functions without any annotations"),
    ]
}

fn flake8_pytest_style() -> [OptionSpec; 5] {
    [
        OptionSpec::new(
            "flake8-pytest-style",
            "fixture-parentheses",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Require `@pytest.fixture()` instead of `@pytest.fixture`"),
        OptionSpec::new(
            "flake8-pytest-style",
            "mark-parentheses",
            OptionKind::Bool,
            OptionValue::Bool(false),
        )
        .description("Require `@pytest.mark.foo()` instead of `@pytest.mark.foo`"),
        OptionSpec::new(
            "flake8-pytest-style",
            "parametrize-names-type",
            OptionKind::Enum(&["csv", "tuple", "list"]),
            OptionValue::String("tuple".into()),
        )
        .description("Expected type of multiple names in `@pytest.mark.parametrize`"),
        OptionSpec::new(
            "flake8-pytest-style",
            "parametrize-values-type",
            OptionKind::Enum(&["tuple", "list"]),
            OptionValue::String("list".into()),
        )
        .description("Expected type of the values list in `@pytest.mark.parametrize`"),
        OptionSpec::new(
            "flake8-pytest-style",
            "raises-require-match-for",
            OptionKind::StringList,
            OptionValue::StringList(
                RAISES_REQUIRE_MATCH_FOR
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            ),
        )
        .description("Exceptions that need a `match=` argument in `pytest.raises`"),
    ]
}

fn pyupgrade() -> [OptionSpec; 1] {
    [OptionSpec::new(
        "pyupgrade",
        "keep-runtime-typing",
        OptionKind::Bool,
        OptionValue::Bool(false),
    )
    .description("Keep `typing` aliases needed at runtime (e.g. by pydantic)")]
}
