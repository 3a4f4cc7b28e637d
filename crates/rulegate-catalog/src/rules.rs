//! Built-in rule table, grouped by linter.
//!
//! Default-enabled rules follow the usual baseline: the `E4`, `E7` and `E9`
//! pycodestyle groups plus all of pyflakes.

use rulegate_core::{RuleDef, Stability};

/// Returns every built-in rule definition.
#[must_use]
pub fn rule_defs() -> Vec<RuleDef> {
    let mut defs = Vec::new();
    defs.extend(flake8_annotations());
    defs.extend(flake8_bugbear());
    defs.extend(mccabe());
    defs.extend(flake8_commas());
    defs.extend(pydocstyle());
    defs.extend(pycodestyle_errors());
    defs.extend(pyflakes());
    defs.extend(isort());
    defs.extend(flake8_implicit_str_concat());
    defs.extend(pep8_naming());
    defs.extend(flake8_pytest_style());
    defs.extend(flake8_bandit());
    defs.extend(pyupgrade());
    defs.extend(pycodestyle_warnings());
    defs
}

fn flake8_annotations() -> Vec<RuleDef> {
    vec![
        RuleDef::new("ANN001", "missing-type-function-argument")
            .description("Missing type annotation for function argument")
            .option("flake8-annotations.suppress-dummy-args")
            .option("flake8-annotations.ignore-fully-untyped"),
        RuleDef::new("ANN002", "missing-type-args")
            .description("Missing type annotation for `*args`")
            .option("flake8-annotations.suppress-dummy-args"),
        RuleDef::new("ANN003", "missing-type-kwargs")
            .description("Missing type annotation for `**kwargs`")
            .option("flake8-annotations.suppress-dummy-args"),
        RuleDef::new("ANN101", "missing-type-self")
            .description("Missing type annotation for `self` in method")
            .stability(Stability::Deprecated),
        RuleDef::new("ANN102", "missing-type-cls")
            .description("Missing type annotation for `cls` in classmethod")
            .stability(Stability::Deprecated),
        RuleDef::new("ANN201", "missing-return-type-undocumented-public-function")
            .description("Missing return type annotation for public function")
            .option("flake8-annotations.suppress-none-returning")
            .option("flake8-annotations.ignore-fully-untyped"),
        RuleDef::new("ANN202", "missing-return-type-private-function")
            .description("Missing return type annotation for private function")
            .option("flake8-annotations.suppress-none-returning"),
        RuleDef::new("ANN204", "missing-return-type-special-method")
            .description("Missing return type annotation for special method")
            .option("flake8-annotations.mypy-init-return"),
        RuleDef::new("ANN205", "missing-return-type-static-method")
            .description("Missing return type annotation for staticmethod"),
        RuleDef::new("ANN206", "missing-return-type-class-method")
            .description("Missing return type annotation for classmethod"),
        RuleDef::new("ANN401", "any-type")
            .description("Dynamically typed expressions (`Any`) are disallowed")
            .option("flake8-annotations.allow-star-arg-any"),
    ]
}

fn flake8_bugbear() -> Vec<RuleDef> {
    vec![
        RuleDef::new("B006", "mutable-argument-default")
            .description("Do not use mutable data structures for argument defaults"),
        RuleDef::new("B008", "function-call-in-default-argument")
            .description("Do not perform function calls in argument defaults"),
        RuleDef::new("B011", "assert-false")
            .description("Do not `assert False`; raise `AssertionError()`"),
        RuleDef::new("B904", "raise-without-from-inside-except")
            .description("Within an `except` clause, raise exceptions with `raise ... from err`"),
        RuleDef::new("B905", "zip-without-explicit-strict")
            .description("`zip()` without an explicit `strict=` parameter"),
    ]
}

fn mccabe() -> Vec<RuleDef> {
    vec![RuleDef::new("C901", "complex-structure")
        .description("Function is too complex")
        .option("mccabe.max-complexity")]
}

fn flake8_commas() -> Vec<RuleDef> {
    vec![
        RuleDef::new("COM812", "missing-trailing-comma")
            .description("Trailing comma missing"),
        RuleDef::new("COM818", "trailing-comma-on-bare-tuple")
            .description("Trailing comma on bare tuple prohibited"),
        RuleDef::new("COM819", "prohibited-trailing-comma")
            .description("Trailing comma prohibited"),
    ]
}

fn pydocstyle() -> Vec<RuleDef> {
    vec![
        RuleDef::new("D100", "undocumented-public-module")
            .description("Missing docstring in public module"),
        RuleDef::new("D101", "undocumented-public-class")
            .description("Missing docstring in public class"),
        RuleDef::new("D102", "undocumented-public-method")
            .description("Missing docstring in public method"),
        RuleDef::new("D103", "undocumented-public-function")
            .description("Missing docstring in public function"),
        RuleDef::new("D104", "undocumented-public-package")
            .description("Missing docstring in public package"),
        RuleDef::new("D105", "undocumented-magic-method")
            .description("Missing docstring in magic method"),
        RuleDef::new("D107", "undocumented-public-init")
            .description("Missing docstring in `__init__`"),
        RuleDef::new("D200", "unnecessary-multiline-docstring")
            .description("One-line docstring should fit on one line"),
        RuleDef::new("D203", "incorrect-blank-line-before-class")
            .description("1 blank line required before class docstring"),
        RuleDef::new("D205", "missing-blank-line-after-summary")
            .description("1 blank line required between summary line and description"),
        RuleDef::new("D211", "blank-line-before-class")
            .description("No blank lines allowed before class docstring"),
        RuleDef::new("D212", "multi-line-summary-first-line")
            .description("Multi-line docstring summary should start at the first line"),
        RuleDef::new("D213", "multi-line-summary-second-line")
            .description("Multi-line docstring summary should start at the second line"),
        RuleDef::new("D400", "missing-trailing-period")
            .description("First line should end with a period"),
        RuleDef::new("D401", "non-imperative-mood")
            .description("First line of docstring should be in imperative mood"),
    ]
}

fn pycodestyle_errors() -> Vec<RuleDef> {
    vec![
        RuleDef::new("E101", "mixed-spaces-and-tabs")
            .description("Indentation contains mixed spaces and tabs"),
        RuleDef::new("E203", "whitespace-before-punctuation")
            .description("Whitespace before punctuation")
            .stability(Stability::Preview),
        RuleDef::new("E401", "multiple-imports-on-one-line")
            .description("Multiple imports on one line")
            .enabled_by_default(),
        RuleDef::new("E402", "module-import-not-at-top-of-file")
            .description("Module level import not at top of file")
            .enabled_by_default(),
        RuleDef::new("E501", "line-too-long")
            .description("Line too long")
            .option("pycodestyle.max-line-length")
            .option("pycodestyle.ignore-overlong-task-comments"),
        RuleDef::new("E701", "multiple-statements-on-one-line-colon")
            .description("Multiple statements on one line (colon)")
            .enabled_by_default(),
        RuleDef::new("E702", "multiple-statements-on-one-line-semicolon")
            .description("Multiple statements on one line (semicolon)")
            .enabled_by_default(),
        RuleDef::new("E711", "none-comparison")
            .description("Comparison to `None` should be `cond is None`")
            .enabled_by_default(),
        RuleDef::new("E712", "true-false-comparison")
            .description("Avoid equality comparisons to `True` or `False`")
            .enabled_by_default(),
        RuleDef::new("E721", "type-comparison")
            .description("Use `is` and `is not` for type comparisons")
            .enabled_by_default(),
        RuleDef::new("E722", "bare-except")
            .description("Do not use bare `except`")
            .enabled_by_default(),
        RuleDef::new("E731", "lambda-assignment")
            .description("Do not assign a `lambda` expression, use a `def`")
            .enabled_by_default(),
        RuleDef::new("E741", "ambiguous-variable-name")
            .description("Ambiguous variable name")
            .enabled_by_default(),
        RuleDef::new("E902", "io-error")
            .description("Failed to read the file")
            .enabled_by_default(),
        RuleDef::new("E999", "syntax-error")
            .description("Failed to parse the file")
            .stability(Stability::Deprecated),
    ]
}

fn pyflakes() -> Vec<RuleDef> {
    vec![
        RuleDef::new("F401", "unused-import")
            .description("Module imported but unused")
            .enabled_by_default(),
        RuleDef::new("F403", "undefined-local-with-import-star")
            .description("`from module import *` used; unable to detect undefined names")
            .enabled_by_default(),
        RuleDef::new("F405", "undefined-local-with-import-star-usage")
            .description("Name may be undefined, or defined from star imports")
            .enabled_by_default(),
        RuleDef::new("F541", "f-string-missing-placeholders")
            .description("f-string without any placeholders")
            .enabled_by_default(),
        RuleDef::new("F811", "redefined-while-unused")
            .description("Redefinition of unused name")
            .enabled_by_default(),
        RuleDef::new("F821", "undefined-name")
            .description("Undefined name")
            .enabled_by_default(),
        RuleDef::new("F841", "unused-variable")
            .description("Local variable is assigned to but never used")
            .enabled_by_default(),
    ]
}

fn isort() -> Vec<RuleDef> {
    vec![
        RuleDef::new("I001", "unsorted-imports")
            .description("Import block is un-sorted or un-formatted"),
        RuleDef::new("I002", "missing-required-import")
            .description("Missing required import"),
    ]
}

fn flake8_implicit_str_concat() -> Vec<RuleDef> {
    vec![
        RuleDef::new("ISC001", "single-line-implicit-string-concatenation")
            .description("Implicitly concatenated string literals on one line"),
        RuleDef::new("ISC002", "multi-line-implicit-string-concatenation")
            .description("Implicitly concatenated string literals over multiple lines"),
        RuleDef::new("ISC003", "explicit-string-concatenation")
            .description("Explicitly concatenated string should be implicitly concatenated"),
    ]
}

fn pep8_naming() -> Vec<RuleDef> {
    vec![
        RuleDef::new("N801", "invalid-class-name")
            .description("Class name should use CapWords convention"),
        RuleDef::new("N802", "invalid-function-name")
            .description("Function name should be lowercase"),
        RuleDef::new("N803", "invalid-argument-name")
            .description("Argument name should be lowercase"),
        RuleDef::new("N806", "non-lowercase-variable-in-function")
            .description("Variable in function should be lowercase"),
    ]
}

fn flake8_pytest_style() -> Vec<RuleDef> {
    vec![
        RuleDef::new("PT001", "pytest-fixture-incorrect-parentheses-style")
            .description("Use `@pytest.fixture` with consistent parentheses")
            .option("flake8-pytest-style.fixture-parentheses"),
        RuleDef::new("PT004", "pytest-missing-fixture-name-underscore")
            .description("Fixture does not return anything, add leading underscore")
            .stability(Stability::Deprecated),
        RuleDef::new("PT006", "pytest-parametrize-names-wrong-type")
            .description("Wrong type passed to first argument of `pytest.mark.parametrize`")
            .option("flake8-pytest-style.parametrize-names-type"),
        RuleDef::new("PT007", "pytest-parametrize-values-wrong-type")
            .description("Wrong values type in `pytest.mark.parametrize`")
            .option("flake8-pytest-style.parametrize-values-type"),
        RuleDef::new("PT009", "pytest-unittest-assertion")
            .description("Use a regular `assert` instead of unittest-style assertions"),
        RuleDef::new("PT011", "pytest-raises-too-broad")
            .description("`pytest.raises()` is too broad, set the `match` parameter")
            .option("flake8-pytest-style.raises-require-match-for"),
        RuleDef::new("PT018", "pytest-composite-assertion")
            .description("Assertion should be broken down into multiple parts"),
        RuleDef::new("PT023", "pytest-incorrect-mark-parentheses-style")
            .description("Use `@pytest.mark.foo` with consistent parentheses")
            .option("flake8-pytest-style.mark-parentheses"),
    ]
}

fn flake8_bandit() -> Vec<RuleDef> {
    vec![
        RuleDef::new("S101", "assert")
            .description("Use of `assert` detected"),
        RuleDef::new("S105", "hardcoded-password-string")
            .description("Possible hardcoded password assigned to a variable"),
        RuleDef::new("S311", "suspicious-non-cryptographic-random-usage")
            .description("Standard pseudo-random generators are not suitable for cryptography"),
        RuleDef::new("S603", "subprocess-without-shell-equals-true")
            .description("`subprocess` call: check for execution of untrusted input"),
    ]
}

fn pyupgrade() -> Vec<RuleDef> {
    vec![
        RuleDef::new("UP006", "non-pep585-annotation")
            .description("Use `list` instead of `List` for type annotation")
            .option("pyupgrade.keep-runtime-typing"),
        RuleDef::new("UP007", "non-pep604-annotation")
            .description("Use `X | Y` for type annotations")
            .option("pyupgrade.keep-runtime-typing"),
        RuleDef::new("UP008", "super-call-with-parameters")
            .description("Use `super()` instead of `super(__class__, self)`"),
        RuleDef::new("UP032", "f-string")
            .description("Use f-string instead of `format` call"),
        RuleDef::new("UP035", "deprecated-import")
            .description("Import from a deprecated location"),
        RuleDef::new("UP040", "non-pep695-type-alias")
            .description("Type alias uses `TypeAlias` annotation instead of the `type` keyword")
            .stability(Stability::Preview),
    ]
}

fn pycodestyle_warnings() -> Vec<RuleDef> {
    vec![
        RuleDef::new("W191", "tab-indentation")
            .description("Indentation contains tabs"),
        RuleDef::new("W291", "trailing-whitespace")
            .description("Trailing whitespace"),
        RuleDef::new("W292", "missing-newline-at-end-of-file")
            .description("No newline at end of file"),
        RuleDef::new("W293", "blank-line-with-whitespace")
            .description("Blank line contains whitespace"),
        RuleDef::new("W605", "invalid-escape-sequence")
            .description("Invalid escape sequence"),
    ]
}
