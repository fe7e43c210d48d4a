//! Forbidden-pattern rule sets for token governance.
//!
//! Two variants exist: the full validation set used by
//! `validate_component_tokens`, and the shorter AutoHTML set used by
//! `convert_autohtml`. Rule order is part of the contract -- findings
//! within a line follow it. Patterns compile once and are shared
//! read-only across all calls.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Finding, Severity};
use crate::model::Framework;

/// A single forbidden-pattern rule.
pub struct Rule {
    pub pattern: Regex,
    pub category: &'static str,
    pub severity: Severity,
    pub message: &'static str,
}

fn rule(
    pattern: &str,
    category: &'static str,
    severity: Severity,
    message: &'static str,
) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("rule pattern must compile"),
        category,
        severity,
        message,
    }
}

/// Rules applied by `validate_component_tokens`.
pub static VALIDATION_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(
            r"style=\{\{",
            "inline-style-object",
            Severity::Error,
            "Inline style object bypasses design tokens; use token-backed classes",
        ),
        rule(
            r#"style\s*=\s*["']"#,
            "inline-style-attr",
            Severity::Error,
            "Inline style attribute bypasses design tokens; use token-backed classes",
        ),
        rule(
            r"#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b",
            "hardcoded-color",
            Severity::Error,
            "Hardcoded hex color; reference a color token instead",
        ),
        rule(
            r"(\d+\.?\d*|\.\d+)(px|rem|em|pt|vh|vw)\b",
            "hardcoded-unit",
            Severity::Warning,
            "Hardcoded length; reference a spacing token instead",
        ),
        rule(
            r#"(?i)font-?family\s*[:=]?\s*['"]?\s*(arial|helvetica|times|courier|georgia|verdana)"#,
            "hardcoded-font",
            Severity::Error,
            "Hardcoded font family; reference a typography token instead",
        ),
        rule(
            r#"class(Name)?\s*=\s*["'][^"']*\s+[^"']*["']"#,
            "multi-class",
            Severity::Warning,
            "Multiple class names on one element; prefer a single token-mapped class",
        ),
    ]
});

/// Rules applied by `convert_autohtml`. AutoHTML output is raw markup, so
/// the length rule requires a leading digit and the font list is shorter.
pub static AUTOHTML_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(
            r"style=\{\{",
            "inline-style-object",
            Severity::Error,
            "Inline style object bypasses design tokens; use token-backed classes",
        ),
        rule(
            r#"style\s*=\s*["']"#,
            "inline-style-attr",
            Severity::Error,
            "Inline style attribute bypasses design tokens; use token-backed classes",
        ),
        rule(
            r"#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b",
            "hardcoded-color",
            Severity::Error,
            "Hardcoded hex color; reference a color token instead",
        ),
        rule(
            r"\d+(px|rem|em|pt)\b",
            "hardcoded-unit",
            Severity::Warning,
            "Hardcoded pixel length; map to a spacing token during conversion",
        ),
        rule(
            r#"(?i)font-?family\s*[:=]?\s*['"]?\s*(arial|helvetica|times|courier)"#,
            "hardcoded-font",
            Severity::Warning,
            "Hardcoded font family; map to a typography token during conversion",
        ),
    ]
});

static FRAMEWORK_QUALIFIED_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"token\.[A-Za-z][A-Za-z0-9_]*\.react").expect("rule pattern must compile")
});

/// Validator-only check: React sources must not reference
/// framework-qualified token paths like `token.padding.react`.
///
/// The finding carries no line number -- it applies to the source as a
/// whole and is appended after all line findings.
pub fn framework_qualified_finding(framework: Framework, source: &str) -> Option<Finding> {
    if framework != Framework::React {
        return None;
    }
    if !FRAMEWORK_QUALIFIED_TOKEN.is_match(source) {
        return None;
    }
    Some(Finding {
        category: "framework-qualified-token".into(),
        line: None,
        severity: Severity::Error,
        message: "Token paths must stay framework-agnostic; drop the `.react` qualifier".into(),
    })
}
