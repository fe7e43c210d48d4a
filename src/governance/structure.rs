//! Structural analysis of raw markup.
//!
//! Lexical only -- there is no HTML parser here. Element counting and
//! class extraction are regex scans; nesting depth is a plain `<`/`>`
//! bracket counter that does not distinguish opening, closing, or
//! self-closing tags. The counter's literal output is part of the
//! tool's observable contract, so it stays as-is.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shape summary of a markup string. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralInfo {
    pub element_count: usize,
    pub max_depth: usize,
    /// `class="..."` values in order of appearance, duplicates kept.
    pub class_names: Vec<String>,
}

static OPENING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<[a-z][a-z0-9]*").expect("pattern must compile"));

static CLASS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)class="([^"]*)""#).expect("pattern must compile"));

/// Analyze a markup string.
pub fn analyze(markup: &str) -> StructuralInfo {
    let element_count = OPENING_TAG.find_iter(markup).count();

    // Bracket counter: every `<` increments, every `>` decrements. Closing
    // tags therefore cancel immediately and the recorded maximum is the
    // deepest run of unbalanced `<` seen, not DOM depth.
    let mut depth: i64 = 0;
    let mut max_depth: i64 = 0;
    for ch in markup.chars() {
        match ch {
            '<' => {
                depth += 1;
                if depth > max_depth {
                    max_depth = depth;
                }
            }
            '>' => depth -= 1,
            _ => {}
        }
    }

    let class_names = CLASS_ATTR
        .captures_iter(markup)
        .map(|caps| caps[1].to_string())
        .collect();

    StructuralInfo {
        element_count,
        max_depth: max_depth.max(0) as usize,
        class_names,
    }
}
