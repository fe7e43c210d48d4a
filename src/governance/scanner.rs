//! Line scanner: applies a rule set to each line of a text input.

use super::rules::Rule;
use super::{Finding, ScanResult};

/// Scan `text` line by line against `rules`.
///
/// Line numbers are 1-based. A line may match several rules; each rule
/// contributes at most one finding per line regardless of how many times
/// it matches within that line. Findings are ordered line-major, rule
/// order within a line. Pure function of its inputs.
pub fn scan(text: &str, rules: &[Rule]) -> ScanResult {
    let mut result = ScanResult::default();
    for (idx, line) in text.lines().enumerate() {
        for rule in rules {
            if rule.pattern.is_match(line) {
                result.push(Finding {
                    category: rule.category.to_string(),
                    line: Some(idx + 1),
                    severity: rule.severity,
                    message: rule.message.to_string(),
                });
            }
        }
    }
    result
}
