//! Report builder: renders a `ScanResult` into the textual governance
//! report returned by the validation and conversion tools.
//!
//! Output is deterministic for a given scan -- no timestamps, no
//! reordering. Findings print in discovery order, never grouped by
//! severity or category.

use super::{ScanResult, Severity};

const ERROR_ICON: &str = "\u{274c}"; // ❌
const WARNING_ICON: &str = "\u{26a0}\u{fe0f}"; // ⚠️

/// Fixed checklist shown when a scan is clean.
const PASS_CHECKLIST: [&str; 4] = [
    "No inline styles",
    "Colors come from color tokens",
    "Dimensions come from spacing tokens",
    "Typography comes from typography tokens",
];

/// Fixed remediation list shown when a scan has findings. Shared verbatim
/// by every call site.
const REQUIRED_ACTIONS: [&str; 4] = [
    "Replace inline styles with token-backed classes",
    "Map hardcoded colors to color tokens",
    "Map hardcoded dimensions to spacing tokens",
    "Re-run validation until the report passes",
];

/// Context lines printed at the top of a report.
pub struct ReportContext<'a> {
    pub heading: &'a str,
    pub framework: Option<&'a str>,
    pub step: Option<&'a str>,
}

/// Render a scan result as a governance report.
pub fn build_report(scan: &ScanResult, ctx: &ReportContext) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", ctx.heading));
    if let Some(framework) = ctx.framework {
        out.push_str(&format!("Framework: {}\n", framework));
    }
    if let Some(step) = ctx.step {
        out.push_str(&format!("Step: {}\n", step));
    }
    out.push('\n');
    out.push_str(&format!(
        "Errors: {} | Warnings: {}\n\n",
        scan.error_count, scan.warning_count
    ));

    if scan.is_clean() {
        out.push_str("\u{2705} PASS -- no token governance violations\n");
        out.push_str("\nChecklist:\n");
        for item in PASS_CHECKLIST {
            out.push_str(&format!("- [x] {}\n", item));
        }
        return out;
    }

    out.push_str(&format!(
        "{} FAIL -- token governance violations found\n\n",
        ERROR_ICON
    ));
    for finding in &scan.findings {
        let icon = match finding.severity {
            Severity::Error => ERROR_ICON,
            Severity::Warning => WARNING_ICON,
        };
        match finding.line {
            Some(line) => out.push_str(&format!(
                "{} [{}] line {}: {}\n",
                icon, finding.category, line, finding.message
            )),
            None => out.push_str(&format!(
                "{} [{}] {}\n",
                icon, finding.category, finding.message
            )),
        }
    }

    out.push_str("\nRequired Actions:\n");
    for (i, action) in REQUIRED_ACTIONS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, action));
    }
    out
}
