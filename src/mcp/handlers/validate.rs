//! `validate_component_tokens` -- scan component source against the
//! governance rule set and report the result.

use serde_json::Value;

use super::McpToolResult;
use crate::governance::report::{build_report, ReportContext};
use crate::governance::rules::{framework_qualified_finding, VALIDATION_RULES};
use crate::governance::scanner::scan;
use crate::model::Framework;

pub fn handle_validate_component_tokens(args: &Value) -> Result<McpToolResult, String> {
    let code = args
        .get("componentCode")
        .and_then(Value::as_str)
        .ok_or_else(|| "componentCode is required".to_string())?;
    let framework = args
        .get("framework")
        .and_then(Value::as_str)
        .and_then(Framework::from_tag)
        .ok_or_else(|| "framework is required".to_string())?;

    let mut result = scan(code, &VALIDATION_RULES);
    if let Some(finding) = framework_qualified_finding(framework, code) {
        result.push(finding);
    }

    let report = build_report(
        &result,
        &ReportContext {
            heading: "Token Governance Report",
            framework: Some(framework.as_tag()),
            step: None,
        },
    );
    Ok(McpToolResult::text(report))
}
