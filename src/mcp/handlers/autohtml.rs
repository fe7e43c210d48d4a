//! `convert_autohtml` -- analyze AutoHTML markup and render a templated
//! replacement component plus a conversion report.

use serde_json::Value;

use super::McpToolResult;
use crate::codegen::templates::render_component;
use crate::codegen::{default_token_path, fence_language, DEFAULT_CATEGORIES};
use crate::governance::report::{build_report, ReportContext};
use crate::governance::rules::AUTOHTML_RULES;
use crate::governance::scanner::scan;
use crate::governance::structure::analyze;
use crate::model::Framework;

pub fn handle_convert_autohtml(args: &Value) -> Result<McpToolResult, String> {
    let code = args
        .get("autohtmlCode")
        .and_then(Value::as_str)
        .ok_or_else(|| "autohtmlCode is required".to_string())?;
    let framework = args
        .get("framework")
        .and_then(Value::as_str)
        .and_then(Framework::from_tag)
        .unwrap_or(Framework::React);
    let apply_tokens = args
        .get("applyTokens")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    let remove_inline_styles = args
        .get("removeInlineStyles")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    let name = args
        .get("componentName")
        .and_then(Value::as_str)
        .unwrap_or("ConvertedComponent");

    let info = analyze(code);
    let result = scan(code, &AUTOHTML_RULES);

    let mut out = String::from("=== AutoHTML Conversion ===\n");
    out.push_str(&format!("Framework: {}\n", framework.as_tag()));
    out.push_str(&format!("Component: {}\n\n", name));

    out.push_str("## Structure\n\n");
    out.push_str(&format!("Elements: {}\n", info.element_count));
    out.push_str(&format!("Max nesting depth: {}\n", info.max_depth));
    if info.class_names.is_empty() {
        out.push_str("Class names: (none)\n\n");
    } else {
        out.push_str(&format!("Class names: {}\n\n", info.class_names.join(", ")));
    }

    out.push_str("## Violations\n\n");
    out.push_str(&build_report(
        &result,
        &ReportContext {
            heading: "Token Governance Report",
            framework: Some(framework.as_tag()),
            step: Some("AutoHTML conversion"),
        },
    ));
    out.push('\n');

    out.push_str("## Generated Component\n\n");
    out.push_str(&format!(
        "```{}\n{}```\n\n",
        fence_language(framework),
        render_component(name, framework, &DEFAULT_CATEGORIES)
    ));

    out.push_str("## Conversion Notes\n\n");
    if remove_inline_styles {
        out.push_str("- Inline styles are dropped; styling moves to token-backed classes\n");
    } else {
        out.push_str(
            "- Inline styles left in place (removeInlineStyles=false); migrate them manually\n",
        );
    }
    if apply_tokens {
        out.push_str("- Suggested token mappings:\n");
        for category in DEFAULT_CATEGORIES {
            out.push_str(&format!(
                "  - {} -> {}\n",
                category.as_tag(),
                default_token_path(category)
            ));
        }
    } else {
        out.push_str("- Token mapping skipped (applyTokens=false)\n");
    }
    Ok(McpToolResult::text(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MARKUP: &str = "<div class=\"hero\" style=\"color:#e3e3e3\">\n  <span class=\"hero\">Hi</span>\n</div>";

    #[test]
    fn test_structure_section_reflects_markup() {
        let args = json!({ "autohtmlCode": MARKUP });
        let result = handle_convert_autohtml(&args).unwrap();
        let text = result.text_content();
        assert!(text.contains("Elements: 2"));
        assert!(text.contains("Max nesting depth: 1"));
        assert!(text.contains("Class names: hero, hero"));
    }

    #[test]
    fn test_violations_reported_with_step_label() {
        let args = json!({ "autohtmlCode": MARKUP });
        let result = handle_convert_autohtml(&args).unwrap();
        let text = result.text_content();
        assert!(text.contains("Step: AutoHTML conversion"));
        assert!(text.contains("Errors: 2 | Warnings: 0"));
        assert!(text.contains("[inline-style-attr] line 1:"));
        assert!(text.contains("[hardcoded-color] line 1:"));
        assert!(text.contains("Required Actions:"));
    }

    #[test]
    fn test_defaults_generate_react_component() {
        let args = json!({ "autohtmlCode": "<div></div>" });
        let result = handle_convert_autohtml(&args).unwrap();
        let text = result.text_content();
        assert!(text.contains("Component: ConvertedComponent"));
        assert!(text.contains("```tsx"));
        assert!(text.contains("export const ConvertedComponent"));
        assert!(text.contains("- Inline styles are dropped"));
        assert!(text.contains("- color -> color.primary.base"));
    }

    #[test]
    fn test_flags_flip_conversion_notes() {
        let args = json!({
            "autohtmlCode": "<div></div>",
            "applyTokens": false,
            "removeInlineStyles": false
        });
        let result = handle_convert_autohtml(&args).unwrap();
        let text = result.text_content();
        assert!(text.contains("Inline styles left in place"));
        assert!(text.contains("Token mapping skipped"));
        assert!(!text.contains("Suggested token mappings"));
    }

    #[test]
    fn test_named_vue_conversion() {
        let args = json!({
            "autohtmlCode": "<div class=\"card\"></div>",
            "framework": "vue",
            "componentName": "Card"
        });
        let result = handle_convert_autohtml(&args).unwrap();
        let text = result.text_content();
        assert!(text.contains("Framework: vue"));
        assert!(text.contains("Component: Card"));
        assert!(text.contains("```vue"));
    }

    #[test]
    fn test_clean_markup_passes_governance() {
        let args = json!({ "autohtmlCode": "<div class=\"card\"><p>ok</p></div>" });
        let result = handle_convert_autohtml(&args).unwrap();
        let text = result.text_content();
        assert!(text.contains("Errors: 0 | Warnings: 0"));
        assert!(text.contains("PASS"));
    }
}
