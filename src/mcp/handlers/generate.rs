//! `generate_component` -- render a templated component/story pair.

use serde_json::Value;

use super::McpToolResult;
use crate::codegen::stories::render_story;
use crate::codegen::templates::render_component;
use crate::codegen::{default_token_path, fence_language, DEFAULT_CATEGORIES};
use crate::model::{Framework, TokenCategory};

pub fn handle_generate_component(args: &Value) -> Result<McpToolResult, String> {
    let name = args
        .get("componentName")
        .and_then(Value::as_str)
        .ok_or_else(|| "componentName is required".to_string())?;
    let description = args
        .get("description")
        .and_then(Value::as_str)
        .ok_or_else(|| "description is required".to_string())?;
    let framework = args
        .get("framework")
        .and_then(Value::as_str)
        .and_then(Framework::from_tag)
        .unwrap_or(Framework::React);
    let categories: Vec<TokenCategory> = match args.get("tokenCategories").and_then(Value::as_array)
    {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(TokenCategory::from_tag)
            .collect(),
        None => DEFAULT_CATEGORIES.to_vec(),
    };

    let component = render_component(name, framework, &categories);
    let story = render_story(name, framework);

    let mut out = String::new();
    out.push_str(&format!("=== Component Generated: {} ===\n", name));
    out.push_str(&format!("Framework: {}\n", framework.as_tag()));
    out.push_str(&format!("Description: {}\n\n", description));

    out.push_str("## Component\n\n");
    out.push_str(&format!("```{}\n{}```\n\n", fence_language(framework), component));

    out.push_str("## Story\n\n");
    out.push_str(&format!("```ts\n{}```\n\n", story));

    out.push_str("## Token Mappings\n\n");
    if categories.is_empty() {
        out.push_str("(no token categories requested)\n");
    } else {
        for category in &categories {
            out.push_str(&format!(
                "- {} -> {}\n",
                category.as_tag(),
                default_token_path(*category)
            ));
        }
    }
    Ok(McpToolResult::text(out))
}
