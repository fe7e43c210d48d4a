//! `process_figma_export` -- extract tokens and components from a
//! pre-fetched Figma export JSON file and render a markdown report.

use serde_json::Value;
use tracing::info;

use super::McpToolResult;
use crate::codegen::templates::render_component;
use crate::codegen::DEFAULT_CATEGORIES;
use crate::figma::{
    extract_color_tokens, extract_components, extract_spacing_tokens, extract_typography_tokens,
    TokenEntry,
};
use crate::model::Framework;

pub async fn handle_process_figma_export(args: &Value) -> Result<McpToolResult, String> {
    let path = args
        .get("figmaFilePath")
        .and_then(Value::as_str)
        .ok_or_else(|| "figmaFilePath is required".to_string())?;
    let extract_tokens = args
        .get("extractTokens")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    let generate_components = args
        .get("generateComponents")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let output_dir = args
        .get("outputDir")
        .and_then(Value::as_str)
        .unwrap_or("./tokens");

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(_) => {
            return Ok(McpToolResult::text(format!(
                "Figma export not found at {}.",
                path
            )));
        }
    };

    let doc: Value = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to process Figma export: {}", e))?;

    let mut out = String::from("=== Figma Export Report ===\n");
    out.push_str(&format!("Source: {}\n\n", path));

    if extract_tokens {
        let colors = extract_color_tokens(&doc);
        let spacing = extract_spacing_tokens(&doc);
        let typography = extract_typography_tokens(&doc);

        token_section(&mut out, "Color Tokens", &colors);
        token_section(&mut out, "Spacing Tokens", &spacing);
        token_section(&mut out, "Typography Tokens", &typography);

        let total = colors.len() + spacing.len() + typography.len();
        info!("[process_figma_export] Extracted {} tokens from {}", total, path);
        out.push_str(&format!("Tokens extracted: {}\n\n", total));
    }

    let components = extract_components(&doc);
    out.push_str(&format!("## Components ({})\n\n", components.len()));
    if components.is_empty() {
        out.push_str("(none found)\n\n");
    } else {
        for component in &components {
            if component.description.is_empty() {
                out.push_str(&format!("- {}\n", component.name));
            } else {
                out.push_str(&format!("- {} -- {}\n", component.name, component.description));
            }
        }
        out.push('\n');
    }

    if generate_components {
        for component in &components {
            let ident = component_ident(&component.name);
            out.push_str(&format!("## Generated: {}\n\n", ident));
            out.push_str(&format!(
                "```tsx\n{}```\n\n",
                render_component(&ident, Framework::React, &DEFAULT_CATEGORIES)
            ));
        }
    }

    out.push_str(&format!(
        "Output directory: {} (token files are not written yet; extraction is read-only)\n",
        output_dir
    ));
    Ok(McpToolResult::text(out))
}

fn token_section(out: &mut String, title: &str, tokens: &[TokenEntry]) {
    out.push_str(&format!("## {} ({})\n\n", title, tokens.len()));
    if tokens.is_empty() {
        out.push_str("(none found)\n\n");
        return;
    }
    for token in tokens {
        out.push_str(&format!("- {}: {}\n", token.name, token.value));
    }
    out.push('\n');
}

/// Collapse a Figma display name into a PascalCase identifier usable as
/// a component name ("primary button" -> "PrimaryButton").
fn component_ident(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    async fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("mcp_test_figma");
        let _ = tokio::fs::create_dir_all(&dir).await;
        let path = dir.join(name);
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    const EXPORT: &str = r##"{
        "styles": {
            "colors": { "Primary Base": "#0055ff" },
            "grids": { "Scale Md": { "section": "spacing", "value": "16px" } },
            "text": { "Body": { "value": "Inter 16/24" } }
        },
        "components": {
            "1:1": { "name": "primary button", "description": "Main CTA" }
        }
    }"##;

    #[tokio::test]
    async fn test_missing_file_is_not_an_error() {
        let args = json!({ "figmaFilePath": "/nonexistent/export.json" });
        let result = handle_process_figma_export(&args).await.unwrap();
        assert!(!result.is_error);
        assert!(result.text_content().contains("not found"));
    }

    #[tokio::test]
    async fn test_malformed_json_fails_with_context() {
        let path = scratch_file("bad.json", "not json at all").await;
        let args = json!({ "figmaFilePath": path.to_str().unwrap() });
        let err = handle_process_figma_export(&args).await.unwrap_err();
        assert!(err.starts_with("Failed to process Figma export:"));
    }

    #[tokio::test]
    async fn test_report_sections_and_counts() {
        let path = scratch_file("ok.json", EXPORT).await;
        let args = json!({ "figmaFilePath": path.to_str().unwrap() });
        let result = handle_process_figma_export(&args).await.unwrap();
        let text = result.text_content();
        assert!(text.contains("## Color Tokens (1)"));
        assert!(text.contains("- primary.base: #0055ff"));
        assert!(text.contains("## Spacing Tokens (1)"));
        assert!(text.contains("## Typography Tokens (1)"));
        assert!(text.contains("Tokens extracted: 3"));
        assert!(text.contains("## Components (1)"));
        assert!(text.contains("- primary button -- Main CTA"));
        // Default flags: no generation, default output dir echoed.
        assert!(!text.contains("## Generated:"));
        assert!(text.contains("Output directory: ./tokens"));
    }

    #[tokio::test]
    async fn test_empty_document_reports_empty_sections() {
        let path = scratch_file("empty.json", "{}").await;
        let args = json!({ "figmaFilePath": path.to_str().unwrap() });
        let result = handle_process_figma_export(&args).await.unwrap();
        let text = result.text_content();
        assert!(!result.is_error);
        assert!(text.contains("Tokens extracted: 0"));
        assert!(text.contains("## Components (0)"));
    }

    #[tokio::test]
    async fn test_extract_tokens_false_skips_token_sections() {
        let path = scratch_file("ok2.json", EXPORT).await;
        let args = json!({
            "figmaFilePath": path.to_str().unwrap(),
            "extractTokens": false
        });
        let result = handle_process_figma_export(&args).await.unwrap();
        let text = result.text_content();
        assert!(!text.contains("## Color Tokens"));
        assert!(text.contains("## Components (1)"));
    }

    #[tokio::test]
    async fn test_generate_components_renders_react_stub() {
        let path = scratch_file("gen.json", EXPORT).await;
        let args = json!({
            "figmaFilePath": path.to_str().unwrap(),
            "generateComponents": true
        });
        let result = handle_process_figma_export(&args).await.unwrap();
        let text = result.text_content();
        assert!(text.contains("## Generated: PrimaryButton"));
        assert!(text.contains("```tsx"));
        assert!(text.contains("export const PrimaryButton"));
    }

    #[test]
    fn test_component_ident() {
        assert_eq!(component_ident("primary button"), "PrimaryButton");
        assert_eq!(component_ident("Card"), "Card");
        assert_eq!(component_ident("  nav  bar "), "NavBar");
    }
}
