//! `read_tokens` -- read the design-token JSON file and render it.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use super::McpToolResult;
use crate::model::TokenCategory;

/// Read the token file (argument override, else the configured default)
/// and render it as pretty-printed JSON, optionally restricted to one
/// category's top-level key.
///
/// A missing file is a normal text result, not an error; malformed JSON
/// is a handler failure surfaced as `Failed to read tokens: ...`.
pub async fn handle_read_tokens(
    args: &Value,
    default_path: &Path,
) -> Result<McpToolResult, String> {
    let path = args
        .get("tokenPath")
        .and_then(Value::as_str)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path.to_path_buf());
    let category = args
        .get("category")
        .and_then(Value::as_str)
        .and_then(TokenCategory::from_tag);

    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(_) => {
            return Ok(McpToolResult::text(format!(
                "Token file not found at {}. Pass tokenPath or set DESIGN_TOKENS_FILE.",
                path.display()
            )));
        }
    };

    let tokens: Value =
        serde_json::from_str(&raw).map_err(|e| format!("Failed to read tokens: {}", e))?;

    let selected = match category {
        Some(cat) => match tokens.get(cat.as_tag()) {
            Some(sub) => sub.clone(),
            None => {
                return Ok(McpToolResult::text(format!(
                    "No {} tokens found in {}.",
                    cat.as_tag(),
                    path.display()
                )));
            }
        },
        None => tokens,
    };

    let rendered = serde_json::to_string_pretty(&selected)
        .map_err(|e| format!("Failed to read tokens: {}", e))?;

    info!("[read_tokens] Rendered {} ({} bytes)", path.display(), rendered.len());

    let mut out = String::from("=== Design Tokens ===\n");
    out.push_str(&format!("Source: {}\n", path.display()));
    if let Some(cat) = category {
        out.push_str(&format!("Category: {}\n", cat.as_tag()));
    }
    out.push('\n');
    out.push_str(&rendered);
    out.push('\n');
    Ok(McpToolResult::text(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("mcp_test_tokens");
        let _ = tokio::fs::create_dir_all(&dir).await;
        let path = dir.join(name);
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_missing_file_is_not_an_error() {
        let args = json!({ "tokenPath": "/nonexistent/tokens.json" });
        let result = handle_read_tokens(&args, Path::new("./tokens/design-tokens.json"))
            .await
            .unwrap();
        assert!(!result.is_error);
        assert!(result.text_content().contains("not found"));
    }

    #[tokio::test]
    async fn test_reads_and_renders_tokens() {
        let path = scratch_file(
            "ok.json",
            r##"{ "color": { "primary": { "base": "#0055ff" } } }"##,
        )
        .await;
        let args = json!({ "tokenPath": path.to_str().unwrap() });
        let result = handle_read_tokens(&args, Path::new("unused")).await.unwrap();
        assert!(!result.is_error);
        let text = result.text_content();
        assert!(text.contains("=== Design Tokens ==="));
        assert!(text.contains("#0055ff"));
    }

    #[tokio::test]
    async fn test_category_filter_selects_subtree() {
        let path = scratch_file(
            "cats.json",
            r##"{ "color": { "primary": "#fff" }, "spacing": { "md": "16px" } }"##,
        )
        .await;
        let args = json!({ "tokenPath": path.to_str().unwrap(), "category": "spacing" });
        let result = handle_read_tokens(&args, Path::new("unused")).await.unwrap();
        let text = result.text_content();
        assert!(text.contains("Category: spacing"));
        assert!(text.contains("16px"));
        assert!(!text.contains("#fff"));
    }

    #[tokio::test]
    async fn test_absent_category_is_not_an_error() {
        let path = scratch_file("nocat.json", r#"{ "color": {} }"#).await;
        let args = json!({ "tokenPath": path.to_str().unwrap(), "category": "motion" });
        let result = handle_read_tokens(&args, Path::new("unused")).await.unwrap();
        assert!(!result.is_error);
        assert!(result.text_content().contains("No motion tokens"));
    }

    #[tokio::test]
    async fn test_malformed_json_fails_with_context() {
        let path = scratch_file("bad.json", "{ not json").await;
        let args = json!({ "tokenPath": path.to_str().unwrap() });
        let err = handle_read_tokens(&args, Path::new("unused"))
            .await
            .unwrap_err();
        assert!(err.starts_with("Failed to read tokens:"));
    }
}
