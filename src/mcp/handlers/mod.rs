//! MCP tool handler implementations.
//!
//! One module per tool:
//! - `tokens`   -- read_tokens
//! - `validate` -- validate_component_tokens
//! - `generate` -- generate_component
//! - `figma`    -- process_figma_export
//! - `autohtml` -- convert_autohtml
//!
//! Handlers return `Result<McpToolResult, String>`; an `Err` is wrapped
//! at the dispatch boundary into an `Error: <message>` tool result, so a
//! handler failure never kills the serve loop.

pub mod autohtml;
pub mod figma;
pub mod generate;
pub mod tokens;
pub mod validate;

use serde::{Deserialize, Serialize};

/// Result type returned by all MCP tool handlers.
///
/// Matches the MCP protocol's tool result format:
/// ```json
/// {
///   "content": [{ "type": "text", "text": "..." }],
///   "isError": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolResult {
    /// Content items. Every tool here produces text.
    pub content: Vec<McpContent>,
    /// Whether this result represents an error.
    #[serde(rename = "isError", default)]
    pub is_error: bool,
}

/// A single content item in an MCP tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum McpContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl McpToolResult {
    /// Create a successful text result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Create an error text result.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// The concatenated text of this result. Test helper, mostly.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .map(|item| match item {
                McpContent::Text { text } => text.as_str(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcp_tool_result_text() {
        let result = McpToolResult::text("hello");
        assert!(!result.is_error);
        assert_eq!(result.text_content(), "hello");
    }

    #[test]
    fn test_mcp_tool_result_error() {
        let result = McpToolResult::error("something failed");
        assert!(result.is_error);
        assert_eq!(result.text_content(), "something failed");
    }

    #[test]
    fn test_mcp_tool_result_serialize() {
        let result = McpToolResult::text("test");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"type\":\"text\""));
        assert!(json.contains("\"test\""));
        assert!(json.contains("\"isError\":false"));
    }
}
