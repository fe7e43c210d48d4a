//! MCP JSON-RPC protocol handler over stdio.
//!
//! Reads JSON-RPC requests from stdin, routes tool calls to the
//! appropriate handler, and sends JSON-RPC responses to stdout.
//! Implements the MCP protocol methods: `initialize`, `initialized`,
//! `tools/list`, `tools/call`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

use super::handlers::{self, McpToolResult};
use super::schema::{format_violations, validate_args};
use super::tools::{schema_for, ToolName, TOOL_DEFS};

// ---------------------------------------------------------------------------
// JSON-RPC message types
// ---------------------------------------------------------------------------

/// Incoming JSON-RPC request.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// Outgoing JSON-RPC response.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// MCP Server
// ---------------------------------------------------------------------------

/// Immutable server configuration, shared read-only across all calls.
pub struct ServerConfig {
    /// Default token file used by `read_tokens` when no path is supplied.
    pub tokens_path: PathBuf,
}

/// Run the MCP server on stdin/stdout.
///
/// This is the main entry point. It reads JSON-RPC messages line-by-line
/// from stdin, dispatches them, and writes responses to stdout.
/// Diagnostic logs go to stderr.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    let reader = BufReader::new(stdin);
    let mut writer = stdout;
    let mut lines = reader.lines();

    eprintln!("Design tokens MCP server running");

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        // Parse JSON-RPC request
        let request: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(e) => {
                let resp = JsonRpcResponse::error(
                    Value::Null,
                    -32700, // Parse error
                    format!("Invalid JSON: {}", e),
                );
                write_response(&mut writer, &resp).await;
                continue;
            }
        };

        // Validate JSON-RPC version
        if request.jsonrpc != "2.0" {
            if let Some(id) = request.id {
                let resp = JsonRpcResponse::error(id, -32600, "Invalid JSON-RPC version");
                write_response(&mut writer, &resp).await;
            }
            continue;
        }

        let response = handle_request(&config, &request).await;

        // Notifications (no id) don't get a response
        if request.id.is_none() {
            continue;
        }

        if let Some(resp) = response {
            write_response(&mut writer, &resp).await;
        }
    }

    eprintln!("MCP server stdin closed, shutting down");
    Ok(())
}

/// Handle a single JSON-RPC request and return a response.
async fn handle_request(
    config: &ServerConfig,
    request: &JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    let id = request.id.clone().unwrap_or(Value::Null);

    match request.method.as_str() {
        "initialize" => Some(handle_initialize(id)),
        "initialized" => {
            info!("[MCP] Client sent 'initialized' notification");
            None // notification, no response
        }
        "tools/list" => Some(handle_tools_list(id)),
        "tools/call" => Some(handle_tools_call(config, id, &request.params).await),
        "notifications/cancelled" => {
            // Client cancelled a request -- just log it
            info!("[MCP] Request cancelled: {:?}", request.params);
            None
        }
        _ => Some(JsonRpcResponse::error(
            id,
            -32601, // Method not found
            format!("Unknown method: {}", request.method),
        )),
    }
}

/// Handle `initialize` -- return server capabilities.
fn handle_initialize(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "design-tokens-mcp",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

/// Handle `tools/list` -- return the static tool definitions.
fn handle_tools_list(id: Value) -> JsonRpcResponse {
    let tools: Vec<Value> = TOOL_DEFS
        .iter()
        .map(|def| {
            json!({
                "name": def.name.as_str(),
                "description": def.description,
                "inputSchema": def.input_schema,
            })
        })
        .collect();

    JsonRpcResponse::success(id, json!({ "tools": tools }))
}

/// Handle `tools/call` -- dispatch to the appropriate tool handler.
async fn handle_tools_call(config: &ServerConfig, id: Value, params: &Value) -> JsonRpcResponse {
    let tool_name = params
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    if tool_name.is_empty() {
        return JsonRpcResponse::error(id, -32602, "Missing tool name in params");
    }

    let result = route_tool_call(config, &tool_name, &args).await;
    match serde_json::to_value(&result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, -32603, format!("Failed to serialize result: {}", e)),
    }
}

/// Route a tool call to its handler.
///
/// Unknown tools, schema violations, and handler failures all come back
/// as error tool results -- the serve loop never drops a call.
async fn route_tool_call(config: &ServerConfig, name: &str, args: &Value) -> McpToolResult {
    let tool = match ToolName::from_name(name) {
        Some(tool) => tool,
        None => return McpToolResult::error(format!("Error: Unknown tool: {}", name)),
    };

    let violations = validate_args(schema_for(tool), args);
    if !violations.is_empty() {
        return McpToolResult::error(format_violations(name, &violations));
    }

    let outcome = match tool {
        ToolName::ReadTokens => {
            handlers::tokens::handle_read_tokens(args, &config.tokens_path).await
        }
        ToolName::ValidateComponentTokens => {
            handlers::validate::handle_validate_component_tokens(args)
        }
        ToolName::GenerateComponent => handlers::generate::handle_generate_component(args),
        ToolName::ProcessFigmaExport => handlers::figma::handle_process_figma_export(args).await,
        ToolName::ConvertAutohtml => handlers::autohtml::handle_convert_autohtml(args),
    };

    match outcome {
        Ok(result) => result,
        Err(message) => {
            error!("[MCP] {} failed: {}", name, message);
            McpToolResult::error(format!("Error: {}", message))
        }
    }
}

/// Write a JSON-RPC response to stdout (one line).
async fn write_response<W: AsyncWriteExt + Unpin>(writer: &mut W, response: &JsonRpcResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            let line = format!("{}\n", json);
            if let Err(e) = writer.write_all(line.as_bytes()).await {
                error!("[MCP] Failed to write response: {}", e);
            }
            if let Err(e) = writer.flush().await {
                error!("[MCP] Failed to flush stdout: {}", e);
            }
        }
        Err(e) => {
            error!("[MCP] Failed to serialize response: {}", e);
        }
    }
}
