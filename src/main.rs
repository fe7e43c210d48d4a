//! Standalone MCP server binary for design-token governance.
//!
//! Spawned by an MCP client (e.g. Claude Code) as a tool server. It
//! communicates via **stdio** (JSON-RPC 2.0); diagnostic logs go to
//! stderr because stdout carries the protocol frames.
//!
//! Environment variables:
//! - `DESIGN_TOKENS_FILE` -- default token JSON file for `read_tokens`
//! - `RUST_LOG` -- tracing filter (defaults to `info`)

use std::path::PathBuf;

use design_tokens_mcp::mcp::server::{run_server, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize logging to stderr (stdout is reserved for JSON-RPC).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let tokens_path = std::env::var("DESIGN_TOKENS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_tokens_path());

    if let Err(e) = run_server(ServerConfig { tokens_path }).await {
        eprintln!("[MCP] Server error: {}", e);
        std::process::exit(1);
    }
}

/// Default token file location (project-relative, matching the documented
/// layout of a design-system repo).
fn default_tokens_path() -> PathBuf {
    PathBuf::from("./tokens/design-tokens.json")
}
