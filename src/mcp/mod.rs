//! MCP (Model Context Protocol) server implementation.
//!
//! Provides a JSON-RPC over stdio server that exposes the design-token
//! tools to Claude Code and other MCP clients.
//!
//! Architecture:
//! - `server.rs` -- JSON-RPC protocol handler (stdin/stdout)
//! - `tools.rs`  -- static tool registry and input schemas
//! - `schema.rs` -- argument validation against those schemas
//! - `handlers/` -- one handler module per tool

pub mod handlers;
pub mod schema;
pub mod server;
pub mod tools;
