//! Design-token governance MCP server.
//!
//! A Model Context Protocol tool server exposing five design-system
//! operations: token reading, component validation against the
//! forbidden-pattern rule set, templated component generation, Figma
//! export processing, and AutoHTML conversion.
//!
//! Architecture:
//! - `mcp/`        -- JSON-RPC shell, tool registry, argument validation, handlers
//! - `governance/` -- rule sets, line scanner, structural analyzer, report builder
//! - `figma/`      -- extraction over pre-fetched Figma export documents
//! - `codegen/`    -- per-framework component/story templates
//! - `model`       -- shared closed enums (frameworks, token categories)

pub mod codegen;
pub mod figma;
pub mod governance;
pub mod mcp;
pub mod model;
