//! Static tool registry: the five tool definitions and their input
//! schemas, served verbatim by `tools/list`.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::model::{Framework, TokenCategory};

/// Closed set of tool names. Dispatch matches over this enum, so adding
/// a tool forces every match site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    ReadTokens,
    ValidateComponentTokens,
    GenerateComponent,
    ProcessFigmaExport,
    ConvertAutohtml,
}

impl ToolName {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "read_tokens" => Some(Self::ReadTokens),
            "validate_component_tokens" => Some(Self::ValidateComponentTokens),
            "generate_component" => Some(Self::GenerateComponent),
            "process_figma_export" => Some(Self::ProcessFigmaExport),
            "convert_autohtml" => Some(Self::ConvertAutohtml),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadTokens => "read_tokens",
            Self::ValidateComponentTokens => "validate_component_tokens",
            Self::GenerateComponent => "generate_component",
            Self::ProcessFigmaExport => "process_figma_export",
            Self::ConvertAutohtml => "convert_autohtml",
        }
    }
}

/// A tool definition served by `tools/list`.
pub struct ToolDef {
    pub name: ToolName,
    pub description: &'static str,
    pub input_schema: Value,
}

fn framework_enum() -> Value {
    Value::Array(Framework::ALL.iter().map(|fw| json!(fw.as_tag())).collect())
}

fn category_enum() -> Value {
    Value::Array(
        TokenCategory::ALL
            .iter()
            .map(|cat| json!(cat.as_tag()))
            .collect(),
    )
}

/// The five tool definitions, built once and shared read-only.
pub static TOOL_DEFS: Lazy<Vec<ToolDef>> = Lazy::new(|| {
    vec![
        ToolDef {
            name: ToolName::ReadTokens,
            description: "Read the design-token JSON file and render it as text",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "tokenPath": {
                        "type": "string",
                        "description": "Path to the token JSON file; defaults to the configured file"
                    },
                    "category": {
                        "type": "string",
                        "enum": category_enum(),
                        "description": "Restrict output to one token category"
                    }
                }
            }),
        },
        ToolDef {
            name: ToolName::ValidateComponentTokens,
            description: "Validate component source against the token-governance rules",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "componentCode": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Component source to scan"
                    },
                    "framework": {
                        "type": "string",
                        "enum": framework_enum(),
                        "description": "Framework the source targets"
                    }
                },
                "required": ["componentCode", "framework"]
            }),
        },
        ToolDef {
            name: ToolName::GenerateComponent,
            description: "Generate a token-aware component and story for a framework",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "componentName": {
                        "type": "string",
                        "minLength": 1,
                        "description": "PascalCase component name"
                    },
                    "description": {
                        "type": "string",
                        "minLength": 1,
                        "description": "What the component is for"
                    },
                    "framework": {
                        "type": "string",
                        "enum": framework_enum(),
                        "default": "react"
                    },
                    "tokenCategories": {
                        "type": "array",
                        "items": { "type": "string", "enum": category_enum() },
                        "default": ["color", "spacing", "typography"],
                        "description": "Token categories to expose as props"
                    }
                },
                "required": ["componentName", "description"]
            }),
        },
        ToolDef {
            name: ToolName::ProcessFigmaExport,
            description: "Extract tokens and components from a local Figma export JSON file",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "figmaFilePath": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Path to the pre-fetched Figma export"
                    },
                    "extractTokens": { "type": "boolean", "default": true },
                    "generateComponents": { "type": "boolean", "default": false },
                    "outputDir": {
                        "type": "string",
                        "default": "./tokens",
                        "description": "Where token files would be written (writing not yet implemented)"
                    }
                },
                "required": ["figmaFilePath"]
            }),
        },
        ToolDef {
            name: ToolName::ConvertAutohtml,
            description: "Convert AutoHTML output into a token-aware templated component",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "autohtmlCode": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Raw AutoHTML markup to convert"
                    },
                    "framework": {
                        "type": "string",
                        "enum": framework_enum(),
                        "default": "react"
                    },
                    "applyTokens": { "type": "boolean", "default": true },
                    "removeInlineStyles": { "type": "boolean", "default": true },
                    "componentName": {
                        "type": "string",
                        "description": "Name for the generated component"
                    }
                },
                "required": ["autohtmlCode"]
            }),
        },
    ]
});

/// Look up the input schema for a tool.
pub fn schema_for(tool: ToolName) -> &'static Value {
    TOOL_DEFS
        .iter()
        .find(|def| def.name == tool)
        .map(|def| &def.input_schema)
        .expect("every tool has a definition")
}
