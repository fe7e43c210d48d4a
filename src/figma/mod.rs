//! Extraction over a pre-fetched Figma export document.
//!
//! The export shape is only partially documented upstream, so every
//! lookup is option-chained: a missing key at any level yields an empty
//! list, never an error. Assumed layout:
//!
//! ```json
//! {
//!   "styles": {
//!     "colors": { "Primary Base": "#0055ff", ... },
//!     "grids":  { "Scale Md": { "section": "spacing", "value": "16px" }, ... },
//!     "text":   { "Body": { "value": "Inter 16/24" }, ... }
//!   },
//!   "components": { "1:23": { "name": "Button", "description": "..." }, ... }
//! }
//! ```
//!
//! Sub-object values may be plain strings/numbers or objects carrying a
//! `value` field; anything else renders as compact JSON.

use serde_json::{Map, Value};

/// A named design-token value extracted from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    pub name: String,
    pub value: String,
}

/// A component record extracted from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub name: String,
    pub description: String,
}

/// Convert a Figma-style display key into a token name: whitespace runs
/// become `.` separators and every character is lowercased.
pub fn format_token_name(key: &str) -> String {
    key.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}

fn style_section<'a>(doc: &'a Value, section: &str) -> Option<&'a Map<String, Value>> {
    doc.get("styles")?.get(section)?.as_object()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => match map.get("value") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => serde_json::to_string(value).unwrap_or_default(),
        },
        other => other.to_string(),
    }
}

/// Color tokens from `styles.colors`.
pub fn extract_color_tokens(doc: &Value) -> Vec<TokenEntry> {
    let colors = match style_section(doc, "colors") {
        Some(map) => map,
        None => return Vec::new(),
    };
    colors
        .iter()
        .map(|(key, value)| TokenEntry {
            name: format_token_name(key),
            value: render_value(value),
        })
        .collect()
}

/// Spacing tokens from `styles.grids`, restricted to entries tagged
/// `section == "spacing"`.
pub fn extract_spacing_tokens(doc: &Value) -> Vec<TokenEntry> {
    let grids = match style_section(doc, "grids") {
        Some(map) => map,
        None => return Vec::new(),
    };
    grids
        .iter()
        .filter(|(_, value)| value.get("section").and_then(Value::as_str) == Some("spacing"))
        .map(|(key, value)| TokenEntry {
            name: format_token_name(key),
            value: render_value(value),
        })
        .collect()
}

/// Typography tokens from `styles.text`.
pub fn extract_typography_tokens(doc: &Value) -> Vec<TokenEntry> {
    let text = match style_section(doc, "text") {
        Some(map) => map,
        None => return Vec::new(),
    };
    text.iter()
        .map(|(key, value)| TokenEntry {
            name: format_token_name(key),
            value: render_value(value),
        })
        .collect()
}

/// Component records from the top-level `components` map. The entry's
/// `name` field wins; the map key is the fallback.
pub fn extract_components(doc: &Value) -> Vec<ComponentEntry> {
    let components = match doc.get("components").and_then(Value::as_object) {
        Some(map) => map,
        None => return Vec::new(),
    };
    components
        .iter()
        .map(|(key, value)| ComponentEntry {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(key)
                .to_string(),
            description: value
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        })
        .collect()
}
