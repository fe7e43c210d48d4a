//! Framework-specific code generation from static templates.
//!
//! Generation is pure lookup-and-substitute: one fixed template per
//! framework, `{name}`/`{name_lower}` placeholders replaced at every
//! occurrence, and a `{token_props}` placeholder receiving per-category
//! prop declarations. No logic lives in the templates themselves.

pub mod stories;
pub mod templates;

use crate::model::{Framework, TokenCategory};

/// Categories used when a caller doesn't pick any.
pub const DEFAULT_CATEGORIES: [TokenCategory; 3] = [
    TokenCategory::Color,
    TokenCategory::Spacing,
    TokenCategory::Typography,
];

/// Per-category prop declaration appended into a template's props block.
///
/// Every framework template places the block in a TypeScript type
/// position, so a single table serves all five targets.
pub fn category_prop(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Color => {
            "  /** Color token path (e.g. color.primary.base). */\n  colorToken?: string;\n"
        }
        TokenCategory::Spacing => {
            "  /** Spacing token path (e.g. spacing.scale.md). */\n  spacingToken?: string;\n"
        }
        TokenCategory::Typography => {
            "  /** Typography token path (e.g. typography.body.family). */\n  typographyToken?: string;\n"
        }
        TokenCategory::Elevation => "  elevationToken?: string;\n",
        TokenCategory::Radius => "  radiusToken?: string;\n",
        TokenCategory::Breakpoint => "  breakpointToken?: string;\n",
        TokenCategory::Motion => "  motionToken?: string;\n",
    }
}

/// Default token path suggested for a category in token-mapping sections.
pub fn default_token_path(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Color => "color.primary.base",
        TokenCategory::Spacing => "spacing.scale.md",
        TokenCategory::Typography => "typography.body.family",
        TokenCategory::Elevation => "elevation.raised",
        TokenCategory::Radius => "radius.control",
        TokenCategory::Breakpoint => "breakpoint.md",
        TokenCategory::Motion => "motion.duration.base",
    }
}

/// Fence language used when embedding generated code in a markdown report.
pub fn fence_language(framework: Framework) -> &'static str {
    match framework {
        Framework::React => "tsx",
        Framework::Vue => "vue",
        Framework::Svelte => "svelte",
        Framework::Angular => "ts",
        Framework::WebC => "ts",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_prop_and_mapping() {
        for cat in TokenCategory::ALL {
            assert!(category_prop(cat).contains("?: string;"));
            assert!(default_token_path(cat).starts_with(cat.as_tag()));
        }
    }

    #[test]
    fn test_vue_fence_language() {
        assert_eq!(fence_language(Framework::Vue), "vue");
    }
}
