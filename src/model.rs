//! Shared closed enums for the tool surface: target frameworks and
//! design-token categories.
//!
//! Both sets are fixed. Matching over them is exhaustive, so a new
//! framework or category forces every dispatch site to be updated.

/// Target UI framework for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    React,
    Vue,
    Svelte,
    Angular,
    WebC,
}

impl Framework {
    pub const ALL: [Self; 5] = [
        Self::React,
        Self::Vue,
        Self::Svelte,
        Self::Angular,
        Self::WebC,
    ];

    /// Parse the wire tag used in tool arguments and schemas.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "react" => Some(Self::React),
            "vue" => Some(Self::Vue),
            "svelte" => Some(Self::Svelte),
            "angular" => Some(Self::Angular),
            "webc" => Some(Self::WebC),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
            Self::Angular => "angular",
            Self::WebC => "webc",
        }
    }
}

/// Design-token category. The sole permitted sources of visual styling
/// are tokens drawn from these groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    Elevation,
    Radius,
    Breakpoint,
    Motion,
}

impl TokenCategory {
    pub const ALL: [Self; 7] = [
        Self::Color,
        Self::Spacing,
        Self::Typography,
        Self::Elevation,
        Self::Radius,
        Self::Breakpoint,
        Self::Motion,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "color" => Some(Self::Color),
            "spacing" => Some(Self::Spacing),
            "typography" => Some(Self::Typography),
            "elevation" => Some(Self::Elevation),
            "radius" => Some(Self::Radius),
            "breakpoint" => Some(Self::Breakpoint),
            "motion" => Some(Self::Motion),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::Elevation => "elevation",
            Self::Radius => "radius",
            Self::Breakpoint => "breakpoint",
            Self::Motion => "motion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_tag_round_trip() {
        for fw in Framework::ALL {
            assert_eq!(Framework::from_tag(fw.as_tag()), Some(fw));
        }
    }

    #[test]
    fn test_framework_unknown_tag() {
        assert_eq!(Framework::from_tag("solid"), None);
        assert_eq!(Framework::from_tag("React"), None); // tags are lowercase
    }

    #[test]
    fn test_category_tag_round_trip() {
        for cat in TokenCategory::ALL {
            assert_eq!(TokenCategory::from_tag(cat.as_tag()), Some(cat));
        }
    }

    #[test]
    fn test_category_unknown_tag() {
        assert_eq!(TokenCategory::from_tag("shadow"), None);
    }
}
