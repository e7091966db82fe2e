//! Cell and glyph coloring for the icon grid
//!
//! A theme decides which of the two colors of a cell (background and glyph)
//! carries the icon's brand color and which is plain white.

use std::fmt;

use crate::catalog::Icon;

/// Neutral color paired with the brand color
const NEUTRAL: &str = "white";

/// Grid color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Brand-colored cell with a white glyph
    #[default]
    Dark,
    /// White cell with a brand-colored glyph
    Light,
}

impl Theme {
    /// Interpret the `t` query parameter
    ///
    /// Only the exact value `light` selects the light theme; anything else,
    /// including an absent parameter, selects dark.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Query parameter value for this theme
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Fill of the rounded cell behind the glyph
    pub fn cell_fill(&self, icon: &Icon) -> String {
        match self {
            Theme::Dark => icon.css_color(),
            Theme::Light => NEUTRAL.to_string(),
        }
    }

    /// Fill of the glyph path
    pub fn glyph_fill(&self, icon: &Icon) -> String {
        match self {
            Theme::Dark => NEUTRAL.to_string(),
            Theme::Light => icon.css_color(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
