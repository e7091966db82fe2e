//! The icon record shared by the catalog, the compositor and the badge encoder

use serde::{Deserialize, Serialize};

/// Side length of the square viewBox every glyph path is drawn against
pub const GLYPH_VIEWBOX: f64 = 24.0;

/// A single brand icon
///
/// Field names follow the simple-icons dataset so its exports deserialize
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Lowercase identifier, unique within a catalog
    pub slug: String,
    /// Human-readable display name
    pub title: String,
    /// Brand color as six hex digits without a leading `#`
    pub hex: String,
    /// SVG path data in a 24x24 coordinate space
    pub path: String,
}

impl Icon {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        hex: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            hex: hex.into(),
            path: path.into(),
        }
    }

    /// Brand color as a CSS color value (`#rrggbb`)
    pub fn css_color(&self) -> String {
        format!("#{}", self.hex)
    }
}
