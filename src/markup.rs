//! Copy-ready README snippets
//!
//! Wraps a grid or badge URL into the Markdown (or, for aligned grids, HTML)
//! that users paste into their README.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::badge::{badge_url, BadgeSpec};
use crate::request::LayoutRequest;

/// Route of the grid endpoint
pub const ICONS_ROUTE: &str = "/api/icons";

/// Horizontal placement of the icon grid in the README
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(format!("unknown alignment '{}'", other)),
        }
    }
}

/// Absolute URL of the grid endpoint for a request
pub fn icons_url(base: &str, request: &LayoutRequest) -> String {
    format!(
        "{}{}?{}",
        base.trim_end_matches('/'),
        ICONS_ROUTE,
        request.to_query()
    )
}

/// Markdown image, linked when `link` is non-empty
pub fn image_markdown(alt: &str, url: &str, link: Option<&str>) -> String {
    let image = format!("![{}]({})", alt, url);
    match link.filter(|l| !l.is_empty()) {
        Some(link) => format!("[{}]({})", image, link),
        None => image,
    }
}

/// Markdown snippet for a badge
pub fn badge_markdown(spec: &BadgeSpec, link: Option<&str>) -> String {
    image_markdown(&spec.alt_text(), &badge_url(spec), link)
}

/// Snippet embedding an icon grid
///
/// Left-aligned grids use plain Markdown. Markdown cannot center or
/// right-align an image, so the other alignments fall back to an HTML block.
pub fn icons_markdown(url: &str, link: &str, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => format!("[![Icons]({})]({})", url, link),
        Alignment::Center | Alignment::Right => format!(
            "<p align=\"{}\">\n  <a href=\"{}\">\n    <img src=\"{}\" alt=\"Icons\" />\n  </a>\n</p>",
            alignment, link, url
        ),
    }
}

/// Complete README snippet for a grid served at `base`
///
/// Without a custom link (or with an empty one) the grid links back to
/// `base`.
pub fn grid_snippet(
    base: &str,
    request: &LayoutRequest,
    link: Option<&str>,
    alignment: Alignment,
) -> String {
    let link = link.filter(|l| !l.is_empty()).unwrap_or(base);
    icons_markdown(&icons_url(base, request), link, alignment)
}
