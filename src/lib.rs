//! readme-icons - Icon grids and badges for README files
//!
//! This library composites catalog icons into a single SVG grid and encodes
//! badge descriptions into request URLs for an external badge service.
//!
//! # Example
//!
//! ```rust
//! use readme_icons::{render_icons, IconCatalog, LayoutRequest, SvgConfig};
//!
//! let catalog = IconCatalog::builtin();
//! let request = LayoutRequest::new(["rust", "docker"]);
//! let svg = render_icons(catalog, &request, &SvgConfig::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! ```rust
//! use readme_icons::{badge_url, BadgeSpec};
//!
//! let url = badge_url(&BadgeSpec::custom("Rust", "stable", "#000000"));
//! assert_eq!(url, "https://img.shields.io/badge/Rust-stable-000000?style=for-the-badge");
//! ```

pub mod badge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod markup;
pub mod renderer;
pub mod request;
pub mod server;
pub mod theme;

pub use badge::{badge_url, BadgeKind, BadgeSpec, BadgeStyle};
pub use catalog::{CatalogError, Icon, IconCatalog};
pub use config::{ConfigError, ServerConfig};
pub use error::GridError;
pub use layout::{GridConfig, GridLayout};
pub use markup::Alignment;
pub use renderer::{render_grid, SvgConfig};
pub use request::{IconsQuery, LayoutRequest};
pub use theme::Theme;

use base64::Engine;
use tracing::debug;

/// Render a layout request to an SVG document
///
/// This is the main entry point for the grid compositor. It resolves the
/// identifiers against the catalog, computes the grid and generates SVG.
///
/// # Errors
///
/// [`GridError::MissingInput`] when the request names no icons and
/// [`GridError::NoValidIcons`] when none of them is in the catalog.
pub fn render_icons(
    catalog: &IconCatalog,
    request: &LayoutRequest,
    config: &SvgConfig,
) -> Result<String, GridError> {
    let icons = catalog.resolve(request.identifiers.as_slice())?;
    let grid = layout::compute(icons.len(), &request.grid);

    debug!(
        requested = request.identifiers.len(),
        rendered = icons.len(),
        columns = grid.columns,
        rows = grid.rows,
        theme = %request.theme,
        "rendering icon grid"
    );

    Ok(render_grid(&icons, &grid, request.theme, config))
}

/// Wrap an SVG document in a base64 `data:` URI
pub fn svg_data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg)
    )
}
