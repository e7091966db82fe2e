//! SVG renderer for composited icon grids
//!
//! This module takes a GridLayout plus the resolved icons and produces an
//! SVG document string.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_grid, SvgBuilder};
