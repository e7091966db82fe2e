//! Grid layout for composited icon sheets
//!
//! This module turns an icon count and a [`GridConfig`] into positioned
//! cells. It knows nothing about colors or SVG; the renderer consumes the
//! resulting [`GridLayout`].

pub mod config;
pub mod grid;
pub mod types;

pub use config::GridConfig;
pub use grid::compute;
pub use types::*;
