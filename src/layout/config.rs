//! Configuration for the grid layout

use crate::catalog::GLYPH_VIEWBOX;

/// Icons per row when the request does not say otherwise
pub const DEFAULT_ICONS_PER_ROW: u32 = 15;
/// Smallest accepted icons-per-row value
pub const MIN_ICONS_PER_ROW: u32 = 1;
/// Largest accepted icons-per-row value
pub const MAX_ICONS_PER_ROW: u32 = 50;

/// Cell edge length in logical pixels when the request does not say otherwise
pub const DEFAULT_ICON_SIZE: u32 = 48;
/// Smallest accepted cell edge length
pub const MIN_ICON_SIZE: u32 = 16;
/// Largest accepted cell edge length
pub const MAX_ICON_SIZE: u32 = 128;

// Proportions of the cell size, kept as divisors so 48 / 5 prints as 9.6
/// Inner padding between cell edge and glyph: a quarter of the cell size
const PADDING_DIVISOR: f64 = 4.0;
/// Gap between neighbouring cells: a fifth of the cell size
const GAP_DIVISOR: f64 = 5.0;
/// Corner radius of a cell: a fifth of the cell size
const RADIUS_DIVISOR: f64 = 5.0;

/// Clamped layout parameters for the icon grid
///
/// Values are always within their accepted range; the setters clamp instead
/// of rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    icons_per_row: u32,
    icon_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            icons_per_row: DEFAULT_ICONS_PER_ROW,
            icon_size: DEFAULT_ICON_SIZE,
        }
    }
}

impl GridConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of icons per row, clamped into `[1, 50]`
    pub fn with_icons_per_row(mut self, icons_per_row: i64) -> Self {
        self.icons_per_row = clamp(icons_per_row, MIN_ICONS_PER_ROW, MAX_ICONS_PER_ROW);
        self
    }

    /// Set the cell edge length, clamped into `[16, 128]`
    pub fn with_icon_size(mut self, icon_size: i64) -> Self {
        self.icon_size = clamp(icon_size, MIN_ICON_SIZE, MAX_ICON_SIZE);
        self
    }

    pub fn icons_per_row(&self) -> u32 {
        self.icons_per_row
    }

    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// Padding between a cell's edge and its glyph
    pub fn padding(&self) -> f64 {
        f64::from(self.icon_size) / PADDING_DIVISOR
    }

    /// Gap between neighbouring cells
    pub fn gap(&self) -> f64 {
        f64::from(self.icon_size) / GAP_DIVISOR
    }

    /// Corner radius of a cell
    pub fn corner_radius(&self) -> f64 {
        f64::from(self.icon_size) / RADIUS_DIVISOR
    }

    /// Scale factor from glyph space (24 units) to the padded cell interior
    pub fn glyph_scale(&self) -> f64 {
        (f64::from(self.icon_size) - self.padding() * 2.0) / GLYPH_VIEWBOX
    }
}

fn clamp(value: i64, min: u32, max: u32) -> u32 {
    // Both bounds fit in u32, so the clamped value does too
    value.clamp(i64::from(min), i64::from(max)) as u32
}
