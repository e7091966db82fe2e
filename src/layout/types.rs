//! Core types for the grid layout

use super::GridConfig;

/// A 2D point in the canvas coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of a cell or the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check if this bounding box intersects another
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Placement of a single icon in the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Position of the icon in the input sequence
    pub index: usize,
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
    /// Area occupied by the cell on the canvas
    pub bounds: BoundingBox,
}

/// Result of laying out `n` icons
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// The clamped parameters the layout was computed with
    pub config: GridConfig,
    /// Columns actually used (never more than the icon count)
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// Cells in input order
    pub cells: Vec<Cell>,
    /// Canvas extent
    pub bounds: BoundingBox,
}

impl GridLayout {
    /// Canvas width
    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    /// Canvas height
    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let bounds = BoundingBox::new(10.0, 20.0, 48.0, 48.0);
        assert_eq!(bounds.right(), 58.0);
        assert_eq!(bounds.bottom(), 68.0);
        assert_eq!(bounds.origin(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_bounding_box_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 48.0, 48.0);
        let b = BoundingBox::new(57.6, 0.0, 48.0, 48.0);
        let c = BoundingBox::new(40.0, 40.0, 48.0, 48.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }
}
