//! Row-major placement of icon cells

use super::{BoundingBox, Cell, GridConfig, GridLayout};

/// Lay out `count` equally sized cells in row-major order
///
/// Columns wrap after `config.icons_per_row()` cells. The canvas is only as
/// wide as the longest row actually needs, so a short list does not leave
/// empty columns on the right.
pub fn compute(count: usize, config: &GridConfig) -> GridLayout {
    if count == 0 {
        return GridLayout {
            config: *config,
            columns: 0,
            rows: 0,
            cells: vec![],
            bounds: BoundingBox::zero(),
        };
    }

    let per_row = config.icons_per_row() as usize;
    let size = f64::from(config.icon_size());
    let gap = config.gap();
    let pitch = size + gap;

    let columns = count.min(per_row);
    let rows = count.div_ceil(per_row);

    let cells = (0..count)
        .map(|index| {
            let col = index % per_row;
            let row = index / per_row;
            Cell {
                index,
                row,
                col,
                bounds: BoundingBox::new(col as f64 * pitch, row as f64 * pitch, size, size),
            }
        })
        .collect();

    GridLayout {
        config: *config,
        columns,
        rows,
        cells,
        bounds: BoundingBox::new(0.0, 0.0, span(columns, size, gap), span(rows, size, gap)),
    }
}

/// Length covered by `n` cells separated by `n - 1` gaps
fn span(n: usize, size: f64, gap: f64) -> f64 {
    n as f64 * size + (n as f64 - 1.0) * gap
}
