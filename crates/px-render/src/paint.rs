//! Layer painters.
//!
//! Both layers are redrawn in full from the current state on every
//! change. No incremental diffing: the committed layer is a plain scan
//! over every grid cell.

use crate::hit::BrushPosition;
use crate::surface::Surface;
use kurbo::Rect;
use px_core::{CellCoord, GridSize, PaintedCells};

/// Translucent hover indicator.
pub const BRUSH_FILL: &str = "rgba(0, 0, 0, 0.3)";
/// Committed paint. Per-cell stored colors are not consulted.
pub const LAYER_FILL: &str = "rgba(0, 0, 0, 1)";

/// Display-pixel rectangle covered by `cell`.
pub fn cell_rect(cell: CellCoord, pixel_size: u32) -> Rect {
    let size = pixel_size as f64;
    Rect::from_origin_size(
        (cell.col as f64 * size, cell.row as f64 * size),
        (size, size),
    )
}

/// Clear the brush surface and draw the hover cell, if any.
pub fn paint_brush<S: Surface + ?Sized>(
    surface: &mut S,
    brush: Option<BrushPosition>,
    pixel_size: u32,
) {
    surface.clear();
    surface.set_fill_style(BRUSH_FILL);
    if let Some(brush) = brush {
        let rect = cell_rect(brush.cell(), pixel_size);
        log::trace!("BRUSH ({}, {}) at {:?}", brush.col, brush.row, rect);
        surface.fill_rect(rect);
    }
}

/// Clear the committed surface and redraw every painted cell.
///
/// Visits each of the `width × height` grid cells exactly once.
/// Returns the number of rectangles filled.
pub fn paint_layer<S: Surface + ?Sized>(
    surface: &mut S,
    grid: GridSize,
    cells: &PaintedCells,
    pixel_size: u32,
) -> usize {
    surface.clear();
    surface.set_fill_style(LAYER_FILL);

    let mut filled = 0;
    for cell in grid.cells() {
        if cells.contains(cell) {
            surface.fill_rect(cell_rect(cell, pixel_size));
            filled += 1;
        }
    }
    log::trace!("LAYER {filled} of {} cells filled", grid.cell_count());
    filled
}
