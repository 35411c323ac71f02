//! Editor state and its transitions.
//!
//! All state is owned by a single editor instance. Each mutator returns
//! `true` when something the surfaces show (or the paint gesture
//! depends on) changed, so the caller knows to redraw.

use px_core::{Color, GridSize, PaintedCells};
use px_render::{BrushPosition, brush_at};

#[derive(Debug, Clone)]
pub struct EditorState {
    pub grid: GridSize,
    /// Display pixels per cell edge. 0 until the first resize pass.
    pub pixel_size: u32,
    pub cells: PaintedCells,
    /// Cell under the pointer, or `None` outside the paintable surface.
    pub brush: Option<BrushPosition>,
    /// Set between pointer-down and pointer-up; moves paint while set.
    pub pointer_down: bool,
}

impl EditorState {
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            pixel_size: 0,
            cells: PaintedCells::new(),
            brush: None,
            pointer_down: false,
        }
    }

    pub fn pointer_down(&mut self) -> bool {
        let was_down = std::mem::replace(&mut self.pointer_down, true);
        let painted = self.paint_at_brush();
        !was_down || painted
    }

    pub fn pointer_up(&mut self) -> bool {
        std::mem::replace(&mut self.pointer_down, false)
    }

    /// Recompute the brush from the pointer offset; paint if the
    /// pointer is down.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let brush = brush_at(x, y, self.pixel_size, self.grid);
        let moved = brush != self.brush;
        self.brush = brush;
        let painted = self.pointer_down && self.paint_at_brush();
        moved || painted
    }

    /// Clear the brush. The pointer-down flag is left alone.
    pub fn pointer_leave(&mut self) -> bool {
        self.brush.take().is_some()
    }

    pub fn set_pixel_size(&mut self, pixel_size: u32) -> bool {
        std::mem::replace(&mut self.pixel_size, pixel_size) != pixel_size
    }

    /// Paint the cell under the brush opaque black. No-op without a brush.
    /// Returns `true` if the cell was newly painted.
    pub fn paint_at_brush(&mut self) -> bool {
        match self.brush {
            Some(brush) => {
                let cell = brush.cell();
                let added = self.cells.paint(cell, Color::BLACK);
                if added {
                    log::trace!("PAINT ({}, {})", cell.col, cell.row);
                }
                added
            }
            None => false,
        }
    }
}
