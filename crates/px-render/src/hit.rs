//! Hit testing: pointer offset → brush position.

use px_core::{CellCoord, GridSize};

/// The cell under the pointer, 1-indexed.
///
/// Stored cells are 0-indexed; use [`BrushPosition::cell`] to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrushPosition {
    pub col: u32,
    pub row: u32,
}

impl BrushPosition {
    /// Both coordinates must be ≥ 1.
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// 0-indexed storage coordinate.
    pub fn cell(&self) -> CellCoord {
        CellCoord::new(self.col.saturating_sub(1), self.row.saturating_sub(1))
    }
}

/// Brush position for a pointer at `(offset_x, offset_y)` within the
/// container: `floor(offset / pixel_size) + 1` on each axis.
///
/// Returns `None` when the pixel size is 0, the offset is negative or
/// not finite, or the cell falls outside the grid.
pub fn brush_at(offset_x: f64, offset_y: f64, pixel_size: u32, grid: GridSize) -> Option<BrushPosition> {
    if pixel_size == 0 || !offset_x.is_finite() || !offset_y.is_finite() {
        return None;
    }
    if offset_x < 0.0 || offset_y < 0.0 {
        return None;
    }
    let size = pixel_size as f64;
    let col = (offset_x / size).floor() as u32;
    let row = (offset_y / size).floor() as u32;

    if !grid.contains(CellCoord::new(col, row)) {
        return None;
    }
    Some(BrushPosition::new(col + 1, row + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GRID: GridSize = GridSize::new(48, 64);

    #[test]
    fn offset_maps_to_one_indexed_position() {
        assert_eq!(brush_at(15.0, 25.0, 10, GRID), Some(BrushPosition::new(2, 3)));
        assert_eq!(brush_at(0.0, 0.0, 10, GRID), Some(BrushPosition::new(1, 1)));
        assert_eq!(brush_at(9.99, 10.0, 10, GRID), Some(BrushPosition::new(1, 2)));
    }

    #[test]
    fn cell_is_floor_of_offset() {
        for x in 0..200 {
            for y in (0..300).step_by(7) {
                let brush = brush_at(x as f64, y as f64, 7, GRID).unwrap();
                assert_eq!(brush.cell(), CellCoord::new(x / 7, y / 7));
            }
        }
    }

    #[test]
    fn zero_pixel_size_has_no_brush() {
        assert_eq!(brush_at(5.0, 5.0, 0, GRID), None);
    }

    #[test]
    fn outside_grid_has_no_brush() {
        assert_eq!(brush_at(480.0, 10.0, 10, GRID), None);
        assert_eq!(brush_at(10.0, 640.0, 10, GRID), None);
        assert_eq!(brush_at(-1.0, 10.0, 10, GRID), None);
        assert_eq!(brush_at(f64::NAN, 10.0, 10, GRID), None);
    }
}
