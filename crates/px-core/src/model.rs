//! Core data model for the pixel editor.
//!
//! The logical grid is measured in cells, never in display pixels.
//! Painted cells live in a sparse map keyed by 0-indexed `(col, row)`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color stored alongside each painted cell.
///
/// Rendering always uses a fixed fill style; the stored value is kept
/// so cells carry their own color once a palette exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha from 0.0 (transparent) to 1.0 (opaque).
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0, 0, 0, 1.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` form, as accepted by a 2D context fill style.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Grid ────────────────────────────────────────────────────────────────

/// Logical grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn longest_axis(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// Every cell in column-major order: `(0,0), (0,1), …, (1,0), …`.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.width).flat_map(move |col| (0..self.height).map(move |row| CellCoord { col, row }))
    }
}

/// A 0-indexed cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub col: u32,
    pub row: u32,
}

impl CellCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

// ─── Painted cells ───────────────────────────────────────────────────────

/// Sparse record of painted cells.
///
/// Grows monotonically: there is no eraser, so entries are only added
/// or overwritten. Painting the same cell twice keeps one entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintedCells {
    cells: HashMap<CellCoord, Color>,
}

impl PaintedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the color at `cell`.
    /// Returns `true` if the cell was not painted before.
    pub fn paint(&mut self, cell: CellCoord, color: Color) -> bool {
        self.cells.insert(cell, color).is_none()
    }

    pub fn get(&self, cell: CellCoord) -> Option<&Color> {
        self.cells.get(&cell)
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellCoord, &Color)> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paint_is_set_semantics() {
        let mut cells = PaintedCells::new();
        assert!(cells.paint(CellCoord::new(1, 2), Color::BLACK));
        assert!(!cells.paint(CellCoord::new(1, 2), Color::BLACK));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn repaint_overwrites_color() {
        let mut cells = PaintedCells::new();
        let gray = Color::rgba(128, 128, 128, 0.5);
        cells.paint(CellCoord::new(0, 0), Color::BLACK);
        cells.paint(CellCoord::new(0, 0), gray);
        assert_eq!(cells.get(CellCoord::new(0, 0)), Some(&gray));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn grid_cells_visits_each_once() {
        let grid = GridSize::new(3, 2);
        let all: Vec<_> = grid.cells().collect();
        assert_eq!(all.len(), grid.cell_count());
        assert_eq!(all[0], CellCoord::new(0, 0));
        assert_eq!(all[1], CellCoord::new(0, 1));
        assert_eq!(all[2], CellCoord::new(1, 0));
    }

    #[test]
    fn grid_contains_bounds() {
        let grid = GridSize::new(48, 64);
        assert!(grid.contains(CellCoord::new(47, 63)));
        assert!(!grid.contains(CellCoord::new(48, 0)));
        assert!(!grid.contains(CellCoord::new(0, 64)));
        assert_eq!(grid.longest_axis(), 64);
    }

    #[test]
    fn black_css() {
        assert_eq!(Color::BLACK.to_css(), "rgba(0, 0, 0, 1)");
    }
}
