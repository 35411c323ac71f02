//! Canvas layout: container bounds → pixel size → explicit canvas size.
//!
//! The pixel size is the largest whole number of display pixels per
//! cell such that the longer grid axis fits the shorter container axis.

use crate::model::GridSize;

/// Natural content box of the container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn shortest_axis(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// `floor(min(container.w, container.h) / max(grid.w, grid.h))`.
///
/// Returns 0 for a degenerate container (zero, negative, NaN or
/// infinite) or an empty grid axis; never divides by zero. Capped so
/// that `pixel_size * longest_axis` fits in a `u32`.
pub fn pixel_size(container: ContainerSize, grid: GridSize) -> u32 {
    let longest = grid.longest_axis();
    let shortest = container.shortest_axis();
    if longest == 0 || !shortest.is_finite() || shortest <= 0.0 {
        return 0;
    }
    let size = (shortest / longest as f64).floor() as u32;
    size.min(u32::MAX / longest)
}

/// Explicit dimensions applied to the container and both surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasLayout {
    pub pixel_size: u32,
    pub width_px: u32,
    pub height_px: u32,
}

impl CanvasLayout {
    pub fn compute(container: ContainerSize, grid: GridSize) -> Self {
        let pixel_size = pixel_size(container, grid);
        Self {
            pixel_size,
            width_px: pixel_size * grid.width,
            height_px: pixel_size * grid.height,
        }
    }

    /// Nothing can be drawn at a usable resolution.
    pub fn is_degenerate(&self) -> bool {
        self.pixel_size == 0
    }
}
