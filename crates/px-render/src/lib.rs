pub mod hit;
pub mod paint;
pub mod surface;

pub use hit::{BrushPosition, brush_at};
pub use paint::{BRUSH_FILL, LAYER_FILL, cell_rect, paint_brush, paint_layer};
pub use surface::{DrawOp, RecordingSurface, Surface};

// Re-export so downstream crates don't need a direct kurbo dependency
pub use kurbo::Rect;
