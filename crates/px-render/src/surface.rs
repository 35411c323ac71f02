//! Drawing-surface abstraction.
//!
//! A `Surface` is the minimal slice of a 2D context the painters need:
//! clear, set a fill style, fill a rectangle. The browser bridge
//! implements it over `CanvasRenderingContext2d`; tests use
//! `RecordingSurface`.

use kurbo::Rect;

pub trait Surface {
    /// Current backing size in display pixels `(width, height)`.
    fn size(&self) -> (f64, f64);

    fn clear_rect(&mut self, rect: Rect);

    fn set_fill_style(&mut self, style: &str);

    fn fill_rect(&mut self, rect: Rect);

    /// Clear the whole backing store.
    fn clear(&mut self) {
        let (w, h) = self.size();
        self.clear_rect(Rect::new(0.0, 0.0, w, h));
    }
}

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    FillStyle(String),
    Fill(Rect),
}

/// In-memory surface that records every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Rectangles filled so far.
    pub fn fills(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    /// Fill style in effect at the end of the recording.
    pub fn last_fill_style(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::FillStyle(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(DrawOp::FillStyle(style.to_string()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Fill(rect));
    }
}
