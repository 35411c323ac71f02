//! In-memory host for driving an `Editor` without a browser.

#![allow(dead_code)]

use px_core::{CanvasLayout, ContainerSize};
use px_editor::{Host, Listener, MountError};
use px_render::{RecordingSurface, Surface};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct FakeHost {
    pub container: ContainerSize,
    pub listeners: HashSet<Listener>,
    /// Every `subscribe` call, successful or not.
    pub subscribe_calls: Vec<Listener>,
    pub unsubscribe_calls: Vec<Listener>,
    pub fail_on: Option<Listener>,
    pub sizing_resets: usize,
    pub layouts: Vec<CanvasLayout>,
    pub brush: RecordingSurface,
    pub layer: RecordingSurface,
}

impl FakeHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            container: ContainerSize::new(width, height),
            ..Self::default()
        }
    }

    pub fn last_layout(&self) -> Option<CanvasLayout> {
        self.layouts.last().copied()
    }
}

impl Host for FakeHost {
    fn subscribe(&mut self, listener: Listener) -> Result<(), MountError> {
        self.subscribe_calls.push(listener);
        if self.fail_on == Some(listener) {
            return Err(MountError::Listener {
                listener,
                reason: "refused by test host".to_string(),
            });
        }
        self.listeners.insert(listener);
        Ok(())
    }

    fn unsubscribe(&mut self, listener: Listener) {
        self.unsubscribe_calls.push(listener);
        self.listeners.remove(&listener);
    }

    fn reset_surface_sizing(&mut self) {
        self.sizing_resets += 1;
    }

    fn measure_container(&self) -> ContainerSize {
        self.container
    }

    fn apply_layout(&mut self, layout: &CanvasLayout) {
        self.brush.resize(layout.width_px as f64, layout.height_px as f64);
        self.layer.resize(layout.width_px as f64, layout.height_px as f64);
        self.layouts.push(*layout);
    }

    fn brush_surface(&mut self) -> &mut dyn Surface {
        &mut self.brush
    }

    fn layer_surface(&mut self) -> &mut dyn Surface {
        &mut self.layer
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
