//! The editor component.
//!
//! Composition rather than a component base class: an `Editor` owns its
//! state plus a `Host`, and exposes explicit lifecycle hooks.
//!
//! - `mount()` registers the five listeners and runs the first resize pass.
//! - `handle()` mutates state, then redraws from the *new* state.
//! - `unmount()` removes every listener; later events are ignored.

use crate::host::{Host, MountError};
use crate::input::{InputEvent, Listener};
use crate::state::EditorState;
use px_core::{CanvasLayout, EditorConfig};
use px_render::{paint_brush, paint_layer};

pub struct Editor<H: Host> {
    host: H,
    state: EditorState,
    /// Listeners currently registered with the host, in registration order.
    subscribed: Vec<Listener>,
    mounted: bool,
}

impl<H: Host> Editor<H> {
    pub fn new(config: EditorConfig, host: H) -> Self {
        Self {
            host,
            state: EditorState::new(config.grid()),
            subscribed: Vec::with_capacity(Listener::ALL.len()),
            mounted: false,
        }
    }

    /// Register listeners and lay out the surfaces.
    ///
    /// On failure every listener registered so far is removed again and
    /// the editor stays unmounted.
    pub fn mount(&mut self) -> Result<(), MountError> {
        if self.mounted {
            return Err(MountError::AlreadyMounted);
        }
        for listener in Listener::ALL {
            if let Err(err) = self.host.subscribe(listener) {
                log::warn!("mount aborted: {err}");
                self.release_listeners();
                return Err(err);
            }
            self.subscribed.push(listener);
        }
        self.mounted = true;
        log::debug!(
            "editor mounted ({}x{} cells)",
            self.state.grid.width,
            self.state.grid.height
        );

        self.resize();
        self.redraw();
        Ok(())
    }

    /// Remove every listener. Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.release_listeners();
        self.mounted = false;
        log::debug!("editor unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Apply one event. Returns `true` if the surfaces were redrawn.
    ///
    /// Events reaching an unmounted editor are dropped without touching
    /// state.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        if !self.mounted {
            log::trace!("ignoring {event:?}: editor not mounted");
            return false;
        }
        let changed = match event {
            InputEvent::PointerDown => self.state.pointer_down(),
            InputEvent::PointerUp => self.state.pointer_up(),
            InputEvent::PointerMove { x, y } => self.state.pointer_move(x, y),
            InputEvent::PointerLeave => self.state.pointer_leave(),
            InputEvent::Resize => self.resize(),
        };
        if changed {
            self.redraw();
        }
        changed
    }

    /// Repaint both surfaces from current state. Returns the number of
    /// committed cells drawn.
    pub fn redraw(&mut self) -> usize {
        let pixel_size = self.state.pixel_size;
        paint_brush(self.host.brush_surface(), self.state.brush, pixel_size);
        paint_layer(
            self.host.layer_surface(),
            self.state.grid,
            &self.state.cells,
            pixel_size,
        )
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Re-measure the container and size everything to the grid.
    ///
    /// Always reports a change: resizing a surface's backing store
    /// wipes it, so a redraw must follow.
    fn resize(&mut self) -> bool {
        self.host.reset_surface_sizing();
        let container = self.host.measure_container();
        let layout = CanvasLayout::compute(container, self.state.grid);
        if layout.is_degenerate() {
            log::warn!(
                "container {}x{} is smaller than the {}x{} grid; pixel size is 0",
                container.width,
                container.height,
                self.state.grid.width,
                self.state.grid.height
            );
        }
        self.host.apply_layout(&layout);
        self.state.set_pixel_size(layout.pixel_size);
        log::debug!(
            "resized: pixel size {} → canvas {}x{}",
            layout.pixel_size,
            layout.width_px,
            layout.height_px
        );
        true
    }

    fn release_listeners(&mut self) {
        for listener in self.subscribed.drain(..).rev() {
            self.host.unsubscribe(listener);
        }
    }
}

impl<H: Host> Drop for Editor<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
