//! Host environment seam.
//!
//! The editor never touches the DOM (or any windowing system) directly.
//! A `Host` owns the container, the two drawing surfaces and the event
//! registrations; the editor drives it through this trait.

use crate::input::Listener;
use px_core::{CanvasLayout, ContainerSize};
use px_render::Surface;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("drawing surface `{0}` is unavailable")]
    SurfaceUnavailable(&'static str),
    #[error("editor container is missing")]
    ContainerMissing,
    #[error("failed to register `{listener}` listener: {reason}")]
    Listener { listener: Listener, reason: String },
    #[error("editor is already mounted")]
    AlreadyMounted,
}

pub trait Host {
    /// Start delivering events for `listener` to the editor.
    fn subscribe(&mut self, listener: Listener) -> Result<(), MountError>;

    /// Stop delivering events for `listener`. Unknown listeners are ignored.
    fn unsubscribe(&mut self, listener: Listener);

    /// Drop explicit sizing from every drawing surface the host has
    /// materialized, not only this editor's. Runs before measuring so
    /// stale inline sizes don't skew the container's natural layout.
    fn reset_surface_sizing(&mut self);

    /// Natural content box of the container.
    fn measure_container(&self) -> ContainerSize;

    /// Apply explicit dimensions to the container and both surfaces.
    fn apply_layout(&mut self, layout: &CanvasLayout);

    /// Hover layer, stacked on top.
    fn brush_surface(&mut self) -> &mut dyn Surface;

    /// Committed paint layer.
    fn layer_surface(&mut self) -> &mut dyn Surface;
}
