//! Input abstraction layer.
//!
//! Host events (mouse on the container, resize on the window) are
//! normalized into `InputEvent`s. `Listener` names the five
//! registrations a mounted editor holds.

/// A normalized event delivered to a mounted editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed over the container.
    PointerDown,
    /// Button released over the container.
    PointerUp,
    /// Pointer moved; offset relative to the container's padding edge.
    PointerMove { x: f64, y: f64 },
    /// Pointer left the container.
    PointerLeave,
    /// Window resized.
    Resize,
}

impl InputEvent {
    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    /// The listener that delivers this event.
    pub fn listener(&self) -> Listener {
        match self {
            Self::PointerDown => Listener::PointerDown,
            Self::PointerUp => Listener::PointerUp,
            Self::PointerMove { .. } => Listener::PointerMove,
            Self::PointerLeave => Listener::PointerLeave,
            Self::Resize => Listener::Resize,
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Container,
    /// Window-scoped: outlives the component unless removed.
    Window,
}

/// One of the listeners registered at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    PointerDown,
    PointerUp,
    PointerMove,
    PointerLeave,
    Resize,
}

impl Listener {
    pub const ALL: [Listener; 5] = [
        Listener::PointerDown,
        Listener::PointerUp,
        Listener::PointerMove,
        Listener::PointerLeave,
        Listener::Resize,
    ];

    pub fn target(&self) -> ListenerTarget {
        match self {
            Self::Resize => ListenerTarget::Window,
            _ => ListenerTarget::Container,
        }
    }

    /// DOM event type.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::PointerDown => "mousedown",
            Self::PointerUp => "mouseup",
            Self::PointerMove => "mousemove",
            Self::PointerLeave => "mouseleave",
            Self::Resize => "resize",
        }
    }
}

impl std::fmt::Display for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}
