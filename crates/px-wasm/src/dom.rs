//! Browser host: DOM subtree, listeners, and sizing.
//!
//! Builds `<div class="editor"><div class="canvas"><canvas/><canvas/></div></div>`
//! and implements `Host` over it. Listener closures hold a `Weak` handle
//! back to the editor, so a dropped editor is never kept alive by the
//! page's event targets.

use crate::render2d::CanvasSurface;
use js_sys::Function;
use px_core::{CanvasLayout, ContainerSize};
use px_editor::{Editor, Host, InputEvent, Listener, ListenerTarget, MountError};
use px_render::Surface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

pub type SharedEditor = RefCell<Editor<DomHost>>;

type Handler = Closure<dyn FnMut(Event)>;

// ─── Host-wide sizing reset ──────────────────────────────────────────────

/// Remove inline `width`/`height` from every `<canvas>` in `document`.
///
/// Deliberately document-wide: canvases belonging to other components
/// lose their explicit sizing too. Returns how many nodes were reset.
pub fn reset_all_canvas_sizing(document: &Document) -> u32 {
    let Ok(nodes) = document.query_selector_all("canvas") else {
        return 0;
    };
    let mut reset = 0;
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i)
            && let Ok(el) = node.dyn_into::<HtmlElement>()
        {
            clear_explicit_size(&el);
            reset += 1;
        }
    }
    reset
}

fn clear_explicit_size(el: &HtmlElement) {
    let style = el.style();
    let _ = style.remove_property("width");
    let _ = style.remove_property("height");
}

fn set_explicit_size(el: &HtmlElement, width_px: u32, height_px: u32) {
    let style = el.style();
    let _ = style.set_property("width", &format!("{width_px}px"));
    let _ = style.set_property("height", &format!("{height_px}px"));
}

// ─── DOM subtree ─────────────────────────────────────────────────────────

/// `.canvas` stacks its children in a single grid cell.
pub(crate) const CONTAINER_STYLE: &[(&str, &str)] = &[("display", "grid")];

/// Both canvases share the cell and stay in normal flow, so the
/// container's natural box follows the canvases' intrinsic size.
pub(crate) const CANVAS_STYLE: &[(&str, &str)] = &[("grid-area", "1 / 1")];

/// Hover indicator stacks above committed paint.
pub(crate) const BRUSH_STYLE: &[(&str, &str)] = &[("z-index", "1")];

fn apply_style(el: &HtmlElement, declarations: &[(&str, &str)]) {
    let style = el.style();
    for (property, value) in declarations {
        let _ = style.set_property(property, value);
    }
}

/// The elements an editor renders into.
pub struct EditorElements {
    /// `.editor` wrapper, appended to the parent.
    pub root: HtmlElement,
    /// `.canvas` container: receives pointer events and is measured.
    pub container: HtmlElement,
    pub brush: HtmlCanvasElement,
    pub layer: HtmlCanvasElement,
}

impl EditorElements {
    pub fn create(document: &Document, parent: &HtmlElement) -> Result<Self, MountError> {
        let root = create_html(document, "div")?;
        root.set_class_name("editor");

        let container = create_html(document, "div")?;
        container.set_class_name("canvas");
        apply_style(&container, CONTAINER_STYLE);

        let brush = create_canvas(document)?;
        let layer = create_canvas(document)?;
        apply_style(&brush, BRUSH_STYLE);

        container
            .append_child(&brush)
            .and_then(|_| container.append_child(&layer))
            .and_then(|_| root.append_child(&container))
            .and_then(|_| parent.append_child(&root))
            .map_err(|_| MountError::ContainerMissing)?;

        Ok(Self {
            root,
            container,
            brush,
            layer,
        })
    }
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, MountError> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(MountError::ContainerMissing)
}

fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, MountError> {
    let canvas = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or(MountError::ContainerMissing)?;
    apply_style(&canvas, CANVAS_STYLE);
    Ok(canvas)
}

// ─── Host implementation ─────────────────────────────────────────────────

pub struct DomHost {
    window: Window,
    document: Document,
    elements: EditorElements,
    brush: CanvasSurface,
    layer: CanvasSurface,
    editor: Weak<SharedEditor>,
    handlers: HashMap<Listener, Handler>,
}

impl DomHost {
    /// Acquire both drawing contexts. Fails fast if either is missing.
    pub fn new(window: Window, document: Document, elements: EditorElements) -> Result<Self, MountError> {
        let brush = CanvasSurface::acquire(elements.brush.clone(), "brush")?;
        let layer = CanvasSurface::acquire(elements.layer.clone(), "layer")?;
        Ok(Self {
            window,
            document,
            elements,
            brush,
            layer,
            editor: Weak::new(),
            handlers: HashMap::new(),
        })
    }

    /// Point listener callbacks at the editor that owns this host.
    pub fn bind(mut self, editor: Weak<SharedEditor>) -> Self {
        self.editor = editor;
        self
    }

    fn target(&self, listener: Listener) -> &EventTarget {
        match listener.target() {
            ListenerTarget::Container => self.elements.container.as_ref(),
            ListenerTarget::Window => self.window.as_ref(),
        }
    }
}

impl Host for DomHost {
    fn subscribe(&mut self, listener: Listener) -> Result<(), MountError> {
        let editor = self.editor.clone();
        let handler: Handler = Closure::new(move |event: Event| {
            if let Some(input) = to_input(listener, &event) {
                dispatch(&editor, input);
            }
        });
        self.target(listener)
            .add_event_listener_with_callback(listener.event_name(), handler.as_ref().unchecked_ref::<Function>())
            .map_err(|e| MountError::Listener {
                listener,
                reason: format!("{e:?}"),
            })?;
        self.handlers.insert(listener, handler);
        Ok(())
    }

    fn unsubscribe(&mut self, listener: Listener) {
        let Some(handler) = self.handlers.remove(&listener) else {
            return;
        };
        if let Err(e) = self
            .target(listener)
            .remove_event_listener_with_callback(listener.event_name(), handler.as_ref().unchecked_ref::<Function>())
        {
            log::warn!("failed to remove `{listener}` listener: {e:?}");
        }
    }

    fn reset_surface_sizing(&mut self) {
        clear_explicit_size(&self.elements.container);
        let reset = reset_all_canvas_sizing(&self.document);
        log::trace!("cleared explicit sizing on {reset} canvas nodes");
    }

    fn measure_container(&self) -> ContainerSize {
        let container = &self.elements.container;
        ContainerSize::new(container.offset_width() as f64, container.offset_height() as f64)
    }

    fn apply_layout(&mut self, layout: &CanvasLayout) {
        let (w, h) = (layout.width_px, layout.height_px);
        set_explicit_size(&self.elements.container, w, h);
        for canvas in [&self.elements.brush, &self.elements.layer] {
            canvas.set_width(w);
            canvas.set_height(h);
            set_explicit_size(canvas, w, h);
        }
    }

    fn brush_surface(&mut self) -> &mut dyn Surface {
        &mut self.brush
    }

    fn layer_surface(&mut self) -> &mut dyn Surface {
        &mut self.layer
    }
}

// ─── Event plumbing ──────────────────────────────────────────────────────

fn to_input(listener: Listener, event: &Event) -> Option<InputEvent> {
    match listener {
        Listener::PointerDown => Some(InputEvent::PointerDown),
        Listener::PointerUp => Some(InputEvent::PointerUp),
        Listener::PointerLeave => Some(InputEvent::PointerLeave),
        Listener::Resize => Some(InputEvent::Resize),
        Listener::PointerMove => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::from_pointer_move(
                mouse.offset_x() as f64,
                mouse.offset_y() as f64,
            ))
        }
    }
}

fn dispatch(editor: &Weak<SharedEditor>, input: InputEvent) {
    let Some(shared) = editor.upgrade() else {
        return;
    };
    let Ok(mut editor) = shared.try_borrow_mut() else {
        log::warn!("dropping re-entrant {input:?}");
        return;
    };
    editor.handle(input);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declares(styles: &[(&str, &str)], property: &str) -> Option<String> {
        styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.to_string())
    }

    #[test]
    fn canvases_stay_in_normal_flow() {
        for styles in [CONTAINER_STYLE, CANVAS_STYLE, BRUSH_STYLE] {
            assert_eq!(declares(styles, "position"), None);
        }
    }

    #[test]
    fn canvases_share_one_grid_cell() {
        assert_eq!(declares(CONTAINER_STYLE, "display").as_deref(), Some("grid"));
        assert_eq!(declares(CANVAS_STYLE, "grid-area").as_deref(), Some("1 / 1"));
        assert_eq!(declares(BRUSH_STYLE, "z-index").as_deref(), Some("1"));
    }
}
