//! WASM bridge for the pixel editor — mounts the Rust editor into a page.
//!
//! Compiled via `wasm-pack build --target web`. JavaScript creates a
//! `PixelEditor` under a parent element and calls `unmount()` (or
//! `free()`) when the host page tears the component down.

mod dom;
mod render2d;

pub use dom::reset_all_canvas_sizing;

use dom::{DomHost, EditorElements, SharedEditor};
use px_core::EditorConfig;
use px_editor::{Editor, Host, MountError};
use px_render::BrushPosition;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// A mounted editor instance.
///
/// Owns the editor and the `.editor` subtree. All five listeners are
/// removed on `unmount()`, or on drop if JS never called it.
#[wasm_bindgen]
pub struct PixelEditor {
    inner: Rc<SharedEditor>,
    root: HtmlElement,
    mounted: bool,
}

#[wasm_bindgen]
impl PixelEditor {
    /// Build the editor DOM under `parent` and mount it.
    ///
    /// `config_json` accepts `{"height": rows, "width": cols}`; pass an
    /// empty string for the 64 × 48 default.
    #[wasm_bindgen(constructor)]
    pub fn new(parent: &HtmlElement, config_json: &str) -> Result<PixelEditor, JsValue> {
        init_hooks();

        let config = EditorConfig::from_json(config_json).map_err(to_js)?;
        let window = web_sys::window().ok_or_else(|| to_js(MountError::ContainerMissing))?;
        let document = window
            .document()
            .ok_or_else(|| to_js(MountError::ContainerMissing))?;

        let elements = EditorElements::create(&document, parent).map_err(to_js)?;
        let root = elements.root.clone();
        let host = match DomHost::new(window, document, elements) {
            Ok(host) => host,
            Err(err) => {
                root.remove();
                return Err(to_js(err));
            }
        };

        let inner = Rc::new_cyclic(|weak| RefCell::new(Editor::new(config, host.bind(weak.clone()))));
        if let Err(err) = inner.borrow_mut().mount() {
            root.remove();
            return Err(to_js(err));
        }

        Ok(Self {
            inner,
            root,
            mounted: true,
        })
    }

    /// Remove all listeners and detach the editor from the page.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        release_listeners(&self.inner);
        self.root.remove();
        self.mounted = false;
    }

    /// Display pixels per cell edge.
    pub fn pixel_size(&self) -> u32 {
        self.inner.borrow().state().pixel_size
    }

    /// Number of painted cells.
    pub fn painted_count(&self) -> u32 {
        self.inner.borrow().state().cells.len() as u32
    }

    /// Current brush position as JSON `[col, row]` (1-indexed) or `null`.
    pub fn brush(&self) -> String {
        brush_json(self.inner.borrow().state().brush)
    }

    pub fn is_pointer_down(&self) -> bool {
        self.inner.borrow().state().pointer_down
    }

    /// Force a full redraw of both layers.
    pub fn redraw(&self) {
        if let Ok(mut editor) = self.inner.try_borrow_mut() {
            editor.redraw();
        }
    }
}

impl Drop for PixelEditor {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

/// Unmount `editor` unless an event handler currently holds it.
///
/// A busy editor keeps its listeners until the last `Rc` drops and the
/// editor's own `Drop` unmounts it. Returns whether it was unmounted now.
fn release_listeners<H: Host>(editor: &RefCell<Editor<H>>) -> bool {
    match editor.try_borrow_mut() {
        Ok(mut editor) => {
            editor.unmount();
            true
        }
        Err(_) => {
            log::warn!("editor busy during unmount; listeners stay registered until it is dropped");
            false
        }
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn brush_json(brush: Option<BrushPosition>) -> String {
    serde_json::to_string(&brush.map(|b| [b.col, b.row])).unwrap_or_else(|_| "null".to_string())
}

// ─── Logging and panic hook ──────────────────────────────────────────────

fn init_hooks() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            wasm_logger::init(wasm_logger::Config::default());
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("pixel editor WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone validation (no DOM needed) ───────────────────────────────

/// Validate an editor config. Returns JSON: `{"ok":true,"width":..,"height":..}`
/// or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_config(source: &str) -> String {
    let value = match EditorConfig::from_json(source) {
        Ok(config) => serde_json::json!({
            "ok": true,
            "width": config.width,
            "height": config.height,
        }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    value.to_string()
}
