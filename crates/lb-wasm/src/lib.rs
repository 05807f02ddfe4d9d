//! WASM bridge for Letterboard: exposes the editor engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM
//! controls and the animation-frame loop; every mutating method returns
//! `true` when the page must call `requestAnimationFrame(() => c.frame())`.

mod render2d;

use lb_core::{Align, EditorConfig};
use lb_editor::{DisplayMapping, InputFields, InteractionController, Modifiers};
use render2d::Canvas2dSurface;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

const CLEAR_PROMPT: &str = "Remove all text from the canvas?";

/// The main WASM-facing canvas controller.
#[wasm_bindgen]
pub struct LbCanvas {
    controller: InteractionController,
    surface: Canvas2dSurface,
}

#[wasm_bindgen]
impl LbCanvas {
    /// Attach to `canvas`. `config_json` may be empty or a partial config
    /// object; invalid config falls back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<LbCanvas, JsValue> {
        console_error_panic_hook_setup();

        let mut config = if config_json.trim().is_empty() {
            EditorConfig::default()
        } else {
            EditorConfig::from_json(config_json).unwrap_or_else(|e| {
                log::warn!("{e}; using defaults");
                EditorConfig::default()
            })
        };

        let (width, height) = snap_canvas_size(&mut config);
        canvas.set_width(width);
        canvas.set_height(height);
        let surface = Canvas2dSurface::new(canvas, config.background.clone())?;

        let mut this = Self {
            controller: InteractionController::new(config),
            surface,
        };
        // The first frame paints the background.
        this.controller.invalidate();
        Ok(this)
    }

    // ─── Pointer input (client coordinates) ──────────────────────────────

    pub fn handle_pointer_down(&mut self, client_x: f32, client_y: f32) -> bool {
        let (x, y) = self.mapping().to_surface(client_x, client_y);
        self.controller.pointer_down(x, y, &self.surface).request_frame
    }

    pub fn handle_pointer_move(&mut self, client_x: f32, client_y: f32) -> bool {
        let (x, y) = self.mapping().to_surface(client_x, client_y);
        self.controller.pointer_move(x, y, &self.surface).request_frame
    }

    pub fn handle_pointer_up(&mut self, client_x: f32, client_y: f32) -> bool {
        let (x, y) = self.mapping().to_surface(client_x, client_y);
        self.controller.pointer_up(x, y).request_frame
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.controller.pointer_leave().request_frame
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"action":"<name>|none","changed":bool,"requestFrame":bool}`.
    ///
    /// For `"export"` the page is expected to call `export_png` and
    /// download the bytes as `export_filename()`.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let mods = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        let (action, response) = self.controller.handle_key(key, mods, confirm_clear);
        serde_json::json!({
            "action": action.map_or("none", |a| a.name()),
            "changed": response.changed,
            "requestFrame": response.request_frame,
        })
        .to_string()
    }

    // ─── Controls ────────────────────────────────────────────────────────

    /// Mirror the text/font/size/color/alignment controls.
    pub fn set_fields(
        &mut self,
        text: &str,
        family: &str,
        size: &str,
        color: &str,
        align: &str,
    ) -> bool {
        let align = Align::from_name(align).unwrap_or_else(|| {
            log::warn!("unknown alignment {align:?}, using center");
            Align::Center
        });
        let fields = InputFields {
            text: text.to_string(),
            family: family.to_string(),
            size: size.to_string(),
            color: color.to_string(),
            align,
        };
        self.controller.set_fields(fields).request_frame
    }

    pub fn set_placement_mode(&mut self, on: bool) -> bool {
        self.controller.set_placement_mode(on).request_frame
    }

    pub fn placement_mode(&self) -> bool {
        self.controller.placement_mode()
    }

    pub fn place_center(&mut self) -> bool {
        self.controller.place_center().request_frame
    }

    /// Remove all items after a `window.confirm` prompt.
    pub fn clear(&mut self) -> bool {
        self.controller.clear(confirm_clear).request_frame
    }

    pub fn undo(&mut self) -> bool {
        self.controller.undo().request_frame
    }

    pub fn redo(&mut self) -> bool {
        self.controller.redo().request_frame
    }

    pub fn can_undo(&self) -> bool {
        self.controller.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.controller.can_redo()
    }

    // ─── Rendering & export ──────────────────────────────────────────────

    /// Animation-frame callback. Returns `true` if anything was drawn.
    pub fn frame(&mut self) -> bool {
        self.controller.render_frame(&mut self.surface)
    }

    /// Whether a redraw is waiting for the next frame.
    pub fn needs_frame(&self) -> bool {
        self.controller.frame_pending()
    }

    /// Request a redraw, e.g. after a web font finished loading.
    pub fn invalidate(&mut self) -> bool {
        self.controller.invalidate()
    }

    /// Encode the canvas (without the placement preview) as PNG.
    ///
    /// When a preview was visible, `requestFrame` on the result is `true`
    /// and the page must schedule a frame to bring it back.
    pub fn export_png(&mut self) -> Result<PngExport, JsValue> {
        let (result, response) = self.controller.export_png(&mut self.surface);
        let bytes = result.map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(PngExport {
            bytes,
            request_frame: response.request_frame,
        })
    }

    pub fn export_filename(&self) -> String {
        self.controller.config().export_filename.clone()
    }

    // ─── Read-only views ─────────────────────────────────────────────────

    /// The placed items as a JSON array, for font panels and the like.
    pub fn scene_json(&self) -> String {
        self.controller.scene().to_json()
    }

    /// The current placement preview as JSON, or `null`.
    pub fn preview_json(&self) -> String {
        serde_json::to_string(&self.controller.preview()).unwrap_or_else(|_| "null".to_string())
    }
}

impl LbCanvas {
    /// Client → surface mapping from the canvas's current on-page rect.
    fn mapping(&self) -> DisplayMapping {
        let canvas = self.surface.canvas();
        let rect = canvas.get_bounding_client_rect();
        DisplayMapping {
            left: rect.x() as f32,
            top: rect.y() as f32,
            presented_width: rect.width() as f32,
            presented_height: rect.height() as f32,
            logical_width: canvas.width() as f32,
            logical_height: canvas.height() as f32,
        }
    }
}

/// Encoded PNG plus the frame request raised by restoring the preview.
#[wasm_bindgen]
pub struct PngExport {
    bytes: Vec<u8>,
    request_frame: bool,
}

#[wasm_bindgen]
impl PngExport {
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.bytes.as_slice())
    }

    #[wasm_bindgen(getter, js_name = requestFrame)]
    pub fn request_frame(&self) -> bool {
        self.request_frame
    }
}

/// Round the configured canvas to whole pixels and write the result back,
/// so the controller's center matches the canvas backing store.
fn snap_canvas_size(config: &mut EditorConfig) -> (u32, u32) {
    let width = config.canvas_width.round().max(1.0) as u32;
    let height = config.canvas_height.round().max(1.0) as u32;
    config.canvas_width = width as f32;
    config.canvas_height = height as f32;
    (width, height)
}

fn confirm_clear() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(CLEAR_PROMPT).ok())
        .unwrap_or(false)
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Letterboard WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
