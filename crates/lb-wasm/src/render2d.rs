//! Canvas2D surface.
//!
//! Implements the editor's `Surface` contract on an HTML `<canvas>` via
//! `CanvasRenderingContext2d`. Text is always drawn left-aligned on the
//! alphabetic baseline; anchor alignment is resolved by the painter.

use base64::Engine;
use lb_core::{RawTextMetrics, TextMeasure};
use lb_render::{Surface, SurfaceError, TextRun};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    background: Option<String>,
}

impl Canvas2dSurface {
    pub fn new(canvas: HtmlCanvasElement, background: Option<String>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            background,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl TextMeasure for Canvas2dSurface {
    fn measure_text(&self, text: &str, family: &str, size: f32) -> RawTextMetrics {
        self.ctx.set_font(&css_font(size, family));
        match self.ctx.measure_text(text) {
            Ok(m) => RawTextMetrics {
                width: m.width() as f32,
                // Absent on old engines: reads back as NaN, which the
                // geometry layer replaces with its fallback ratios.
                ascent: Some(m.actual_bounding_box_ascent() as f32),
                descent: Some(m.actual_bounding_box_descent() as f32),
            },
            Err(e) => {
                log::warn!("measureText failed for {text:?}: {e:?}");
                RawTextMetrics::default()
            }
        }
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        if let Some(bg) = &self.background {
            self.ctx.set_fill_style_str(bg);
            self.ctx.fill_rect(0.0, 0.0, w, h);
        }
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        self.ctx.save();
        self.ctx.set_global_alpha(run.opacity.clamp(0.0, 1.0) as f64);
        self.ctx.set_font(&css_font(run.size, run.family));
        self.ctx.set_fill_style_str(run.color);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("alphabetic");
        let _ = self.ctx.fill_text(run.text, run.origin.x, run.origin.y);
        self.ctx.restore();
    }

    fn export_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let url = self
            .canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| SurfaceError::Backend(format!("{e:?}")))?;
        decode_png_data_url(&url)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

/// CSS `font` shorthand for a size and family. Multi-word family names are
/// quoted; generic families (`sans-serif`) and pre-quoted names pass through.
pub fn css_font(size: f32, family: &str) -> String {
    let family = family.trim();
    let needs_quotes =
        family.contains(char::is_whitespace) && !family.starts_with('"') && !family.starts_with('\'');
    if needs_quotes {
        format!("{size}px \"{family}\"")
    } else {
        format!("{size}px {family}")
    }
}

/// Extract PNG bytes from a `data:image/png;base64,...` URL.
///
/// Browsers return `"data:,"` when the canvas is empty-sized or tainted;
/// that is reported as the surface being unable to export.
pub fn decode_png_data_url(url: &str) -> Result<Vec<u8>, SurfaceError> {
    let payload = url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or(SurfaceError::ExportUnavailable)?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| SurfaceError::Encoding(e.to_string()))
}
