//! Headless surface that records draw calls.
//!
//! Used by tests and by hosts that want to drive the editor without a
//! real canvas. Metrics are synthetic: each character advances
//! `0.6 * size`, and ascent/descent are not reported, so geometry always
//! takes the fallback path.

use crate::surface::{Surface, SurfaceError, TextRun};
use lb_core::{RawTextMetrics, TextMeasure};

/// Advance width per character as a fraction of font size.
pub const ADVANCE_RATIO: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        family: String,
        color: String,
        opacity: f32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything drawn since the surface was created.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Draw ops since the most recent clear (i.e. the current frame).
    pub fn current_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, _family: &str, size: f32) -> RawTextMetrics {
        RawTextMetrics {
            width: ADVANCE_RATIO * size * text.chars().count() as f32,
            ascent: None,
            descent: None,
        }
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        self.ops.push(DrawOp::Text {
            text: run.text.to_string(),
            x: run.origin.x as f32,
            y: run.origin.y as f32,
            size: run.size,
            family: run.family.to_string(),
            color: run.color.to_string(),
            opacity: run.opacity,
        });
    }

    fn export_png(&self) -> Result<Vec<u8>, SurfaceError> {
        Err(SurfaceError::ExportUnavailable)
    }
}
