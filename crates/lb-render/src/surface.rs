//! Rendering surface contract.
//!
//! The editor never touches a concrete canvas. It measures and draws through
//! this trait, which the browser bridge implements on top of Canvas2D and
//! the tests implement with [`crate::recording::RecordingSurface`].

use kurbo::Point;
use lb_core::TextMeasure;

/// A fully resolved glyph run, positioned by its left/baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    /// Left edge, alphabetic baseline.
    pub origin: Point,
    pub family: &'a str,
    pub size: f32,
    pub color: &'a str,
    /// 1.0 for placed items, reduced for the placement preview.
    pub opacity: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("this surface cannot produce an image")]
    ExportUnavailable,
    #[error("image encoding failed: {0}")]
    Encoding(String),
    #[error("surface backend error: {0}")]
    Backend(String),
}

pub trait Surface: TextMeasure {
    /// Erase everything.
    fn clear(&mut self);

    fn draw_text(&mut self, run: &TextRun<'_>);

    /// Encode the current pixels as PNG.
    fn export_png(&self) -> Result<Vec<u8>, SurfaceError>;
}
