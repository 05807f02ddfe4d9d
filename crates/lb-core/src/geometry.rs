//! Text measurement and anchor geometry.
//!
//! Converts a [`TextItem`] into the box it occupies on the surface. The
//! same box is used for hit testing and for positioning the glyph run when
//! painting, so what the user sees and what they can grab always agree.

use crate::model::{Align, TextItem};
use kurbo::{Point, Rect};

/// Ascent used when the surface cannot report one, as a fraction of font size.
pub const FALLBACK_ASCENT_RATIO: f32 = 0.75;
/// Descent used when the surface cannot report one, as a fraction of font size.
pub const FALLBACK_DESCENT_RATIO: f32 = 0.25;

/// Metrics as reported by a rendering surface.
///
/// `ascent` / `descent` are `None` when the surface only knows the advance
/// width (older canvas implementations, headless surfaces).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawTextMetrics {
    pub width: f32,
    pub ascent: Option<f32>,
    pub descent: Option<f32>,
}

/// Anything that can measure a run of text in a given font.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, family: &str, size: f32) -> RawTextMetrics;
}

/// Resolved metrics for one item. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
    pub descent: f32,
}

fn usable(v: Option<f32>) -> Option<f32> {
    v.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Measure `item` on `measurer`, falling back to fixed ascent/descent ratios.
///
/// The fallback applies independently to each of ascent and descent.
pub fn measure<M: TextMeasure + ?Sized>(item: &TextItem, measurer: &M) -> Measurement {
    let raw = measurer.measure_text(&item.text, &item.family, item.size);
    let ascent = usable(raw.ascent).unwrap_or(FALLBACK_ASCENT_RATIO * item.size);
    let descent = usable(raw.descent).unwrap_or(FALLBACK_DESCENT_RATIO * item.size);
    let width = if raw.width.is_finite() {
        raw.width.max(0.0)
    } else {
        0.0
    };
    Measurement {
        width,
        height: ascent + descent,
        ascent,
        descent,
    }
}

/// The box `item` occupies given its measurement and alignment anchor.
pub fn bounding_box(item: &TextItem, m: &Measurement) -> Rect {
    let (x, y) = (item.x as f64, item.y as f64);
    let (w, h) = (m.width as f64, m.height as f64);
    let (left, top) = match item.align {
        Align::Center => (x - w / 2.0, y - h / 2.0),
        Align::TopLeft => (x, y),
        Align::TopRight => (x - w, y),
        Align::BottomLeft => (x, y - h),
        Align::BottomRight => (x - w, y - h),
    };
    Rect::new(left, top, left + w, top + h)
}

/// Measure and box in one step.
pub fn item_bounds<M: TextMeasure + ?Sized>(item: &TextItem, measurer: &M) -> Rect {
    bounding_box(item, &measure(item, measurer))
}

/// Point-in-rect with edges counted as inside.
///
/// `kurbo::Rect::contains` excludes the right and bottom edges; hit testing
/// here must include them.
pub fn contains_inclusive(rect: &Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Left/baseline origin for drawing `item`'s glyph run with an alphabetic
/// baseline and left text alignment.
pub fn baseline_origin(item: &TextItem, m: &Measurement) -> Point {
    let rect = bounding_box(item, m);
    Point::new(rect.x0, rect.y0 + m.ascent as f64)
}
