//! Hit testing: point → item lookup.
//!
//! Walks the scene back-to-front (last painted = topmost) so that picking
//! agrees with paint order.

use kurbo::Point;
use lb_core::geometry::{contains_inclusive, item_bounds};
use lb_core::{Scene, TextMeasure};

/// Index of the topmost item whose box contains `(px, py)`, edges included.
/// Returns `None` if the point is over empty canvas.
pub fn hit_test<M: TextMeasure + ?Sized>(
    scene: &Scene,
    measurer: &M,
    px: f32,
    py: f32,
) -> Option<usize> {
    let point = Point::new(px as f64, py as f64);
    scene
        .items()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, item)| contains_inclusive(&item_bounds(*item, measurer), point))
        .map(|(idx, _)| idx)
}
