//! Scene → surface drawing.
//!
//! Painting is a pure projection of the scene plus the optional preview:
//! clear, every item in insertion order, then the preview on top.

use crate::surface::{Surface, TextRun};
use lb_core::geometry::{baseline_origin, measure};
use lb_core::{Scene, TextItem};

/// Paint the entire scene, then `preview` (if any) at `preview_opacity`.
pub fn paint_scene(
    surface: &mut dyn Surface,
    scene: &Scene,
    preview: Option<&TextItem>,
    preview_opacity: f32,
) {
    surface.clear();

    for item in scene.items() {
        paint_item(surface, item, 1.0);
    }

    if let Some(preview) = preview {
        paint_item(surface, preview, preview_opacity);
    }
}

fn paint_item(surface: &mut dyn Surface, item: &TextItem, opacity: f32) {
    let m = measure(item, &*surface);
    let origin = baseline_origin(item, &m);
    log::trace!(
        "PAINT text {:?} at ({}, {}) size {} alpha {}",
        item.text,
        origin.x,
        origin.y,
        item.size,
        opacity
    );
    surface.draw_text(&TextRun {
        text: &item.text,
        origin,
        family: &item.family,
        size: item.size,
        color: &item.color,
        opacity,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawOp, RecordingSurface};
    use lb_core::Align;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> TextItem {
        TextItem {
            text: s.to_string(),
            x: 100.0,
            y: 100.0,
            size: 20.0,
            family: "Inter".to_string(),
            color: "#222222".to_string(),
            align: Align::TopLeft,
        }
    }

    #[test]
    fn paints_clear_items_then_preview() {
        let mut surface = RecordingSurface::new();
        let mut scene = Scene::new();
        scene.append(text("one"));
        scene.append(text("two"));
        let preview = text("ghost");

        paint_scene(&mut surface, &scene, Some(&preview), 0.5);

        let ops = surface.ops();
        assert_eq!(ops[0], DrawOp::Clear);
        let drawn: Vec<(&str, f32)> = ops[1..]
            .iter()
            .map(|op| match op {
                DrawOp::Text { text, opacity, .. } => (text.as_str(), *opacity),
                DrawOp::Clear => panic!("unexpected clear"),
            })
            .collect();
        assert_eq!(drawn, vec![("one", 1.0), ("two", 1.0), ("ghost", 0.5)]);
    }

    #[test]
    fn glyph_origin_matches_hit_box() {
        let mut surface = RecordingSurface::new();
        let mut scene = Scene::new();
        scene.append(text("abc"));

        paint_scene(&mut surface, &scene, None, 0.5);

        match &surface.ops()[1] {
            DrawOp::Text { x, y, .. } => {
                // top-left anchor, fallback ascent = 0.75 * 20
                assert_eq!((*x, *y), (100.0, 115.0));
            }
            other => panic!("expected text op, got {other:?}"),
        }
    }
}
