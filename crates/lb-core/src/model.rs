//! Core data model for Letterboard scenes.
//!
//! A scene is a flat, ordered list of text items. Insertion order is paint
//! order: later items occlude earlier ones, both when painting and when
//! picking. Items are mutated in place only for position updates (drag);
//! every other change goes through append / clear / snapshot restore.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Alignment ───────────────────────────────────────────────────────────

/// Which point of the rendered text box the item's `(x, y)` anchor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    /// `(x, y)` is the geometric center of the box.
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Align {
    pub const ALL: [Align; 5] = [
        Align::Center,
        Align::TopLeft,
        Align::TopRight,
        Align::BottomLeft,
        Align::BottomRight,
    ];

    /// Parse the kebab-case name used by the UI (`"top-left"` etc).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "center" => Some(Align::Center),
            "top-left" => Some(Align::TopLeft),
            "top-right" => Some(Align::TopRight),
            "bottom-left" => Some(Align::BottomLeft),
            "bottom-right" => Some(Align::BottomRight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::TopLeft => "top-left",
            Align::TopRight => "top-right",
            Align::BottomLeft => "bottom-left",
            Align::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Text items ──────────────────────────────────────────────────────────

/// A single placed text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Font size in surface pixels. Clamped upstream (see [`crate::size`]).
    pub size: f32,
    pub family: String,
    pub color: String,
    pub align: Align,
}

// ─── Snapshots ───────────────────────────────────────────────────────────

/// An independent copy of a scene at one instant.
///
/// Snapshots never hand out mutable access to their items, and installing
/// one into a [`Scene`] clones the items, so a stack entry can never alias
/// live state that is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    items: Vec<TextItem>,
}

impl Snapshot {
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// The ordered collection of placed text items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    items: Vec<TextItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item on top of everything else.
    pub fn append(&mut self, item: TextItem) {
        log::trace!(
            "scene: append {:?} at ({}, {}) [{}]",
            item.text,
            item.x,
            item.y,
            item.align
        );
        self.items.push(item);
    }

    /// Discard the current items and install a deep copy of `snapshot`.
    pub fn replace_all(&mut self, snapshot: &Snapshot) {
        self.items.clone_from(&snapshot.items);
    }

    /// Move the item at `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` if an item was updated.
    pub fn mutate_position(&mut self, index: usize, x: f32, y: f32) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.x = x;
                item.y = y;
                true
            }
            None => {
                log::warn!(
                    "scene: mutate_position on missing index {index} (len {})",
                    self.items.len()
                );
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Deep-copy the current items.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
        }
    }

    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TextItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize the items for read-only consumers (panels, previews).
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(text: &str, x: f32, y: f32) -> TextItem {
        TextItem {
            text: text.to_string(),
            x,
            y,
            size: 48.0,
            family: "Inter".to_string(),
            color: "#111111".to_string(),
            align: Align::Center,
        }
    }

    #[test]
    fn append_preserves_order() {
        let mut scene = Scene::new();
        scene.append(item("a", 0.0, 0.0));
        scene.append(item("b", 1.0, 1.0));
        let texts: Vec<&str> = scene.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn duplicates_by_value_are_allowed() {
        let mut scene = Scene::new();
        scene.append(item("same", 5.0, 5.0));
        scene.append(item("same", 5.0, 5.0));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn mutate_position_only_touches_coordinates() {
        let mut scene = Scene::new();
        scene.append(item("a", 10.0, 20.0));
        assert!(scene.mutate_position(0, 30.0, 40.0));
        let moved = scene.get(0).unwrap();
        assert_eq!((moved.x, moved.y), (30.0, 40.0));
        assert_eq!(moved.text, "a");
        assert_eq!(moved.size, 48.0);
    }

    #[test]
    fn mutate_position_out_of_range_is_noop() {
        let mut scene = Scene::new();
        scene.append(item("a", 10.0, 20.0));
        let before = scene.clone();
        assert!(!scene.mutate_position(3, 1.0, 1.0));
        assert_eq!(scene, before);
    }

    #[test]
    fn snapshot_does_not_alias_scene() {
        let mut scene = Scene::new();
        scene.append(item("a", 10.0, 20.0));
        let snap = scene.snapshot();

        scene.mutate_position(0, 99.0, 99.0);
        assert_eq!(snap.items()[0].x, 10.0);

        scene.replace_all(&snap);
        scene.mutate_position(0, 50.0, 50.0);
        assert_eq!(snap.items()[0].x, 10.0, "restoring must copy, not share");
    }

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::new();
        scene.append(item("a", 0.0, 0.0));
        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn align_round_trips_through_names() {
        for align in Align::ALL {
            assert_eq!(Align::from_name(align.as_str()), Some(align));
        }
        assert_eq!(Align::from_name("middle"), None);
    }

    #[test]
    fn scene_json_uses_kebab_case_align() {
        let mut scene = Scene::new();
        let mut it = item("HELLO", 100.0, 100.0);
        it.align = Align::TopLeft;
        scene.append(it);
        let json = scene.to_json();
        assert!(json.contains(r#""align":"top-left""#), "got {json}");
    }
}
