//! Pointer-driven interaction state machine.
//!
//! The controller owns the scene, its history and the redraw scheduler, and
//! turns pointer sequences into drag / preview / place actions:
//!
//! | State | Event | Result |
//! |-------|-------|--------|
//! | Idle, Previewing | down on item | record, → Dragging |
//! | Idle, Previewing | down on empty | no change |
//! | Dragging | move | item follows pointer (minus grab offset) |
//! | Dragging | up | item lands at release point, → Idle, no new history entry |
//! | Idle, Previewing | move | → Previewing if placing over empty canvas, else Idle |
//! | Idle, Previewing | up | place item if placement mode and text set |
//! | any | leave | → Idle, preview cleared |
//!
//! Undo, redo, clear and center placement are ignored mid-drag.
//!
//! The history entry for a drag is taken on press, before any movement. A
//! press on an item that is released without moving still counts as an
//! action: it adds an undo step and discards the redo stack.

use crate::fields::InputFields;
use crate::history::History;
use crate::input::{InputEvent, Modifiers};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use kurbo::{Point, Vec2};
use lb_core::{Align, EditorConfig, Scene, SizePolicy, TextItem, TextMeasure};
use lb_render::{RenderScheduler, Surface, SurfaceError, hit_test, paint_scene};

/// Where the pointer gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    /// Moving the item at `index`; `offset` is pointer minus item anchor at
    /// grab time and stays fixed for the whole gesture.
    Dragging { index: usize, offset: Vec2 },
    /// Hovering empty canvas in placement mode.
    Previewing { point: Point },
}

/// What an input did.
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Scene, preview, or history flags changed.
    pub changed: bool,
    /// The host must schedule a frame callback and then call
    /// [`InteractionController::render_frame`]. Only the first change
    /// since the last frame sets this.
    pub request_frame: bool,
}

impl Response {
    pub const NONE: Self = Self {
        changed: false,
        request_frame: false,
    };
}

pub struct InteractionController {
    scene: Scene,
    history: History,
    state: Interaction,
    placement_mode: bool,
    fields: InputFields,
    size_policy: SizePolicy,
    config: EditorConfig,
    scheduler: RenderScheduler,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl InteractionController {
    /// Build a controller. An invalid config is still accepted; size
    /// clamping tolerates inverted bounds.
    pub fn new(config: EditorConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("controller: {e}");
        }
        Self {
            scene: Scene::new(),
            history: History::new(config.history_depth),
            state: Interaction::Idle,
            placement_mode: true,
            fields: InputFields::default(),
            size_policy: config.size_policy(),
            config,
            scheduler: RenderScheduler::new(),
        }
    }

    // ─── Read-only views ─────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> Interaction {
        self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn fields(&self) -> &InputFields {
        &self.fields
    }

    pub fn placement_mode(&self) -> bool {
        self.placement_mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, Interaction::Dragging { .. })
    }

    /// The placement preview, recomputed from the current fields.
    pub fn preview(&self) -> Option<TextItem> {
        match self.state {
            Interaction::Previewing { point } if self.placement_mode => {
                self.fields
                    .item_at(point.x as f32, point.y as f32, &self.size_policy)
            }
            _ => None,
        }
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// Dispatch a pointer event. Key events are ignored here; see
    /// [`Self::handle_key`].
    pub fn handle_event<M: TextMeasure + ?Sized>(
        &mut self,
        event: &InputEvent,
        measurer: &M,
    ) -> Response {
        match *event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y, measurer),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y, measurer),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Key { .. } => Response::NONE,
        }
    }

    pub fn pointer_down<M: TextMeasure + ?Sized>(
        &mut self,
        x: f32,
        y: f32,
        measurer: &M,
    ) -> Response {
        if self.is_dragging() {
            return Response::NONE;
        }
        let Some(index) = hit_test(&self.scene, measurer, x, y) else {
            return Response::NONE;
        };
        let Some(item) = self.scene.get(index) else {
            return Response::NONE;
        };
        let offset = Vec2::new((x - item.x) as f64, (y - item.y) as f64);

        // One snapshot for the whole gesture, however many moves follow.
        self.history.record_before_action(&self.scene);
        self.state = Interaction::Dragging { index, offset };
        log::debug!("controller: drag start #{index} offset ({}, {})", offset.x, offset.y);
        self.redraw()
    }

    pub fn pointer_move<M: TextMeasure + ?Sized>(
        &mut self,
        x: f32,
        y: f32,
        measurer: &M,
    ) -> Response {
        if let Interaction::Dragging { index, offset } = self.state {
            let nx = (x as f64 - offset.x) as f32;
            let ny = (y as f64 - offset.y) as f32;
            log::trace!("controller: drag #{index} → ({nx}, {ny})");
            if self.scene.mutate_position(index, nx, ny) {
                return self.redraw();
            }
            return Response::NONE;
        }

        let before = self.preview();
        let over_empty = self.placement_mode
            && self.fields.has_text()
            && hit_test(&self.scene, measurer, x, y).is_none();
        self.state = if over_empty {
            Interaction::Previewing {
                point: Point::new(x as f64, y as f64),
            }
        } else {
            Interaction::Idle
        };

        if self.preview() != before {
            self.redraw()
        } else {
            Response::NONE
        }
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> Response {
        if let Interaction::Dragging { index, offset } = self.state {
            self.state = Interaction::Idle;
            let nx = (x as f64 - offset.x) as f32;
            let ny = (y as f64 - offset.y) as f32;
            log::debug!("controller: drag end #{index} at ({nx}, {ny})");
            let moved = self
                .scene
                .get(index)
                .is_some_and(|item| item.x != nx || item.y != ny);
            if moved && self.scene.mutate_position(index, nx, ny) {
                return self.redraw();
            }
            return Response::NONE;
        }

        if !self.placement_mode {
            return Response::NONE;
        }
        let Some(item) = self.fields.item_at(x, y, &self.size_policy) else {
            return Response::NONE;
        };

        self.history.record_before_action(&self.scene);
        log::debug!("controller: place {:?} at ({x}, {y})", item.text);
        self.scene.append(item);
        self.state = Interaction::Idle;
        self.redraw()
    }

    pub fn pointer_leave(&mut self) -> Response {
        let had_preview = self.preview().is_some();
        if let Interaction::Dragging { index, .. } = self.state {
            log::debug!("controller: drag #{index} ended by pointer leave");
        }
        self.state = Interaction::Idle;
        if had_preview {
            self.redraw()
        } else {
            Response::NONE
        }
    }

    // ─── Field and mode updates ──────────────────────────────────────────

    /// Replace the input field values. A visible preview follows along.
    pub fn set_fields(&mut self, fields: InputFields) -> Response {
        let before = self.preview();
        self.fields = fields;
        if self.preview() != before {
            self.redraw()
        } else {
            Response::NONE
        }
    }

    pub fn set_placement_mode(&mut self, on: bool) -> Response {
        if self.placement_mode == on {
            return Response::NONE;
        }
        let had_preview = self.preview().is_some();
        self.placement_mode = on;
        if !on && matches!(self.state, Interaction::Previewing { .. }) {
            self.state = Interaction::Idle;
        }
        log::debug!("controller: placement mode {}", if on { "on" } else { "off" });
        Response {
            changed: true,
            request_frame: had_preview && self.scheduler.invalidate(),
        }
    }

    // ─── Discrete actions ────────────────────────────────────────────────

    /// Remove every item after `confirm` agrees. Declining, an empty scene,
    /// or an active drag leave everything untouched.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> Response {
        if self.is_dragging() || self.scene.is_empty() {
            return Response::NONE;
        }
        if !confirm() {
            log::debug!("controller: clear declined");
            return Response::NONE;
        }
        self.history.record_before_action(&self.scene);
        self.scene.clear();
        log::debug!("controller: cleared scene");
        self.redraw()
    }

    /// Place the current text at the exact canvas center, center-aligned.
    pub fn place_center(&mut self) -> Response {
        if self.is_dragging() {
            return Response::NONE;
        }
        let (cx, cy) = self.config.center();
        let Some(item) = self
            .fields
            .item_with_align(cx, cy, Align::Center, &self.size_policy)
        else {
            return Response::NONE;
        };
        self.history.record_before_action(&self.scene);
        log::debug!("controller: place {:?} at center", item.text);
        self.scene.append(item);
        self.redraw()
    }

    pub fn undo(&mut self) -> Response {
        if self.is_dragging() || !self.history.undo(&mut self.scene) {
            return Response::NONE;
        }
        self.redraw()
    }

    pub fn redo(&mut self) -> Response {
        if self.is_dragging() || !self.history.redo(&mut self.scene) {
            return Response::NONE;
        }
        self.redraw()
    }

    /// Resolve and apply a keyboard accelerator.
    ///
    /// `Export` is reported but not performed: it needs the host's surface
    /// (see [`Self::export_png`]).
    pub fn handle_key(
        &mut self,
        key: &str,
        mods: Modifiers,
        confirm: impl FnOnce() -> bool,
    ) -> (Option<ShortcutAction>, Response) {
        let Some(action) = ShortcutMap::resolve(key, mods) else {
            return (None, Response::NONE);
        };
        let response = match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::ClearAll => self.clear(confirm),
            ShortcutAction::PlaceCenter => self.place_center(),
            ShortcutAction::TogglePlacement => self.set_placement_mode(!self.placement_mode),
            ShortcutAction::Export => Response::NONE,
        };
        (Some(action), response)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Frame boundary: repaint if anything changed since the last frame.
    /// Returns `true` if a redraw happened.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) -> bool {
        let preview = self.preview();
        let scene = &self.scene;
        let opacity = self.config.preview_opacity;
        self.scheduler
            .run_frame(|| paint_scene(surface, scene, preview.as_ref(), opacity))
    }

    /// Force a redraw on the next frame (surface resized, fonts loaded).
    /// Returns `true` if the host must schedule a frame callback.
    pub fn invalidate(&mut self) -> bool {
        self.scheduler.invalidate()
    }

    pub fn frame_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Paint the scene without the preview and encode it as PNG.
    ///
    /// If a preview was on screen, a redraw is scheduled to bring it back;
    /// the returned response carries that frame request. Failure leaves
    /// scene and history untouched.
    pub fn export_png(
        &mut self,
        surface: &mut dyn Surface,
    ) -> (Result<Vec<u8>, SurfaceError>, Response) {
        paint_scene(surface, &self.scene, None, self.config.preview_opacity);
        let result = surface.export_png();
        match &result {
            Ok(bytes) => log::debug!("controller: exported {} bytes", bytes.len()),
            Err(e) => log::warn!("controller: export failed: {e}"),
        }
        let response = if self.preview().is_some() {
            Response {
                changed: false,
                request_frame: self.scheduler.invalidate(),
            }
        } else {
            Response::NONE
        };
        (result, response)
    }

    fn redraw(&mut self) -> Response {
        Response {
            changed: true,
            request_frame: self.scheduler.invalidate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lb_render::recording::RecordingSurface;
    use pretty_assertions::assert_eq;

    fn controller_with_text(text: &str) -> (InteractionController, RecordingSurface) {
        let config = EditorConfig {
            canvas_width: 1000.0,
            canvas_height: 800.0,
            ..EditorConfig::default()
        };
        let mut ctl = InteractionController::new(config);
        let _ = ctl.set_fields(InputFields {
            text: text.to_string(),
            ..InputFields::default()
        });
        (ctl, RecordingSurface::new())
    }

    #[test]
    fn move_over_empty_canvas_previews() {
        let (mut ctl, surface) = controller_with_text("Hi");
        let r = ctl.pointer_move(200.0, 150.0, &surface);
        assert!(r.changed && r.request_frame);
        assert_eq!(
            ctl.state(),
            Interaction::Previewing {
                point: Point::new(200.0, 150.0)
            }
        );
        let preview = ctl.preview().unwrap();
        assert_eq!((preview.x, preview.y), (200.0, 150.0));
    }

    #[test]
    fn empty_text_never_previews() {
        let (mut ctl, surface) = controller_with_text("");
        let _ = ctl.pointer_move(200.0, 150.0, &surface);
        assert_eq!(ctl.state(), Interaction::Idle);
        assert_eq!(ctl.preview(), None);
    }

    #[test]
    fn hovering_an_item_hides_preview() {
        let (mut ctl, surface) = controller_with_text("Hi");
        let _ = ctl.pointer_up(200.0, 150.0);
        let _ = ctl.pointer_move(200.0, 150.0, &surface);
        assert_eq!(ctl.state(), Interaction::Idle);
    }

    #[test]
    fn leave_clears_preview() {
        let (mut ctl, surface) = controller_with_text("Hi");
        let _ = ctl.pointer_move(10.0, 10.0, &surface);
        let r = ctl.pointer_leave();
        assert!(r.changed);
        assert_eq!(ctl.state(), Interaction::Idle);
        assert_eq!(ctl.preview(), None);
    }

    #[test]
    fn placement_off_blocks_place_and_preview() {
        let (mut ctl, surface) = controller_with_text("Hi");
        let _ = ctl.set_placement_mode(false);
        let _ = ctl.pointer_move(10.0, 10.0, &surface);
        let r = ctl.pointer_up(10.0, 10.0);
        assert_eq!(r, Response::NONE);
        assert!(ctl.scene().is_empty());
        assert!(!ctl.can_undo());
    }

    #[test]
    fn place_center_uses_exact_center() {
        let (mut ctl, _) = controller_with_text("Mid");
        let _ = ctl.set_fields(InputFields {
            text: "Mid".to_string(),
            align: Align::BottomRight,
            ..InputFields::default()
        });
        let _ = ctl.place_center();
        let item = &ctl.scene().items()[0];
        assert_eq!((item.x, item.y, item.align), (500.0, 400.0, Align::Center));
        assert!(ctl.can_undo());
    }

    #[test]
    fn place_center_with_empty_text_is_silent() {
        let (mut ctl, _) = controller_with_text("");
        assert_eq!(ctl.place_center(), Response::NONE);
        assert!(!ctl.can_undo());
    }

    #[test]
    fn undo_ignored_mid_drag() {
        let (mut ctl, surface) = controller_with_text("Drag");
        let _ = ctl.pointer_up(300.0, 300.0);
        let _ = ctl.pointer_down(300.0, 300.0, &surface);
        assert!(ctl.is_dragging());
        assert_eq!(ctl.undo(), Response::NONE);
        assert_eq!(ctl.scene().len(), 1);
    }

    #[test]
    fn frames_are_coalesced() {
        let (mut ctl, mut surface) = controller_with_text("Hi");
        let first = ctl.pointer_move(10.0, 10.0, &surface);
        let second = ctl.pointer_move(20.0, 20.0, &surface);
        assert!(first.request_frame);
        assert!(second.changed && !second.request_frame);

        assert!(ctl.render_frame(&mut surface));
        assert!(!ctl.render_frame(&mut surface));
    }

    #[test]
    fn preview_drawn_last_and_translucent() {
        let (mut ctl, mut surface) = controller_with_text("Hi");
        let _ = ctl.pointer_up(100.0, 100.0);
        let _ = ctl.pointer_move(600.0, 600.0, &surface);
        ctl.render_frame(&mut surface);

        let frame = surface.current_frame();
        assert_eq!(frame.len(), 2);
        match &frame[1] {
            lb_render::recording::DrawOp::Text { opacity, .. } => assert_eq!(*opacity, 0.5),
            other => panic!("expected preview text, got {other:?}"),
        }
    }

    #[test]
    fn export_failure_leaves_state_alone() {
        let (mut ctl, mut surface) = controller_with_text("Hi");
        let _ = ctl.pointer_up(100.0, 100.0);
        let before = ctl.scene().clone();

        let (result, _) = ctl.export_png(&mut surface);
        assert!(matches!(result, Err(SurfaceError::ExportUnavailable)));
        assert_eq!(ctl.scene(), &before);
        assert_eq!(ctl.history().undo_depth(), 1);
    }

    #[test]
    fn export_with_preview_requests_a_frame() {
        let (mut ctl, mut surface) = controller_with_text("Hi");
        let (_, r) = ctl.export_png(&mut surface);
        assert_eq!(r, Response::NONE);

        let _ = ctl.pointer_move(200.0, 150.0, &surface);
        assert!(ctl.render_frame(&mut surface));
        let (_, r) = ctl.export_png(&mut surface);
        assert!(r.request_frame);
        assert!(ctl.frame_pending());
    }

    #[test]
    fn keyboard_undo_redo() {
        let (mut ctl, _) = controller_with_text("Hi");
        let _ = ctl.pointer_up(100.0, 100.0);
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };

        let (action, r) = ctl.handle_key("z", cmd, || false);
        assert_eq!(action, Some(ShortcutAction::Undo));
        assert!(r.changed);
        assert!(ctl.scene().is_empty());

        let (action, _) = ctl.handle_key("y", cmd, || false);
        assert_eq!(action, Some(ShortcutAction::Redo));
        assert_eq!(ctl.scene().len(), 1);
    }

    #[test]
    fn inverted_font_range_still_places() {
        let mut ctl = InteractionController::new(EditorConfig {
            min_font_size: 900.0,
            max_font_size: 800.0,
            ..EditorConfig::default()
        });
        let _ = ctl.set_fields(InputFields {
            text: "x".to_string(),
            ..InputFields::default()
        });

        let r = ctl.pointer_up(10.0, 10.0);
        assert!(r.changed);
        assert_eq!(ctl.scene().items()[0].size, 800.0);
    }

    #[test]
    fn pressing_an_item_drops_redo() {
        let (mut ctl, surface) = controller_with_text("Hi");
        let _ = ctl.pointer_up(100.0, 100.0);
        let _ = ctl.pointer_up(300.0, 300.0);
        let _ = ctl.undo();
        assert!(ctl.can_redo());

        let _ = ctl.pointer_down(100.0, 100.0, &surface);
        let _ = ctl.pointer_up(100.0, 100.0);
        assert!(!ctl.can_redo());
        assert_eq!(ctl.history().undo_depth(), 2);
    }
}
