//! Undo/redo history.
//!
//! History is snapshot based: before every undoable user action the whole
//! scene is copied onto the undo stack. Undo and redo swap whole scenes, so
//! no action needs an inverse, and a gesture made of many events (a drag)
//! is one step as long as the caller records once per gesture.

use lb_core::config::DEFAULT_HISTORY_DEPTH;
use lb_core::{Scene, Snapshot};
use std::collections::VecDeque;

/// Bounded undo/redo stacks of scene snapshots.
///
/// The top of each stack is the back of its deque; eviction pops the front.
#[derive(Debug)]
pub struct History {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    /// Maximum depth of each stack.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(max_depth),
            redo_stack: VecDeque::new(),
            max_depth,
        }
    }

    /// Capture `scene` as the undo target of the action about to happen.
    ///
    /// Call once per logical action, before mutating. Invalidates redo.
    pub fn record_before_action(&mut self, scene: &Scene) {
        push_capped(&mut self.undo_stack, scene.snapshot(), self.max_depth);
        self.redo_stack.clear();
        log::debug!(
            "history: recorded ({} items), undo depth {}",
            scene.len(),
            self.undo_stack.len()
        );
    }

    /// Restore the most recent undo snapshot. Returns `false` if there is none.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(target) = self.undo_stack.pop_back() else {
            return false;
        };
        push_capped(&mut self.redo_stack, scene.snapshot(), self.max_depth);
        scene.replace_all(&target);
        log::debug!(
            "history: undo → {} items (undo {}, redo {})",
            scene.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Re-apply the most recently undone state. Returns `false` if there is none.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(target) = self.redo_stack.pop_back() else {
            return false;
        };
        push_capped(&mut self.undo_stack, scene.snapshot(), self.max_depth);
        scene.replace_all(&target);
        log::debug!(
            "history: redo → {} items (undo {}, redo {})",
            scene.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

fn push_capped(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, max: usize) {
    stack.push_back(snapshot);
    while stack.len() > max {
        stack.pop_front();
    }
}
