//! Input abstraction layer.
//!
//! Hosts translate their native pointer and keyboard events into
//! `InputEvent`s in surface-pixel coordinates. `DisplayMapping` does the
//! client → surface conversion when the canvas is presented at a different
//! size than its backing store (CSS scaling, HiDPI).

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// The platform's primary accelerator modifier: ⌘ on macOS, Ctrl elsewhere.
    /// Either one counts, so the same bindings work on every platform.
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A normalized input event in surface-pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// Pointer left the surface; ends any gesture.
    PointerLeave,
    /// Key press. `key` is the `KeyboardEvent.key` value (e.g. `"z"`).
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    /// Extract position if this is a positioned pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some((*x, *y))
            }
            Self::PointerLeave | Self::Key { .. } => None,
        }
    }
}

/// Where and how large the surface is presented on screen, relative to its
/// logical pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMapping {
    /// Presented rect in client coordinates.
    pub left: f32,
    pub top: f32,
    pub presented_width: f32,
    pub presented_height: f32,
    /// Logical (backing store) size of the surface.
    pub logical_width: f32,
    pub logical_height: f32,
}

impl DisplayMapping {
    /// Identity mapping: presented at its logical size at the origin.
    pub fn identity(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            presented_width: width,
            presented_height: height,
            logical_width: width,
            logical_height: height,
        }
    }

    /// Convert a client-space point into surface pixels.
    ///
    /// A degenerate presented size (zero, NaN) maps with scale 1 rather than
    /// producing infinities.
    pub fn to_surface(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        let sx = scale(self.logical_width, self.presented_width);
        let sy = scale(self.logical_height, self.presented_height);
        ((client_x - self.left) * sx, (client_y - self.top) * sy)
    }
}

fn scale(logical: f32, presented: f32) -> f32 {
    let s = logical / presented;
    if s.is_finite() && s > 0.0 { s } else { 1.0 }
}
