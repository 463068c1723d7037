//! Raw input levels handed to the core once per frame.
//!
//! The host samples its window system and fills an [`InputState`]; the core
//! derives click edges from the raw button level itself.

use crate::ui::Viewport;

/// Primary pointer position in pixels (origin top-left) and button level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

impl PointerState {
    pub fn new(x: f32, y: f32, pressed: bool) -> Self {
        Self { x, y, pressed }
    }
}

/// Everything the frame orchestrator reads from the host in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub pointer: PointerState,
    /// Current size of the surface the pointer lives on
    pub viewport: Viewport,
    /// Elevated-activity key held
    pub activity_held: bool,
    /// Escape pressed or window closed
    pub exit_requested: bool,
}

impl InputState {
    pub fn idle(viewport: Viewport) -> Self {
        Self {
            pointer: PointerState::default(),
            viewport,
            activity_held: false,
            exit_requested: false,
        }
    }
}
