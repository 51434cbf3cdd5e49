//! Mapping from raw interaction events to transform mutations.
//!
//! The controller is toolkit-neutral: a windowing layer translates its
//! native pointer/trackpad/keyboard events into [`InputEvent`]s and feeds
//! them here. Pointer positions are view coordinates relative to the view
//! center, screen-oriented (Y grows downward); the controller owns the
//! conversion into PDF space (Y up).

use glam::{DVec2, dvec2};

use crate::log::debug;
use crate::state::TransformState;

/// Pointer-down within this distance of the crosshair's screen
/// projection starts an origin-drag (in origin-drag mode).
pub const ORIGIN_HIT_RADIUS: f64 = 40.0;

/// Scale change per unit of vertical scroll delta
pub const SCROLL_STEP_COARSE: f64 = 0.01;
/// Scale change per unit of scroll delta with the fine modifier held.
/// The revision history had both 0.01 and 0.001 here; 0.001 is kept so
/// the modifier actually refines the step.
pub const SCROLL_STEP_FINE: f64 = 0.001;

/// Arrow-key nudge in points
pub const ARROW_STEP: f64 = 1.0;
/// Arrow-key nudge with the precision-boost modifier held
pub const ARROW_STEP_BOOSTED: f64 = 10.0;

/// Arrow keys, named by direction on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Unit nudge direction in PDF space (Y up)
    fn direction(self) -> DVec2 {
        match self {
            ArrowKey::Up => dvec2(0.0, 1.0),
            ArrowKey::Down => dvec2(0.0, -1.0),
            ArrowKey::Left => dvec2(-1.0, 0.0),
            ArrowKey::Right => dvec2(1.0, 0.0),
        }
    }
}

/// Toolkit-neutral interaction event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a view position (relative to view center,
    /// screen Y down)
    PointerDown { at: DVec2 },
    /// Pointer moved while pressed
    PointerMove { to: DVec2 },
    /// Pointer released
    PointerUp,
    /// Vertical scroll-wheel delta; `fine` is the fine-control modifier
    Scroll { delta: f64, fine: bool },
    /// Trackpad magnification delta (multiplicative)
    Pinch { factor: f64 },
    /// Trackpad rotation gesture, in degrees
    Rotate { degrees: f64 },
    /// Arrow key press; `boost` is the precision-boost modifier
    Arrow { key: ArrowKey, boost: bool },
}

/// What the active pointer drag is moving
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragTarget {
    Overlay,
    Origin,
}

/// Per-stream gesture state machine.
///
/// Two mutually exclusive pointer modes: overlay-drag (default) moves the
/// translation offset; origin-drag (when `drag_scale_origin` is set and
/// the press lands on the crosshair) moves the scale pivot.
#[derive(Debug, Default)]
pub struct GestureController {
    /// Origin-drag mode toggle ("Move Crosshair" in the UI)
    pub drag_scale_origin: bool,
    /// Whether keyboard focus sits on the origin control, which retargets
    /// arrow keys at the pivot
    pub origin_focused: bool,
    drag: Option<DragTarget>,
    last: DVec2,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pointer drag is currently in progress
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Screen projection of the crosshair, relative to view center.
    /// The pivot is stored in PDF space, so Y flips.
    fn crosshair_screen(state: &TransformState) -> DVec2 {
        dvec2(state.scale_origin.x, -state.scale_origin.y)
    }

    /// Feed one event through the state machine, mutating `state`.
    pub fn handle(&mut self, event: InputEvent, state: &mut TransformState) {
        match event {
            InputEvent::PointerDown { at } => self.pointer_down(at, state),
            InputEvent::PointerMove { to } => self.pointer_move(to, state),
            InputEvent::PointerUp => {
                self.drag = None;
            }
            InputEvent::Scroll { delta, fine } => {
                let step = if fine { SCROLL_STEP_FINE } else { SCROLL_STEP_COARSE };
                state.set_scale(state.scale + delta * step);
            }
            InputEvent::Pinch { factor } => {
                state.set_scale(state.scale * (1.0 + factor));
            }
            InputEvent::Rotate { degrees } => {
                state.rotate_by(crate::types::Degrees(degrees));
            }
            InputEvent::Arrow { key, boost } => self.arrow(key, boost, state),
        }
    }

    fn pointer_down(&mut self, at: DVec2, state: &TransformState) {
        let target = if self.drag_scale_origin
            && at.distance(Self::crosshair_screen(state)) < ORIGIN_HIT_RADIUS
        {
            DragTarget::Origin
        } else {
            DragTarget::Overlay
        };
        debug!(?target, ?at, "pointer down");
        self.drag = Some(target);
        self.last = at;
    }

    fn pointer_move(&mut self, to: DVec2, state: &mut TransformState) {
        let Some(target) = self.drag else {
            return;
        };
        match target {
            DragTarget::Overlay => {
                let delta = to - self.last;
                // Screen Y grows downward; PDF Y grows upward
                state.nudge(delta.x, -delta.y);
            }
            DragTarget::Origin => {
                // Absolute set each move, no accumulation
                state.set_scale_origin(dvec2(to.x, -to.y));
            }
        }
        self.last = to;
    }

    fn arrow(&mut self, key: ArrowKey, boost: bool, state: &mut TransformState) {
        let step = if boost { ARROW_STEP_BOOSTED } else { ARROW_STEP };
        let delta = key.direction() * step;
        if self.drag_scale_origin && self.origin_focused {
            state.set_scale_origin(state.scale_origin + delta);
        } else {
            state.nudge(delta.x, delta.y);
        }
    }
}
