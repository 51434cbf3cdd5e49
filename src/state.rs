//! The overlay transform model: scale, rotation, flips, translation,
//! opacity, and the scale/rotation pivot.
//!
//! All values live in PDF space (origin bottom-left, Y up, units in
//! points). Conversion to screen space happens in `compose` and at the
//! gesture boundary, never here.

use glam::DVec2;

use crate::log::debug;
use crate::types::{Axis, Degrees, Opacity};

/// Lower bound for the overlay scale factor
pub const SCALE_MIN: f64 = 0.5;
/// Upper bound for the overlay scale factor
pub const SCALE_MAX: f64 = 2.0;
/// Overlay opacity applied at session start and on reset
pub const DEFAULT_OPACITY: f64 = 0.3;

/// Step for the fine rotation increment/decrement controls
pub const ROTATE_STEP_FINE: Degrees = Degrees(1.0);
/// Step for the quarter-turn rotation controls
pub const ROTATE_STEP_QUARTER: Degrees = Degrees(90.0);

/// Mutable transform record, one per comparison session.
///
/// Direct field reads are the data-binding surface for a UI layer;
/// mutation goes through the methods so locks and range invariants hold.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    /// Uniform scale factor, always within [`SCALE_MIN`, `SCALE_MAX`]
    pub scale: f64,
    /// Accumulated rotation; wrapped only for display
    pub rotation: Degrees,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    /// Translation in points, unconstrained
    pub offset: DVec2,
    pub opacity: Opacity,
    /// Pivot for scale and rotation, relative to the view center.
    /// Unconstrained, and deliberately not covered by the locks.
    pub scale_origin: DVec2,
    /// When set, scale mutations are silently ignored
    pub lock_scale: bool,
    /// When set, rotation mutations are silently ignored
    pub lock_rotation: bool,
    /// Display convention: positive Y reported upward (PDF standard)
    pub y_axis_up: bool,
    /// Display convention: positive X reported rightward
    pub x_axis_right: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        TransformState {
            scale: 1.0,
            rotation: Degrees::ZERO,
            flip_horizontal: false,
            flip_vertical: false,
            offset: DVec2::ZERO,
            opacity: Opacity::new(DEFAULT_OPACITY),
            scale_origin: DVec2::ZERO,
            lock_scale: false,
            lock_rotation: false,
            y_axis_up: true,
            x_axis_right: true,
        }
    }
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `(dx, dy)` to the translation offset.
    ///
    /// Unconditional: the locks cover only scale and rotation. Nudges
    /// accumulate, so any sequence collapses to a single nudge by the
    /// component sums.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
        debug!(dx, dy, offset = ?self.offset, "nudge");
    }

    /// Set the scale factor, clamped into [`SCALE_MIN`, `SCALE_MAX`].
    /// No-op while `lock_scale` is set.
    pub fn set_scale(&mut self, value: f64) {
        if self.lock_scale {
            return;
        }
        self.scale = value.clamp(SCALE_MIN, SCALE_MAX);
    }

    /// Set the rotation directly. No-op while `lock_rotation` is set.
    pub fn set_rotation(&mut self, value: Degrees) {
        if self.lock_rotation {
            return;
        }
        self.rotation = value;
    }

    /// Add `delta` to the rotation. The UI's increment/decrement controls
    /// pass `±ROTATE_STEP_FINE` / `±ROTATE_STEP_QUARTER`; the trackpad
    /// rotate gesture passes its reported degrees. No-op while
    /// `lock_rotation` is set.
    pub fn rotate_by(&mut self, delta: Degrees) {
        self.set_rotation(self.rotation + delta);
    }

    /// Set the overlay opacity, clamped into [0, 1].
    pub fn set_opacity(&mut self, value: f64) {
        self.opacity = Opacity::new(value);
    }

    /// Flip the overlay along the given axis.
    pub fn toggle_flip(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => self.flip_horizontal = !self.flip_horizontal,
            Axis::Vertical => self.flip_vertical = !self.flip_vertical,
        }
    }

    /// Move the scale/rotation pivot. Unconditional and unclamped; the
    /// lock flags do not apply to the pivot.
    pub fn set_scale_origin(&mut self, point: DVec2) {
        self.scale_origin = point;
    }

    /// Zero only the translation offset (the "Reset Position" control).
    pub fn reset_position(&mut self) {
        self.offset = DVec2::ZERO;
    }

    /// Restore defaults. Lock flags and the display-convention flags are
    /// user preferences, not document state, and survive the reset.
    pub fn reset(&mut self) {
        let preserved = (
            self.lock_scale,
            self.lock_rotation,
            self.y_axis_up,
            self.x_axis_right,
        );
        *self = TransformState::default();
        (self.lock_scale, self.lock_rotation, self.y_axis_up, self.x_axis_right) = preserved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    // ==================== nudge tests ====================

    #[test]
    fn nudge_accumulates() {
        let mut state = TransformState::new();
        state.nudge(3.0, -2.0);
        state.nudge(-1.0, 5.0);
        assert_eq!(state.offset, dvec2(2.0, 3.0));
    }

    #[test]
    fn nudge_sequence_equals_summed_nudge() {
        let deltas = [(1.5, -0.25), (10.0, 3.0), (-4.75, 0.0), (0.5, -8.5)];

        let mut stepped = TransformState::new();
        for (dx, dy) in deltas {
            stepped.nudge(dx, dy);
        }

        let mut single = TransformState::new();
        let (sx, sy) = deltas
            .iter()
            .fold((0.0, 0.0), |(ax, ay), (dx, dy)| (ax + dx, ay + dy));
        single.nudge(sx, sy);

        assert!((stepped.offset.x - single.offset.x).abs() < 1e-9);
        assert!((stepped.offset.y - single.offset.y).abs() < 1e-9);
    }

    #[test]
    fn nudge_ignores_locks() {
        let mut state = TransformState::new();
        state.lock_scale = true;
        state.lock_rotation = true;
        state.nudge(1.0, 1.0);
        assert_eq!(state.offset, dvec2(1.0, 1.0));
    }

    // ==================== scale tests ====================

    #[test]
    fn set_scale_clamps_high() {
        let mut state = TransformState::new();
        state.set_scale(10.0);
        assert_eq!(state.scale, SCALE_MAX);
    }

    #[test]
    fn set_scale_clamps_low() {
        let mut state = TransformState::new();
        state.set_scale(-5.0);
        assert_eq!(state.scale, SCALE_MIN);
    }

    #[test]
    fn set_scale_in_range_passes_through() {
        let mut state = TransformState::new();
        state.set_scale(1.25);
        assert_eq!(state.scale, 1.25);
    }

    #[test]
    fn lock_scale_makes_set_scale_inert() {
        let mut state = TransformState::new();
        state.lock_scale = true;
        state.set_scale(1.75);
        assert_eq!(state.scale, 1.0);
    }

    // ==================== rotation tests ====================

    #[test]
    fn set_rotation_is_direct() {
        let mut state = TransformState::new();
        state.set_rotation(Degrees(725.0));
        // Not wrapped internally
        assert_eq!(state.rotation, Degrees(725.0));
    }

    #[test]
    fn rotate_by_accumulates() {
        let mut state = TransformState::new();
        state.rotate_by(ROTATE_STEP_QUARTER);
        state.rotate_by(ROTATE_STEP_FINE);
        state.rotate_by(-ROTATE_STEP_FINE);
        assert_eq!(state.rotation, Degrees(90.0));
    }

    #[test]
    fn lock_rotation_makes_rotation_inert() {
        let mut state = TransformState::new();
        state.lock_rotation = true;
        state.set_rotation(Degrees(45.0));
        state.rotate_by(Degrees(90.0));
        assert_eq!(state.rotation, Degrees::ZERO);
    }

    // ==================== opacity / flip tests ====================

    #[test]
    fn set_opacity_clamps() {
        let mut state = TransformState::new();
        state.set_opacity(2.0);
        assert_eq!(state.opacity.raw(), 1.0);
        state.set_opacity(-1.0);
        assert_eq!(state.opacity.raw(), 0.0);
    }

    #[test]
    fn toggle_flip_flips_the_named_axis() {
        let mut state = TransformState::new();
        state.toggle_flip(Axis::Horizontal);
        assert!(state.flip_horizontal);
        assert!(!state.flip_vertical);
        state.toggle_flip(Axis::Horizontal);
        assert!(!state.flip_horizontal);
        state.toggle_flip(Axis::Vertical);
        assert!(state.flip_vertical);
    }

    // ==================== scale origin tests ====================

    #[test]
    fn scale_origin_round_trips_exactly() {
        let mut state = TransformState::new();
        let p = dvec2(-312.5, 9001.25);
        state.set_scale_origin(p);
        // No clamping on the pivot
        assert_eq!(state.scale_origin, p);
    }

    #[test]
    fn scale_origin_ignores_locks() {
        let mut state = TransformState::new();
        state.lock_scale = true;
        state.lock_rotation = true;
        state.set_scale_origin(dvec2(5.0, 5.0));
        assert_eq!(state.scale_origin, dvec2(5.0, 5.0));
    }

    // ==================== reset tests ====================

    #[test]
    fn reset_restores_defaults() {
        let mut state = TransformState::new();
        state.set_scale(1.8);
        state.set_rotation(Degrees(33.0));
        state.toggle_flip(Axis::Horizontal);
        state.toggle_flip(Axis::Vertical);
        state.nudge(12.0, -7.0);
        state.set_opacity(0.9);
        state.set_scale_origin(dvec2(40.0, 40.0));

        state.reset();

        assert_eq!(state.scale, 1.0);
        assert_eq!(state.rotation, Degrees::ZERO);
        assert!(!state.flip_horizontal);
        assert!(!state.flip_vertical);
        assert_eq!(state.offset, DVec2::ZERO);
        assert_eq!(state.opacity.raw(), DEFAULT_OPACITY);
        assert_eq!(state.scale_origin, DVec2::ZERO);
    }

    #[test]
    fn reset_preserves_locks_and_conventions() {
        let mut state = TransformState::new();
        state.lock_scale = true;
        state.lock_rotation = true;
        state.y_axis_up = false;
        state.x_axis_right = false;

        state.reset();

        assert!(state.lock_scale);
        assert!(state.lock_rotation);
        assert!(!state.y_axis_up);
        assert!(!state.x_axis_right);
    }

    #[test]
    fn reset_position_only_touches_offset() {
        let mut state = TransformState::new();
        state.nudge(5.0, 5.0);
        state.set_scale(1.5);
        state.reset_position();
        assert_eq!(state.offset, DVec2::ZERO);
        assert_eq!(state.scale, 1.5);
    }
}
