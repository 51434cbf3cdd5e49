//! Human-readable summary of the current transform.
//!
//! The report is the artifact a user actually takes away from an
//! alignment session, so its field order and formatting are fixed and
//! deterministic given the state and a display scale.

use std::fmt::Write;

use crate::state::TransformState;
use crate::types::{DisplayScale, Points};

/// The four coordinate conventions selectable for translation display.
/// Purely presentational; the rendered transform is unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordConvention {
    /// x right, y up — the PDF standard
    BottomLeft,
    /// x right, y down — screen/image convention
    TopLeft,
    /// x left, y up
    BottomRight,
    /// x left, y down
    TopRight,
}

impl CoordConvention {
    /// Derive the convention from the two axis-orientation flags
    pub fn from_axes(x_axis_right: bool, y_axis_up: bool) -> Self {
        match (x_axis_right, y_axis_up) {
            (true, true) => CoordConvention::BottomLeft,
            (true, false) => CoordConvention::TopLeft,
            (false, true) => CoordConvention::BottomRight,
            (false, false) => CoordConvention::TopRight,
        }
    }

    /// Fixed display label
    pub fn label(self) -> &'static str {
        match self {
            CoordConvention::BottomLeft => "Bottom-Left (PDF Standard)",
            CoordConvention::TopLeft => "Top-Left (Screen/Image)",
            CoordConvention::BottomRight => "Bottom-Right",
            CoordConvention::TopRight => "Top-Right",
        }
    }
}

/// Render the transform state as the fixed-order report string.
///
/// Translation values are adjusted by per-axis sign multipliers so the
/// numbers read naturally in the selected convention: +1 when the axis
/// flag matches the stored PDF orientation, -1 otherwise.
pub fn report(state: &TransformState, display_scale: DisplayScale) -> String {
    let convention = CoordConvention::from_axes(state.x_axis_right, state.y_axis_up);
    let x_sign = if state.x_axis_right { 1.0 } else { -1.0 };
    let y_sign = if state.y_axis_up { 1.0 } else { -1.0 };

    let tx = Points(state.offset.x * x_sign);
    let ty = Points(state.offset.y * y_sign);

    let mut out = String::new();
    // Infallible writes into a String
    let _ = writeln!(out, "Coordinate System: {}", convention.label());
    let _ = writeln!(out, "Scale: {:.3}", state.scale);
    let _ = writeln!(out, "Rotation: {:.2}°", state.rotation.raw());
    let _ = writeln!(
        out,
        "Flip Horizontal: {}",
        if state.flip_horizontal { "Yes" } else { "No" }
    );
    let _ = writeln!(
        out,
        "Flip Vertical: {}",
        if state.flip_vertical { "Yes" } else { "No" }
    );
    let _ = writeln!(out, "Translation (Points): ({:.2}, {:.2})", tx.raw(), ty.raw());
    let _ = writeln!(
        out,
        "Translation (Pixels): ({:.0}, {:.0})",
        tx.to_px(display_scale),
        ty.to_px(display_scale)
    );
    let _ = write!(out, "Opacity: {:.2}", state.opacity.raw());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Degrees;
    use glam::dvec2;

    fn spec_state() -> TransformState {
        let mut state = TransformState::new();
        state.set_scale(1.234);
        state.set_rotation(Degrees(45.6));
        state.flip_horizontal = true;
        state.offset = dvec2(10.25, -3.5);
        state.set_opacity(0.75);
        state
    }

    #[test]
    fn report_contains_all_fields() {
        let out = report(&spec_state(), DisplayScale(2.0));

        assert!(out.contains("Scale: 1.234"), "{out}");
        assert!(out.contains("Rotation: 45.60°"), "{out}");
        assert!(out.contains("Flip Horizontal: Yes"), "{out}");
        assert!(out.contains("Flip Vertical: No"), "{out}");
        assert!(out.contains("Translation (Points): (10.25, -3.50)"), "{out}");
        assert!(out.contains("Translation (Pixels): (20, -7)"), "{out}");
        assert!(out.contains("Opacity: 0.75"), "{out}");
    }

    #[test]
    fn report_field_order_is_fixed() {
        let out = report(&spec_state(), DisplayScale(2.0));
        let fields = [
            "Coordinate System:",
            "Scale:",
            "Rotation:",
            "Flip Horizontal:",
            "Flip Vertical:",
            "Translation (Points):",
            "Translation (Pixels):",
            "Opacity:",
        ];
        let positions: Vec<usize> = fields
            .iter()
            .map(|f| out.find(f).unwrap_or_else(|| panic!("missing field {f}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn convention_labels() {
        assert_eq!(
            CoordConvention::from_axes(true, true).label(),
            "Bottom-Left (PDF Standard)"
        );
        assert_eq!(
            CoordConvention::from_axes(true, false).label(),
            "Top-Left (Screen/Image)"
        );
        assert_eq!(CoordConvention::from_axes(false, true).label(), "Bottom-Right");
        assert_eq!(CoordConvention::from_axes(false, false).label(), "Top-Right");
    }

    #[test]
    fn sign_multipliers_follow_axis_flags() {
        let mut state = TransformState::new();
        state.offset = dvec2(10.0, 20.0);

        state.y_axis_up = false;
        let out = report(&state, DisplayScale::default());
        assert!(out.contains("Translation (Points): (10.00, -20.00)"), "{out}");
        assert!(out.contains("Top-Left (Screen/Image)"), "{out}");

        state.x_axis_right = false;
        let out = report(&state, DisplayScale::default());
        assert!(out.contains("Translation (Points): (-10.00, -20.00)"), "{out}");
        assert!(out.contains("Top-Right"), "{out}");
    }

    #[test]
    fn pixel_translation_scales_with_display() {
        let mut state = TransformState::new();
        state.offset = dvec2(100.0, -50.0);
        let out = report(&state, DisplayScale(1.5));
        assert!(out.contains("Translation (Pixels): (150, -75)"), "{out}");
    }

    #[test]
    fn report_is_deterministic() {
        let state = spec_state();
        assert_eq!(
            report(&state, DisplayScale(2.0)),
            report(&state, DisplayScale(2.0))
        );
    }

    #[test]
    fn default_state_snapshot() {
        insta::assert_snapshot!(
            report(&TransformState::new(), DisplayScale::default()),
            @r"
        Coordinate System: Bottom-Left (PDF Standard)
        Scale: 1.000
        Rotation: 0.00°
        Flip Horizontal: No
        Flip Vertical: No
        Translation (Points): (0.00, 0.00)
        Translation (Pixels): (0, 0)
        Opacity: 0.30
        "
        );
    }
}
