//! Composition of the base and overlay layers into an ordered draw plan.
//!
//! Rasterization belongs to the PDF backend; this module owns only the
//! order of operations. The overlay matrix composes, reading right to
//! left: pivot translation, scale (flips folded in as negative factors),
//! rotation about the same pivot, then the translation back out of the
//! pivot plus the stored offset. The PDF-to-screen Y inversion is applied
//! at that final translation step only.

use glam::{DAffine2, DVec2, dvec2};

use crate::state::TransformState;
use crate::types::Layer;

/// Draw instructions for one layer, in view coordinates relative to the
/// view center (screen Y down).
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPlan {
    pub layer: Layer,
    /// Page index to rasterize
    pub page: usize,
    /// Full 2D affine to apply to the rasterized page
    pub transform: DAffine2,
    /// Alpha for the layer as a whole
    pub opacity: f64,
}

/// Ordered composite: layers draw first-to-last.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositePlan {
    pub layers: Vec<LayerPlan>,
    /// Set when no overlay document is loaded, so the UI can show a
    /// placeholder indicator instead of silently drawing nothing
    pub overlay_missing: bool,
}

/// Screen projection (Y down) of a PDF-space vector relative to center
fn to_screen(v: DVec2) -> DVec2 {
    dvec2(v.x, -v.y)
}

/// Build the overlay's affine transform from the current state.
///
/// Scale and rotation always pivot around `scale_origin`, never around
/// the plain view center.
pub fn overlay_matrix(state: &TransformState) -> DAffine2 {
    let pivot = to_screen(state.scale_origin);
    let offset = to_screen(state.offset);

    let sx = state.scale * if state.flip_horizontal { -1.0 } else { 1.0 };
    let sy = state.scale * if state.flip_vertical { -1.0 } else { 1.0 };

    DAffine2::from_translation(pivot + offset)
        * DAffine2::from_angle(state.rotation.to_radians())
        * DAffine2::from_scale(dvec2(sx, sy))
        * DAffine2::from_translation(-pivot)
}

/// Build the composite plan for the given page indices.
///
/// `base_page` / `overlay_page` are `None` when the corresponding
/// document is absent; missing layers are simply skipped. The base always
/// renders unmodified at full opacity, below the overlay.
pub fn plan(
    base_page: Option<usize>,
    overlay_page: Option<usize>,
    state: &TransformState,
) -> CompositePlan {
    let mut layers = Vec::with_capacity(2);

    if let Some(page) = base_page {
        layers.push(LayerPlan {
            layer: Layer::Base,
            page,
            transform: DAffine2::IDENTITY,
            opacity: 1.0,
        });
    }

    let overlay_missing = overlay_page.is_none();
    if let Some(page) = overlay_page {
        layers.push(LayerPlan {
            layer: Layer::Overlay,
            page,
            transform: overlay_matrix(state),
            opacity: state.opacity.raw(),
        });
    }

    CompositePlan {
        layers,
        overlay_missing,
    }
}
