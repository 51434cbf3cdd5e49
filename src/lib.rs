//! Overlay transform core for visually comparing two PDF documents.
//!
//! One document (the base) renders unmodified; a second (the overlay)
//! renders atop it with adjustable opacity, scale, rotation, flip, and
//! translation. This crate owns the transform model, the mapping from
//! interaction events to transform mutations, the deterministic report
//! of the resulting alignment, and the composition order of the two
//! layers. PDF decoding, windowing, and filesystem watching live behind
//! the collaborator traits in [`session`].
//!
//! ```
//! use pdfoverlay::{GestureController, InputEvent, TransformState};
//! use pdfoverlay::{report, DisplayScale};
//! use glam::dvec2;
//!
//! let mut state = TransformState::new();
//! let mut gestures = GestureController::new();
//!
//! gestures.handle(InputEvent::PointerDown { at: dvec2(0.0, 0.0) }, &mut state);
//! gestures.handle(InputEvent::PointerMove { to: dvec2(12.0, -8.0) }, &mut state);
//! gestures.handle(InputEvent::Scroll { delta: 25.0, fine: false }, &mut state);
//!
//! let summary = report(&state, DisplayScale::default());
//! assert!(summary.contains("Scale: 1.250"));
//! assert!(summary.contains("Translation (Points): (12.00, 8.00)"));
//! ```

pub mod compose;
pub mod errors;
pub mod gesture;
pub mod log;
pub mod report;
pub mod session;
pub mod state;
pub mod types;

pub use compose::{CompositePlan, LayerPlan, overlay_matrix};
pub use errors::LoadError;
pub use gesture::{ArrowKey, GestureController, InputEvent, ORIGIN_HIT_RADIUS};
pub use report::{CoordConvention, report};
pub use session::{Clipboard, ComparisonSession, FileChange, PdfBackend, PendingReload};
pub use state::{
    DEFAULT_OPACITY, ROTATE_STEP_FINE, ROTATE_STEP_QUARTER, SCALE_MAX, SCALE_MIN, TransformState,
};
pub use types::{Axis, Degrees, DisplayScale, Layer, Opacity, Points};
