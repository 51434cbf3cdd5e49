//! The comparison session: document slots, page navigation, reload
//! notices, and the glue between gestures, composition, and the report.
//!
//! Everything here runs on one logical UI thread. The file-change
//! notifier is the only asynchronous collaborator, and it must deliver
//! its events back onto that thread via [`ComparisonSession::file_changed`]
//! rather than mutating anything directly.

use std::path::{Path, PathBuf};

use crate::compose::{self, CompositePlan};
use crate::errors::LoadError;
use crate::gesture::{GestureController, InputEvent};
use crate::log::{debug, warn};
use crate::report;
use crate::state::TransformState;
use crate::types::{DisplayScale, Layer};

/// External PDF-rendering capability. The core never decodes PDF data
/// itself; it holds opaque document handles and asks the backend for
/// page counts and rasterized pages.
pub trait PdfBackend {
    /// Opaque handle to a loaded document
    type Doc;
    /// Rasterized page content
    type Surface;

    fn load(&self, path: &Path) -> Result<Self::Doc, LoadError>;
    fn page_count(&self, doc: &Self::Doc) -> usize;
    fn render_page(&self, doc: &Self::Doc, page: usize) -> Option<Self::Surface>;
}

/// External clipboard capability, used for the transform report
pub trait Clipboard {
    fn set_string(&mut self, contents: &str);
}

/// What the file-change notifier observed on disk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileChange {
    Modified,
    Removed,
    Renamed,
}

impl FileChange {
    fn verb(self) -> &'static str {
        match self {
            FileChange::Modified => "modified",
            FileChange::Removed => "removed",
            FileChange::Renamed => "renamed",
        }
    }
}

/// A recorded on-disk change awaiting an explicit user decision.
/// The session never reloads silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReload {
    pub layer: Layer,
    pub change: FileChange,
}

impl PendingReload {
    /// User-facing notice text
    pub fn message(&self) -> String {
        format!(
            "The {} PDF was {} on disk. Reload it?",
            self.layer.name(),
            self.change.verb()
        )
    }
}

/// One loaded document: handle, origin path, and paging state
struct DocumentSlot<D> {
    doc: D,
    path: PathBuf,
    page_count: usize,
    /// Page index used in decoupled mode
    page: usize,
}

/// A visual comparison session over two optional documents.
///
/// Owns the [`TransformState`], the [`GestureController`], and the
/// paging state. All mutation is single-threaded by construction.
pub struct ComparisonSession<B: PdfBackend> {
    backend: B,
    base: Option<DocumentSlot<B::Doc>>,
    overlay: Option<DocumentSlot<B::Doc>>,
    /// Coupled mode: both documents navigate through one shared index
    pub couple_pages: bool,
    shared_page: usize,
    pending_reload: Option<PendingReload>,
    pub state: TransformState,
    pub gestures: GestureController,
}

impl<B: PdfBackend> ComparisonSession<B> {
    pub fn new(backend: B) -> Self {
        ComparisonSession {
            backend,
            base: None,
            overlay: None,
            couple_pages: true,
            shared_page: 0,
            pending_reload: None,
            state: TransformState::new(),
            gestures: GestureController::new(),
        }
    }

    // ==================== loading ====================

    /// Load a document into the given slot. On success the transform
    /// resets (a fresh document means a fresh alignment) and any pending
    /// reload for that layer clears. On failure nothing changes.
    pub fn load(&mut self, layer: Layer, path: &Path) -> Result<(), LoadError> {
        let slot = self.load_slot(path)?;
        *self.slot_mut(layer) = Some(slot);
        self.state.reset();
        self.shared_page = 0;
        if self.pending_reload.as_ref().is_some_and(|p| p.layer == layer) {
            self.pending_reload = None;
        }
        debug!(%layer, ?path, "document loaded");
        Ok(())
    }

    fn load_slot(&self, path: &Path) -> Result<DocumentSlot<B::Doc>, LoadError> {
        let doc = self.backend.load(path)?;
        let page_count = self.backend.page_count(&doc);
        if page_count == 0 {
            return Err(LoadError::EmptyDocument {
                path: path.to_path_buf(),
            });
        }
        Ok(DocumentSlot {
            doc,
            path: path.to_path_buf(),
            page_count,
            page: 0,
        })
    }

    fn slot(&self, layer: Layer) -> Option<&DocumentSlot<B::Doc>> {
        match layer {
            Layer::Base => self.base.as_ref(),
            Layer::Overlay => self.overlay.as_ref(),
        }
    }

    fn slot_mut(&mut self, layer: Layer) -> &mut Option<DocumentSlot<B::Doc>> {
        match layer {
            Layer::Base => &mut self.base,
            Layer::Overlay => &mut self.overlay,
        }
    }

    pub fn is_loaded(&self, layer: Layer) -> bool {
        self.slot(layer).is_some()
    }

    pub fn page_count(&self, layer: Layer) -> usize {
        self.slot(layer).map_or(0, |s| s.page_count)
    }

    // ==================== paging ====================

    /// Highest page count across loaded documents (coupled-mode range)
    pub fn total_pages(&self) -> usize {
        self.page_count(Layer::Base).max(self.page_count(Layer::Overlay))
    }

    /// Current page of a layer. In coupled mode the shared index drives
    /// both documents, clamped to each document's own range; a shorter
    /// document stays on its last page.
    pub fn page(&self, layer: Layer) -> Option<usize> {
        let slot = self.slot(layer)?;
        let index = if self.couple_pages {
            self.shared_page.min(slot.page_count - 1)
        } else {
            slot.page
        };
        Some(index)
    }

    /// Advance the shared index (coupled mode)
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if total > 0 && self.shared_page < total - 1 {
            self.shared_page += 1;
        }
    }

    /// Step the shared index back (coupled mode)
    pub fn previous_page(&mut self) {
        self.shared_page = self.shared_page.saturating_sub(1);
    }

    /// Advance one layer's own index (decoupled mode)
    pub fn next_page_of(&mut self, layer: Layer) {
        if let Some(slot) = self.slot_mut(layer).as_mut() {
            if slot.page < slot.page_count - 1 {
                slot.page += 1;
            }
        }
    }

    /// Step one layer's own index back (decoupled mode)
    pub fn previous_page_of(&mut self, layer: Layer) {
        if let Some(slot) = self.slot_mut(layer).as_mut() {
            slot.page = slot.page.saturating_sub(1);
        }
    }

    /// "Page N of M" for the shared navigator
    pub fn page_display(&self) -> String {
        format!("Page {} of {}", self.shared_page + 1, self.total_pages())
    }

    /// "Page N of M" for one layer's navigator
    pub fn page_display_of(&self, layer: Layer) -> String {
        match (self.page(layer), self.page_count(layer)) {
            (Some(page), count) => format!("Page {} of {}", page + 1, count),
            (None, _) => String::from("No document"),
        }
    }

    // ==================== reload notices ====================

    /// Record a change observed by the file-change notifier. Surfaced to
    /// the user as a pending notice; never acted on automatically.
    pub fn file_changed(&mut self, layer: Layer, change: FileChange) {
        if self.slot(layer).is_none() {
            return;
        }
        warn!(%layer, ?change, "document changed on disk");
        self.pending_reload = Some(PendingReload { layer, change });
    }

    pub fn pending_reload(&self) -> Option<&PendingReload> {
        self.pending_reload.as_ref()
    }

    /// Re-load the changed document from its stored path. The transform
    /// is preserved: reloading refreshes the same document, so the
    /// alignment the user built stays meaningful. On failure the notice
    /// stays pending so the user can retry or dismiss.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        let Some(pending) = self.pending_reload.clone() else {
            return Ok(());
        };
        let Some(path) = self.slot(pending.layer).map(|s| s.path.clone()) else {
            self.pending_reload = None;
            return Ok(());
        };
        let slot = self.load_slot(&path)?;
        *self.slot_mut(pending.layer) = Some(slot);
        self.pending_reload = None;
        Ok(())
    }

    /// Drop the pending notice without reloading
    pub fn dismiss_reload(&mut self) {
        self.pending_reload = None;
    }

    // ==================== output ====================

    /// Route an interaction event through the gesture controller
    pub fn input(&mut self, event: InputEvent) {
        self.gestures.handle(event, &mut self.state);
    }

    /// Build the draw plan for the current pages and transform
    pub fn composite_plan(&self) -> CompositePlan {
        compose::plan(self.page(Layer::Base), self.page(Layer::Overlay), &self.state)
    }

    /// Rasterize one layer's current page through the backend
    pub fn render_layer(&self, layer: Layer) -> Option<B::Surface> {
        let slot = self.slot(layer)?;
        let page = self.page(layer)?;
        self.backend.render_page(&slot.doc, page)
    }

    /// The transform report for the current state
    pub fn report(&self, display_scale: DisplayScale) -> String {
        report::report(&self.state, display_scale)
    }

    /// Place the transform report on the system clipboard
    pub fn copy_report(&self, clipboard: &mut impl Clipboard, display_scale: DisplayScale) {
        clipboard.set_string(&self.report(display_scale));
    }
}
