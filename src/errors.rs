//! Error types with rich diagnostics using miette.
//!
//! Nothing in this crate is fatal: a failed load leaves the session and
//! transform state untouched, and the diagnostic is surfaced to the user
//! as a notice.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from loading a document through the PDF backend
#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("document not found: {path}")]
    #[diagnostic(
        code(pdfoverlay::load::not_found),
        help("check that the file still exists at this path")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read document: {path}")]
    #[diagnostic(code(pdfoverlay::load::unreadable))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document has no pages: {path}")]
    #[diagnostic(
        code(pdfoverlay::load::empty_document),
        help("the file parsed but contains zero pages")
    )]
    EmptyDocument { path: PathBuf },
}
