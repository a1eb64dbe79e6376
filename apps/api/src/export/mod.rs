// PDF export: filename derivation, band slicing for unpaginated content, PDF assembly.
// Assembly is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod bands;
pub mod filename;
pub mod handlers;
pub mod pdf;

use thiserror::Error;

pub use filename::derive_filename;
pub use pdf::build_pdf;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode page content: {0}")]
    Encode(String),

    #[error("failed to write PDF: {0}")]
    Write(String),
}
