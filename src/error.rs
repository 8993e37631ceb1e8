//! Error types for `gostart-docgen`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the documentation pipeline.
///
/// Every error is terminal for the run; the binary maps any of them to exit
/// code 1 and leaves `doc.go` absent, untouched, or truncated depending on
/// how far the pipeline got.
#[derive(Debug, Error)]
pub enum DocgenError {
    /// The output file could not be created inside the output directory.
    #[error("failed to create {path}: {source}")]
    Create {
        /// Path of the file or directory that could not be opened.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The rendered text could not be flushed to the output file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the file the write was directed at.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
