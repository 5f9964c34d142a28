//! Error types for import submission.

use thiserror::Error;

/// Errors that can occur while submitting prospects to the platform.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Transport-level failure talking to the bulk-import endpoint.
    #[error("bulk import request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("bulk import rejected (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A batch submission failed, aborting the whole run. Batches before
    /// `batch` were accepted upstream; no rollback is attempted.
    #[error("batch {batch} of {total_batches} failed: {source}")]
    BatchSubmission {
        /// 1-based index of the failing batch.
        batch: usize,
        total_batches: usize,
        #[source]
        source: Box<ImportError>,
    },
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
