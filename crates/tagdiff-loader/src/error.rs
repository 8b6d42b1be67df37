//! Loader errors.

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::DocumentId;

/// Everything that can stop a pair of documents from loading.
///
/// All of these are fatal for a comparison run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document could not be opened, read or decoded.
    #[error("failed to read '{name}': {source}")]
    Read {
        /// Name of the source, usually its path.
        name: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The barrier gave up waiting for a worker.
    #[error("timed out after {waited:?} waiting for {pending} to load")]
    Timeout {
        /// How long the orchestrator waited in total.
        waited: Duration,
        /// The first document that had not reported back.
        pending: DocumentId,
    },

    /// A worker went away without publishing a result.
    #[error("worker for {0} stopped without reporting a result")]
    WorkerLost(DocumentId),
}
