//! Two-worker concurrent loading.
//!
//! Each document gets its own thread that reads, tokenizes and builds it,
//! then publishes `(DocumentId, result)` on a shared channel. The caller
//! blocks until both results are in, or until the deadline passes. Results
//! are slotted by their `DocumentId`, so finish order never matters.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tagdiff_common::warning::debug;

use crate::{DocumentId, DocumentSource, LoadError, LoadedDocument, load_document};

/// Default bound on the load barrier.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What a worker publishes when it is done.
type Published = (DocumentId, Result<LoadedDocument, LoadError>);

/// Options for [`load_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// How long to wait for both documents before giving up. A value too
    /// large to add to the current instant waits without a deadline.
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LoadOptions {
    /// Options with a custom barrier timeout.
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Load two documents in parallel and return them as `(first, second)`.
///
/// The first failure reported by either worker aborts the whole load. Workers
/// are detached, so a source that never returns cannot hold the caller past
/// the deadline.
///
/// # Errors
///
/// - [`LoadError::Read`] if either source cannot be read
/// - [`LoadError::Timeout`] if both results are not in before `options.timeout`
/// - [`LoadError::WorkerLost`] if a worker exits without publishing
pub fn load_pair(
    first: Box<dyn DocumentSource>,
    second: Box<dyn DocumentSource>,
    options: &LoadOptions,
) -> Result<(LoadedDocument, LoadedDocument), LoadError> {
    let (tx, rx) = mpsc::channel::<Published>();

    for (id, source) in [(DocumentId::First, first), (DocumentId::Second, second)] {
        let tx = tx.clone();
        let _worker = thread::spawn(move || {
            let result = load_document(id, &*source);
            // The orchestrator may already have given up; nothing to do then.
            let _ = tx.send((id, result));
        });
    }
    // Only the workers hold senders now, so a lost worker shows up as a disconnect.
    drop(tx);

    // A timeout too large to land on the clock means no deadline at all.
    let deadline = Instant::now().checked_add(options.timeout);
    let mut slots: [Option<LoadedDocument>; 2] = [None, None];

    while let Some(pending) = first_pending(&slots) {
        let received = match deadline {
            Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok((id, Ok(document))) => {
                debug("Orchestrator", &format!("{id} ready"));
                slots[id.index()] = Some(document);
            }
            Ok((id, Err(err))) => {
                debug("Orchestrator", &format!("{id} failed: {err}"));
                return Err(err);
            }
            Err(RecvTimeoutError::Timeout) => {
                return Err(LoadError::Timeout {
                    waited: options.timeout,
                    pending,
                });
            }
            Err(RecvTimeoutError::Disconnected) => return Err(LoadError::WorkerLost(pending)),
        }
    }

    match slots {
        [Some(first), Some(second)] => Ok((first, second)),
        [None, _] => Err(LoadError::WorkerLost(DocumentId::First)),
        [_, None] => Err(LoadError::WorkerLost(DocumentId::Second)),
    }
}

/// The first document whose result has not arrived yet.
fn first_pending(slots: &[Option<LoadedDocument>; 2]) -> Option<DocumentId> {
    [DocumentId::First, DocumentId::Second]
        .into_iter()
        .find(|id| slots[id.index()].is_none())
}
