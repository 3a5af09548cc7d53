use std::path::PathBuf;

use thiserror::Error;

/// Top-level errors for a sync run.
///
/// Per-file operation failures are not errors at this level: they are
/// collected into the per-platform reports and the run continues. The
/// only fatal condition is a card root that cannot be read at all.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The card root directory could not be read.
    #[error("cannot read card root {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error outside the per-file best-effort paths.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
