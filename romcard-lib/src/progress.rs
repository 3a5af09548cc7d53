//! Structured events emitted during a sync pass.
//!
//! The engine reports through a callback so frontends decide how to
//! render. Dry run and execute emit identical sequences from identical
//! starting state; that equality is asserted in the integration tests.

use romcard_core::Platform;

/// One reportable action or milestone in a sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Started reconciling a platform folder (post-sanitize ROM count).
    PlatformStarted { platform: Platform, rom_count: usize },
    /// A game file name had its commas stripped.
    RomRenamed {
        platform: Platform,
        from: String,
        to: String,
    },
    /// A file inside `images/` had its commas stripped.
    ImageRenamed {
        platform: Platform,
        from: String,
        to: String,
    },
    /// The `images/` subdirectory was created.
    ImagesDirCreated { platform: Platform },
    /// A loose image was associated with a game file and moved into
    /// `images/` under the game's stem (always `.png`).
    ImageMoved {
        platform: Platform,
        image: String,
        target: String,
        score: usize,
    },
    /// A loose image matched no game file; left in place.
    ImageUnmatched { platform: Platform, image: String },
    /// A non-`.zip` game file was deleted because a `.zip` with the same
    /// stem exists.
    DuplicateRemoved { platform: Platform, file: String },
    /// Orphan pruning finished for a platform's `images/` folder.
    OrphansPruned {
        platform: Platform,
        kept: usize,
        removed: usize,
    },
    /// `images/` held files but the platform has no game files left; all
    /// of them were deleted.
    ImagesCleared { platform: Platform, removed: usize },
    /// `filelist.csv` was regenerated.
    FilelistWritten { platform: Platform, entries: usize },
    /// `filelist.csv` was truncated because no game files remain.
    FilelistTruncated { platform: Platform },
    /// `allfiles.lst` was rewritten.
    CatalogWritten { entries: usize, previous: usize },
    /// A favorites/recent list was filtered.
    ListFiltered {
        name: String,
        kept: usize,
        removed: usize,
    },
    /// A per-file operation failed; the run continues.
    OpFailed { message: String },
}
