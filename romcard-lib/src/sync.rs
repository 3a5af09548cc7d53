//! Whole-card synchronization: one pass over every platform folder, then
//! the catalog-wide metadata.

use std::path::Path;

use romcard_core::Platform;
use serde::Serialize;

use crate::catalog::{self, CatalogReport, ListReport};
use crate::error::SyncError;
use crate::fsops::FileOps;
use crate::progress::SyncEvent;
use crate::reconcile::{self, PlatformReport};

/// Options controlling a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Compute and report everything without touching the filesystem.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self { dry_run: true }
    }
}

/// Full outcome of a sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub dry_run: bool,
    /// One report per platform folder that exists on the card, in
    /// platform order.
    pub platforms: Vec<PlatformReport>,
    /// `None` when `allfiles.lst` does not exist.
    pub catalog: Option<CatalogReport>,
    pub lists: Vec<ListReport>,
}

impl SyncReport {
    /// All per-file operation failures across the run.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.platforms
            .iter()
            .flat_map(|p| p.errors.iter())
            .chain(self.catalog.iter().flat_map(|c| c.errors.iter()))
            .chain(self.lists.iter().flat_map(|l| l.errors.iter()))
            .map(String::as_str)
    }
}

/// Run one reconciliation pass over the card.
///
/// The only fatal error is an unreadable root; everything below that is
/// best-effort and lands in the reports.
pub fn sync_card(
    root: &Path,
    options: &SyncOptions,
    progress: &dyn Fn(SyncEvent),
) -> Result<SyncReport, SyncError> {
    std::fs::read_dir(root).map_err(|source| SyncError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let ops = FileOps::new(options.dry_run);

    let mut platforms = Vec::new();
    for &platform in Platform::all() {
        if let Some(report) = reconcile::sync_platform(root, platform, &ops, progress) {
            platforms.push(report);
        }
    }

    let catalog = catalog::sync_catalog(root, &platforms, &ops, progress);
    let lists = catalog::clean_lists(root, &platforms, &ops, progress);

    Ok(SyncReport {
        dry_run: options.dry_run,
        platforms,
        catalog,
        lists,
    })
}

#[path = "tests/sync_tests.rs"]
#[cfg(test)]
mod tests;
