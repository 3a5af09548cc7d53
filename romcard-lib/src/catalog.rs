//! Catalog-wide reconciliation: `allfiles.lst` and the favorites/recent
//! lists under `cubegm/`.
//!
//! The catalog is regenerated from the per-platform truth (entries whose
//! game file is gone simply are not carried forward); the lists are only
//! filtered, never regenerated, so their line content and relative order
//! survive untouched.

use std::collections::HashSet;
use std::path::Path;

use romcard_core::layout;
use serde::Serialize;

use crate::fsops::FileOps;
use crate::progress::SyncEvent;
use crate::reconcile::PlatformReport;
use crate::scanner;
use crate::store;

/// Outcome of the `allfiles.lst` synchronization.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub entries: usize,
    pub previous_entries: usize,
    /// Per-file failures during the catalog pass.
    pub errors: Vec<String>,
}

/// Outcome of filtering one favorites/recent list.
#[derive(Debug, Clone, Serialize)]
pub struct ListReport {
    pub name: String,
    pub kept: usize,
    pub removed: usize,
    pub errors: Vec<String>,
}

/// Rewrite `allfiles.lst` from the reconciled per-platform game files.
///
/// Existing records keep their line verbatim; unseen keys get a
/// synthesized record. Returns `None` when the catalog file does not
/// exist (the firmware owns its creation).
pub fn sync_catalog(
    root: &Path,
    platforms: &[PlatformReport],
    ops: &FileOps,
    progress: &dyn Fn(SyncEvent),
) -> Option<CatalogReport> {
    let path = layout::system_file(root, layout::ALLFILES_NAME);
    if !path.is_file() {
        return None;
    }
    let existing = store::load(&path, '|');
    let previous_entries = existing.len();

    let keys: Vec<String> = platforms
        .iter()
        .flat_map(|report| {
            report
                .rom_files
                .iter()
                .map(|name| layout::catalog_key(report.platform, name))
        })
        .collect();
    let records = store::merge(&existing, &keys, |key| {
        let file_name = key.rsplit_once('/').map(|(_, n)| n).unwrap_or(key);
        store::default_catalog_rest(scanner::stem_of(file_name))
    });

    let mut errors = Vec::new();
    match ops.write(&path, &store::render(&records, '|')) {
        Ok(()) => progress(SyncEvent::CatalogWritten {
            entries: records.len(),
            previous: previous_entries,
        }),
        Err(e) => {
            let message = format!("write {}: {e}", layout::ALLFILES_NAME);
            progress(SyncEvent::OpFailed {
                message: message.clone(),
            });
            errors.push(message);
        }
    }

    Some(CatalogReport {
        entries: records.len(),
        previous_entries,
        errors,
    })
}

/// Filter `favorites.lst` and `recent.lst` down to entries whose key
/// still denotes an existing game file. Absent files are skipped.
pub fn clean_lists(
    root: &Path,
    platforms: &[PlatformReport],
    ops: &FileOps,
    progress: &dyn Fn(SyncEvent),
) -> Vec<ListReport> {
    let valid_keys: HashSet<String> = platforms
        .iter()
        .flat_map(|report| {
            report
                .rom_files
                .iter()
                .map(|name| layout::catalog_key(report.platform, name))
        })
        .collect();

    let mut reports = Vec::new();
    for name in [layout::FAVORITES_NAME, layout::RECENT_NAME] {
        let path = layout::system_file(root, name);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => continue,
        };

        let mut kept: Vec<&str> = Vec::new();
        let mut removed = 0;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let key = line.split('|').next().unwrap_or(line);
            if valid_keys.contains(key) {
                kept.push(line);
            } else {
                removed += 1;
            }
        }

        let mut rendered = kept.join("\n");
        if !rendered.is_empty() {
            rendered.push('\n');
        }

        let mut errors = Vec::new();
        match ops.write(&path, &rendered) {
            Ok(()) => progress(SyncEvent::ListFiltered {
                name: name.to_string(),
                kept: kept.len(),
                removed,
            }),
            Err(e) => {
                let message = format!("write {name}: {e}");
                progress(SyncEvent::OpFailed {
                    message: message.clone(),
                });
                errors.push(message);
            }
        }

        reports.push(ListReport {
            name: name.to_string(),
            kept: kept.len(),
            removed,
            errors,
        });
    }
    reports
}

#[path = "tests/catalog_tests.rs"]
#[cfg(test)]
mod tests;
