//! Per-platform reconciliation.
//!
//! Steps run in a fixed order and each one reads the state left by the
//! previous one: sanitize names, discover, associate loose images, prune
//! extension duplicates, prune orphan images, regenerate `filelist.csv`.
//!
//! In execute mode the platform directory is re-enumerated between
//! mutating steps (a cached listing would go stale after the renames).
//! In dry-run mode the skipped operations are applied to an in-memory
//! listing instead, so both modes make identical decisions and emit the
//! same events from the same starting state.

use std::collections::HashSet;
use std::path::Path;

use romcard_core::{Platform, layout};
use serde::Serialize;

use crate::fsops::FileOps;
use crate::matcher;
use crate::progress::SyncEvent;
use crate::scanner;
use crate::store;

/// Summary status for a platform folder.
///
/// `OK` iff ROM count, CSV record count, and image count all agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformStatus {
    Ok,
    Mismatch,
    /// No ROMs and no images.
    Empty,
    /// Images present but no ROMs.
    NoRoms,
}

impl PlatformStatus {
    pub fn from_counts(roms: usize, csv: usize, images: usize) -> Self {
        if roms == 0 && images == 0 {
            Self::Empty
        } else if roms == 0 {
            Self::NoRoms
        } else if roms == csv && csv == images {
            Self::Ok
        } else {
            Self::Mismatch
        }
    }

    /// Console tag, matching what the device's own tooling prints.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Mismatch => "MISMATCH",
            Self::Empty => "VIDE",
            Self::NoRoms => "PAS DE ROMS",
        }
    }
}

/// Outcome of reconciling one platform folder.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub platform: Platform,
    /// Game files present after reconciliation.
    pub rom_count: usize,
    /// Records in `filelist.csv` after reconciliation.
    pub csv_count: usize,
    /// Files in `images/` after reconciliation.
    pub image_count: usize,
    pub roms_renamed: usize,
    pub images_renamed: usize,
    pub images_moved: usize,
    pub images_unmatched: usize,
    pub duplicates_removed: usize,
    pub orphans_removed: usize,
    pub status: PlatformStatus,
    /// Per-file operation failures (the run continues past them).
    pub errors: Vec<String>,
    /// Final game file names, sorted. Input to the catalog-wide pass.
    pub rom_files: Vec<String>,
}

/// Reconcile one platform folder. Returns `None` if the folder does not
/// exist on the card (a normal state, not an error).
pub fn sync_platform(
    root: &Path,
    platform: Platform,
    ops: &FileOps,
    progress: &dyn Fn(SyncEvent),
) -> Option<PlatformReport> {
    let dir = layout::platform_dir(root, platform);
    if !dir.is_dir() {
        return None;
    }
    let images_dir = layout::images_dir(&dir);
    let exts = scanner::extension_set(platform.rom_extensions());
    let mut errors: Vec<String> = Vec::new();

    // Step 1: strip commas from game file names and from everything
    // inside images/ (commas break the filelist format).
    let mut roms_renamed = 0;
    for name in scanner::rom_file_names(&dir, &exts) {
        if !name.contains(',') {
            continue;
        }
        let new_name = name.replace(',', "");
        match ops.rename(&dir.join(&name), &dir.join(&new_name)) {
            Ok(()) => {
                roms_renamed += 1;
                progress(SyncEvent::RomRenamed {
                    platform,
                    from: name,
                    to: new_name,
                });
            }
            Err(e) => fail(&mut errors, progress, format!("[{platform}] rename {name}: {e}")),
        }
    }
    let mut images_renamed = 0;
    if images_dir.is_dir() {
        for name in scanner::all_file_names(&images_dir) {
            if !name.contains(',') {
                continue;
            }
            let new_name = name.replace(',', "");
            match ops.rename(&images_dir.join(&name), &images_dir.join(&new_name)) {
                Ok(()) => {
                    images_renamed += 1;
                    progress(SyncEvent::ImageRenamed {
                        platform,
                        from: name,
                        to: new_name,
                    });
                }
                Err(e) => fail(&mut errors, progress, format!("[{platform}] rename {name}: {e}")),
            }
        }
    }

    // Step 2: discover the post-sanitize state. Execute mode sees the
    // renamed files on disk; dry run applies the strip to the listing.
    let mut roms = scanner::rom_file_names(&dir, &exts);
    let mut sub_images = scanner::all_file_names(&images_dir);
    if ops.dry_run {
        strip_commas(&mut roms);
        strip_commas(&mut sub_images);
    }
    let direct_images = scanner::image_file_names(&dir);

    progress(SyncEvent::PlatformStarted {
        platform,
        rom_count: roms.len(),
    });

    // Step 3: associate loose images with game files and move them into
    // images/ under the game's stem, always as .png.
    let mut images_dir_present = images_dir.is_dir();
    if !images_dir_present && !roms.is_empty() {
        match ops.create_dir_all(&images_dir) {
            Ok(()) => {
                images_dir_present = true;
                progress(SyncEvent::ImagesDirCreated { platform });
            }
            Err(e) => fail(
                &mut errors,
                progress,
                format!("[{platform}] create images/: {e}"),
            ),
        }
    }
    let mut images_moved = 0;
    let mut images_unmatched = 0;
    if !direct_images.is_empty() && !roms.is_empty() {
        let mut used: HashSet<String> = HashSet::new();
        for image in &direct_images {
            let image_stem = scanner::stem_of(image);
            let mut best: Option<&String> = None;
            let mut best_score = 0;
            for rom in &roms {
                if used.contains(rom.as_str()) {
                    continue;
                }
                let score = matcher::match_score(scanner::stem_of(rom), image_stem);
                if score > best_score {
                    best_score = score;
                    best = Some(rom);
                }
            }
            match best {
                Some(rom) if best_score >= 1 => {
                    used.insert(rom.clone());
                    let target = format!("{}.png", scanner::stem_of(rom));
                    match ops.move_file(&dir.join(image), &images_dir.join(&target)) {
                        Ok(()) => {
                            images_moved += 1;
                            if ops.dry_run && !sub_images.contains(&target) {
                                sub_images.push(target.clone());
                            }
                            progress(SyncEvent::ImageMoved {
                                platform,
                                image: image.clone(),
                                target,
                                score: best_score,
                            });
                        }
                        Err(e) => fail(
                            &mut errors,
                            progress,
                            format!("[{platform}] move {image}: {e}"),
                        ),
                    }
                }
                _ => {
                    images_unmatched += 1;
                    progress(SyncEvent::ImageUnmatched {
                        platform,
                        image: image.clone(),
                    });
                }
            }
        }
    }

    // Step 4: a stem present both as .zip and another extension keeps
    // only the .zip (archives are authoritative). Deliberately exact,
    // case-sensitive .zip, and .7z is not treated the same way.
    if !ops.dry_run {
        roms = scanner::rom_file_names(&dir, &exts);
    }
    let zip_stems: HashSet<String> = roms
        .iter()
        .filter(|n| n.ends_with(".zip"))
        .map(|n| scanner::stem_of(n).to_string())
        .collect();
    let duplicates: Vec<String> = roms
        .iter()
        .filter(|n| !n.ends_with(".zip") && zip_stems.contains(scanner::stem_of(n)))
        .cloned()
        .collect();
    let mut duplicates_removed = 0;
    for name in &duplicates {
        match ops.remove_file(&dir.join(name)) {
            Ok(()) => {
                duplicates_removed += 1;
                if ops.dry_run {
                    roms.retain(|n| n != name);
                }
                progress(SyncEvent::DuplicateRemoved {
                    platform,
                    file: name.clone(),
                });
            }
            Err(e) => log::warn!("[{platform}] could not delete duplicate {name}: {e}"),
        }
    }

    // Step 5: prune images with no matching game file stem. With zero
    // game files left there are no stems to validate against, so the
    // whole images/ folder is cleared.
    if !ops.dry_run {
        roms = scanner::rom_file_names(&dir, &exts);
    }
    let mut orphans_removed = 0;
    if images_dir_present {
        let listing: Vec<String> = if ops.dry_run {
            sub_images.clone()
        } else {
            scanner::all_file_names(&images_dir)
        };
        if !roms.is_empty() {
            let stems: HashSet<&str> = roms.iter().map(|n| scanner::stem_of(n)).collect();
            let mut kept = 0;
            for name in &listing {
                if stems.contains(scanner::stem_of(name)) {
                    kept += 1;
                    continue;
                }
                match ops.remove_file(&images_dir.join(name)) {
                    Ok(()) => {
                        orphans_removed += 1;
                        if ops.dry_run {
                            sub_images.retain(|n| n != name);
                        }
                    }
                    Err(e) => log::warn!("[{platform}] could not delete orphan {name}: {e}"),
                }
            }
            progress(SyncEvent::OrphansPruned {
                platform,
                kept,
                removed: orphans_removed,
            });
        } else if !listing.is_empty() {
            for name in &listing {
                match ops.remove_file(&images_dir.join(name)) {
                    Ok(()) => {
                        orphans_removed += 1;
                        if ops.dry_run {
                            sub_images.retain(|n| n != name);
                        }
                    }
                    Err(e) => log::warn!("[{platform}] could not delete image {name}: {e}"),
                }
            }
            progress(SyncEvent::ImagesCleared {
                platform,
                removed: orphans_removed,
            });
        }
    }

    // Step 6: regenerate filelist.csv, keeping stored remainders for
    // surviving entries and synthesizing (stem, stem) for new ones.
    if !ops.dry_run {
        roms = scanner::rom_file_names(&dir, &exts);
    }
    let csv_path = layout::filelist_path(&dir);
    let mut csv_count = 0;
    if !roms.is_empty() {
        let existing = store::load(&csv_path, ',');
        let records = store::merge(&existing, &roms, |key| {
            store::default_filelist_rest(scanner::stem_of(key))
        });
        match ops.write(&csv_path, &store::render(&records, ',')) {
            Ok(()) => {
                csv_count = records.len();
                progress(SyncEvent::FilelistWritten {
                    platform,
                    entries: csv_count,
                });
            }
            Err(e) => {
                // The file still holds its pre-write records; the summary
                // must reflect that, not the count we failed to persist.
                csv_count = existing.len();
                fail(
                    &mut errors,
                    progress,
                    format!("[{platform}] write filelist.csv: {e}"),
                );
            }
        }
    } else if csv_path.is_file() {
        match ops.write(&csv_path, "") {
            Ok(()) => progress(SyncEvent::FilelistTruncated { platform }),
            Err(e) => {
                csv_count = store::load(&csv_path, ',').len();
                fail(
                    &mut errors,
                    progress,
                    format!("[{platform}] truncate filelist.csv: {e}"),
                );
            }
        }
    }

    // Final state for the summary and the catalog-wide pass. Dry run
    // reports the state the card would reach.
    let image_count = if ops.dry_run {
        sub_images.len()
    } else {
        scanner::all_file_names(&images_dir).len()
    };
    let rom_count = roms.len();
    let status = PlatformStatus::from_counts(rom_count, csv_count, image_count);

    Some(PlatformReport {
        platform,
        rom_count,
        csv_count,
        image_count,
        roms_renamed,
        images_renamed,
        images_moved,
        images_unmatched,
        duplicates_removed,
        orphans_removed,
        status,
        errors,
        rom_files: roms,
    })
}

/// Apply the comma-strip rename to a dry-run listing. Collisions follow
/// the on-disk rule (last write wins), so duplicates collapse.
fn strip_commas(names: &mut Vec<String>) {
    for name in names.iter_mut() {
        if name.contains(',') {
            *name = name.replace(',', "");
        }
    }
    names.sort();
    names.dedup();
}

fn fail(errors: &mut Vec<String>, progress: &dyn Fn(SyncEvent), message: String) {
    progress(SyncEvent::OpFailed {
        message: message.clone(),
    });
    errors.push(message);
}

#[path = "tests/reconcile_tests.rs"]
#[cfg(test)]
mod tests;
