use super::*;

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use romcard_core::Platform;

use crate::fsops::FileOps;
use crate::progress::SyncEvent;
use crate::reconcile::{PlatformReport, PlatformStatus};

fn report(platform: Platform, files: &[&str]) -> PlatformReport {
    PlatformReport {
        platform,
        rom_count: files.len(),
        csv_count: files.len(),
        image_count: 0,
        roms_renamed: 0,
        images_renamed: 0,
        images_moved: 0,
        images_unmatched: 0,
        duplicates_removed: 0,
        orphans_removed: 0,
        status: PlatformStatus::Mismatch,
        errors: Vec::new(),
        rom_files: files.iter().map(|s| s.to_string()).collect(),
    }
}

fn system_dir(root: &Path) -> std::path::PathBuf {
    let dir = root.join("cubegm");
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn catalog_is_skipped_when_absent() {
    let card = tempfile::tempdir().unwrap();
    let events = RefCell::new(Vec::new());
    let cb = |e: SyncEvent| events.borrow_mut().push(e);
    let outcome = sync_catalog(
        card.path(),
        &[report(Platform::GameBoy, &["zelda.zip"])],
        &FileOps::new(false),
        &cb,
    );
    assert!(outcome.is_none());
    assert!(events.into_inner().is_empty());
}

#[test]
fn catalog_preserves_known_lines_and_synthesizes_new_ones() {
    let card = tempfile::tempdir().unwrap();
    let dir = system_dir(card.path());
    fs::write(
        dir.join("allfiles.lst"),
        "GB/zelda.zip|The Legend|LEGEND|Zelda|Zelda\nGB/gone.zip|Gone|GONE|Gone|Gone\n",
    )
    .unwrap();

    let platforms = vec![
        report(Platform::Famicom, &["mario bros.zip"]),
        report(Platform::GameBoy, &["zelda.zip"]),
    ];
    let events = RefCell::new(Vec::new());
    let cb = |e: SyncEvent| events.borrow_mut().push(e);
    let outcome = sync_catalog(card.path(), &platforms, &FileOps::new(false), &cb).unwrap();

    let written = fs::read_to_string(dir.join("allfiles.lst")).unwrap();
    assert_eq!(
        written,
        "FC/mario bros.zip|mario bros|MARIO BROS|mario bros|mario bros\n\
         GB/zelda.zip|The Legend|LEGEND|Zelda|Zelda\n"
    );
    assert_eq!(outcome.entries, 2);
    assert_eq!(outcome.previous_entries, 2);
    assert!(events.into_inner().contains(&SyncEvent::CatalogWritten {
        entries: 2,
        previous: 2,
    }));
}

#[test]
fn catalog_truncates_when_no_game_files_exist() {
    let card = tempfile::tempdir().unwrap();
    let dir = system_dir(card.path());
    fs::write(dir.join("allfiles.lst"), "GB/gone.zip|Gone|GONE|Gone|Gone\n").unwrap();

    let cb = |_: SyncEvent| {};
    let outcome = sync_catalog(card.path(), &[], &FileOps::new(false), &cb).unwrap();

    assert_eq!(fs::read_to_string(dir.join("allfiles.lst")).unwrap(), "");
    assert_eq!(outcome.entries, 0);
    assert_eq!(outcome.previous_entries, 1);
}

#[test]
fn lists_keep_valid_lines_verbatim_in_order() {
    let card = tempfile::tempdir().unwrap();
    let dir = system_dir(card.path());
    fs::write(
        dir.join("favorites.lst"),
        "GB/zelda.gbc|Zelda\nGB/zelda.zip|Zelda|extra|fields\nGB/gone.zip|Gone\n",
    )
    .unwrap();
    fs::write(dir.join("recent.lst"), "GB/zelda.zip|Zelda\n").unwrap();

    let platforms = vec![report(Platform::GameBoy, &["zelda.zip"])];
    let cb = |_: SyncEvent| {};
    let reports = clean_lists(card.path(), &platforms, &FileOps::new(false), &cb);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "favorites.lst");
    assert_eq!(reports[0].kept, 1);
    assert_eq!(reports[0].removed, 2);
    let favorites = fs::read_to_string(dir.join("favorites.lst")).unwrap();
    assert_eq!(favorites, "GB/zelda.zip|Zelda|extra|fields\n");
    assert_eq!(reports[1].kept, 1);
    assert_eq!(reports[1].removed, 0);
}

#[test]
fn empty_list_result_truncates_the_file() {
    let card = tempfile::tempdir().unwrap();
    let dir = system_dir(card.path());
    fs::write(dir.join("recent.lst"), "GB/gone.zip|Gone\n").unwrap();

    let cb = |_: SyncEvent| {};
    let reports = clean_lists(card.path(), &[], &FileOps::new(false), &cb);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kept, 0);
    assert_eq!(reports[0].removed, 1);
    assert_eq!(fs::read_to_string(dir.join("recent.lst")).unwrap(), "");
}

#[test]
fn absent_lists_are_skipped() {
    let card = tempfile::tempdir().unwrap();
    system_dir(card.path());
    let cb = |_: SyncEvent| {};
    let reports = clean_lists(card.path(), &[], &FileOps::new(false), &cb);
    assert!(reports.is_empty());
}
