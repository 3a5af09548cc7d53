use super::*;

use std::fs;
use std::path::Path;

#[test]
fn load_missing_file_yields_empty_map() {
    let loaded = load(Path::new("/nonexistent/romcard-test.csv"), ',');
    assert!(loaded.is_empty());
}

#[test]
fn load_splits_on_first_separator_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filelist.csv");
    fs::write(&path, "game.zip,Custom Name,CustomRegion\n").unwrap();

    let loaded = load(&path, ',');
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded["game.zip"], "Custom Name,CustomRegion");
}

#[test]
fn load_skips_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filelist.csv");
    fs::write(
        &path,
        "good.zip,Good\nno separator here\n,orphan remainder\n\n  \nother.zip,Other\n",
    )
    .unwrap();

    let loaded = load(&path, ',');
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded["good.zip"], "Good");
    assert_eq!(loaded["other.zip"], "Other");
}

#[test]
fn load_trims_the_key_but_not_the_remainder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filelist.csv");
    fs::write(&path, "  game.zip , spaced remainder \n").unwrap();

    let loaded = load(&path, ',');
    // Line trim removes outer whitespace; inner remainder spacing survives.
    assert_eq!(loaded["game.zip"], " spaced remainder");
}

#[test]
fn merge_keeps_stored_remainders_and_synthesizes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filelist.csv");
    fs::write(&path, "zelda.zip,Zelda Custom,EU\n").unwrap();

    let existing = load(&path, ',');
    let keys = vec!["mario.zip".to_string(), "zelda.zip".to_string()];
    let records = merge(&existing, &keys, |key| {
        default_filelist_rest(crate::scanner::stem_of(key))
    });

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].key, "mario.zip");
    assert_eq!(records[0].rest, "mario,mario");
    assert_eq!(records[1].key, "zelda.zip");
    assert_eq!(records[1].rest, "Zelda Custom,EU");
}

#[test]
fn render_emits_one_line_per_record_with_trailing_newline() {
    let records = vec![
        Record {
            key: "a.zip".into(),
            rest: "a,a".into(),
        },
        Record {
            key: "b.zip".into(),
            rest: "b,b".into(),
        },
    ];
    assert_eq!(render(&records, ','), "a.zip,a,a\nb.zip,b,b\n");
}

#[test]
fn render_empty_is_empty_string() {
    assert_eq!(render(&[], ','), "");
}

#[test]
fn pipe_variant_round_trips_full_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("allfiles.lst");
    fs::write(&path, "GB/zelda.zip|Zelda|ZELDA|Zelda|Zelda\n").unwrap();

    let existing = load(&path, '|');
    let keys = vec!["GB/zelda.zip".to_string()];
    let records = merge(&existing, &keys, default_catalog_rest);
    assert_eq!(render(&records, '|'), "GB/zelda.zip|Zelda|ZELDA|Zelda|Zelda\n");
}

#[test]
fn catalog_default_uppercases_the_second_field() {
    assert_eq!(
        default_catalog_rest("mario bros"),
        "mario bros|MARIO BROS|mario bros|mario bros"
    );
}
