use super::*;

use std::fs;
use std::path::Path;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"x").unwrap();
}

#[test]
fn rom_listing_is_filtered_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "zelda.zip");
    touch(dir.path(), "mario.gb");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "aliens.7z");

    let exts = extension_set(&["gb", "zip", "7z"]);
    let names = rom_file_names(dir.path(), &exts);
    assert_eq!(names, vec!["aliens.7z", "mario.gb", "zelda.zip"]);
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "GAME.ZIP");
    touch(dir.path(), "other.Gb");

    let exts = extension_set(&["gb", "zip"]);
    let names = rom_file_names(dir.path(), &exts);
    assert_eq!(names, vec!["GAME.ZIP", "other.Gb"]);
}

#[test]
fn missing_directory_yields_empty_listing() {
    let exts = extension_set(&["zip"]);
    assert!(rom_file_names(Path::new("/nonexistent/romcard-test"), &exts).is_empty());
    assert!(image_file_names(Path::new("/nonexistent/romcard-test")).is_empty());
}

#[test]
fn listing_does_not_recurse() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "top.zip");
    fs::create_dir(dir.path().join("nested")).unwrap();
    touch(&dir.path().join("nested"), "inner.zip");

    let exts = extension_set(&["zip"]);
    assert_eq!(rom_file_names(dir.path(), &exts), vec!["top.zip"]);
}

#[test]
fn image_listing_filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "cover.png");
    touch(dir.path(), "shot.JPG");
    touch(dir.path(), "game.zip");

    assert_eq!(image_file_names(dir.path()), vec!["cover.png", "shot.JPG"]);
}

#[test]
fn all_file_names_ignores_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "anything.dat");
    fs::create_dir(dir.path().join("sub")).unwrap();

    assert_eq!(all_file_names(dir.path()), vec!["anything.dat"]);
}

#[test]
fn stem_of_strips_only_the_final_extension() {
    assert_eq!(stem_of("zelda.zip"), "zelda");
    assert_eq!(stem_of("game.v1.2.zip"), "game.v1.2");
    assert_eq!(stem_of("noext"), "noext");
    assert_eq!(stem_of(".hidden"), ".hidden");
}
