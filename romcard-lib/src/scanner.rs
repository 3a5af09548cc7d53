//! Directory scanner for the flat per-platform card layout.
//!
//! Listings are non-recursive; a missing directory is a normal state and
//! yields an empty listing.

use std::collections::HashSet;
use std::path::Path;

use romcard_core::platform::is_image_name;

/// Build a lowercase extension set from a platform's extension list.
pub fn extension_set(extensions: &[&str]) -> HashSet<String> {
    extensions.iter().map(|e| e.to_lowercase()).collect()
}

/// Check if a file name has an extension in the allowed set
/// (case-insensitive).
pub fn has_matching_extension(name: &str, extensions: &HashSet<String>) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => extensions.contains(&ext.to_lowercase()),
        _ => false,
    }
}

/// The stem of a file name (everything before the final `.`).
///
/// Names without an extension are their own stem, matching how the
/// firmware derives display names.
pub fn stem_of(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// List the game files in a platform directory: regular files whose
/// extension is in `extensions`, sorted by name ascending. Does not
/// recurse. Missing directory yields an empty vec.
pub fn rom_file_names(dir: &Path, extensions: &HashSet<String>) -> Vec<String> {
    let mut names = regular_file_names(dir);
    names.retain(|n| has_matching_extension(n, extensions));
    names.sort();
    names
}

/// List cover-art image files (by extension) directly inside a directory,
/// sorted by name so association order is reproducible. Does not recurse.
pub fn image_file_names(dir: &Path) -> Vec<String> {
    let mut names = regular_file_names(dir);
    names.retain(|n| is_image_name(n));
    names.sort();
    names
}

/// List every regular file directly inside a directory, sorted by name.
/// Used for the `images/` subdirectory, where all files are treated as
/// cover art regardless of extension.
pub fn all_file_names(dir: &Path) -> Vec<String> {
    let mut names = regular_file_names(dir);
    names.sort();
    names
}

fn regular_file_names(dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            path.file_name().and_then(|n| n.to_str()).map(String::from)
        })
        .collect()
}

#[path = "tests/scanner_tests.rs"]
#[cfg(test)]
mod tests;
