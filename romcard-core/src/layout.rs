//! On-card directory layout.
//!
//! The firmware expects one folder per platform at the card root, an
//! optional `images/` subfolder and `filelist.csv` inside each, and the
//! global metadata under `cubegm/`.

use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// Subdirectory of a platform folder holding cover art.
pub const IMAGES_DIR: &str = "images";

/// Per-platform metadata file name.
pub const FILELIST_NAME: &str = "filelist.csv";

/// Card subdirectory holding the global metadata files.
pub const SYSTEM_DIR: &str = "cubegm";

/// Global catalog of every game file on the card.
pub const ALLFILES_NAME: &str = "allfiles.lst";

/// User favorites list.
pub const FAVORITES_NAME: &str = "favorites.lst";

/// Recently-played list.
pub const RECENT_NAME: &str = "recent.lst";

/// `<root>/<FOLDER>` for a platform.
pub fn platform_dir(root: &Path, platform: Platform) -> PathBuf {
    root.join(platform.folder_name())
}

/// `<platform dir>/images`.
pub fn images_dir(platform_dir: &Path) -> PathBuf {
    platform_dir.join(IMAGES_DIR)
}

/// `<platform dir>/filelist.csv`.
pub fn filelist_path(platform_dir: &Path) -> PathBuf {
    platform_dir.join(FILELIST_NAME)
}

/// `<root>/cubegm/<name>` for one of the global metadata files.
pub fn system_file(root: &Path, name: &str) -> PathBuf {
    root.join(SYSTEM_DIR).join(name)
}

/// Catalog key for a game file: `"<FOLDER>/<filename>"`.
pub fn catalog_key(platform: Platform, file_name: &str) -> String {
    format!("{}/{}", platform.folder_name(), file_name)
}
