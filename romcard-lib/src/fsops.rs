//! Dry-run-aware filesystem primitives.
//!
//! Every destructive operation the reconciler performs goes through
//! `FileOps`. Under dry run the methods succeed without touching the
//! filesystem, so callers follow one code path in both modes.

use std::io;
use std::path::Path;

/// Filesystem operation executor. `dry_run` turns every mutation into a
/// successful no-op.
#[derive(Debug, Clone, Copy)]
pub struct FileOps {
    pub dry_run: bool,
}

impl FileOps {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Rename a file in place.
    pub fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::rename(from, to)
    }

    /// Move a file as copy-then-delete-source.
    ///
    /// Copy failure leaves the original intact and is the caller's error.
    /// Delete failure after a successful copy leaves a duplicate behind;
    /// that is logged and not treated as an error.
    pub fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::copy(from, to)?;
        if let Err(e) = std::fs::remove_file(from) {
            log::warn!(
                "copied {} but could not remove the original: {}",
                from.display(),
                e
            );
        }
        Ok(())
    }

    /// Delete a file.
    pub fn remove_file(&self, path: &Path) -> io::Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::remove_file(path)
    }

    /// Create a directory (and parents).
    pub fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::create_dir_all(path)
    }

    /// Overwrite a file with the given contents. Writing an empty string
    /// truncates the file without deleting it.
    pub fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if self.dry_run {
            return Ok(());
        }
        std::fs::write(path, contents)
    }
}
