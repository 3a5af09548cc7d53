//! Shared application settings (card root, config file location).
//!
//! The settings file lives at `~/.config/romcard/settings.toml` so the
//! saved card root survives across runs and machines that mount the card
//! somewhere unusual.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/romcard/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romcard").join("settings.toml")
}

/// Platform default for the card mount point: the removable-drive letter
/// the handheld's documentation assumes on Windows, a fixed media mount
/// elsewhere.
pub fn default_card_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("H:\\")
    } else {
        PathBuf::from("/media/SDCARD")
    }
}

/// Resolve the card root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `card.root` in `settings.toml`
/// 3. The platform default
pub fn resolve_card_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_card_root() {
        return p;
    }
    default_card_root()
}

/// Read `card.root` from `settings.toml`, if set.
fn load_card_root() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let root = doc.get("card")?.get("root")?.as_str()?;
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}

/// Save the card root in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are
/// preserved.
pub fn save_card_root(path: &Path) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let card = table
        .entry("card")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let card_table = card
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[card] is not a table"))?;
    card_table.insert(
        "root".to_string(),
        toml::Value::String(path.to_string_lossy().into_owned()),
    );

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}
