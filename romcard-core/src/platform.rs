use serde::Serialize;

/// Platform/console identifiers for every system the handheld ships with.
///
/// This enum centralizes console identity — folder names, display names,
/// aliases, and the accepted ROM extensions — in one place. The firmware
/// only knows platforms by their card folder name (e.g. `GB`, `PS`), so
/// that name is the canonical identifier everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Platform {
    Atari,
    Famicom,
    GameBoy,
    GameBoyAdvance,
    GameBoyColor,
    GameGear,
    Mame,
    MegaDrive,
    NeoGeoPocketColor,
    PcEngine,
    PlayStation,
    SuperFamicom,
}

/// All platform variants, ordered by card folder name. This is the order
/// every multi-platform pass (reconciliation, catalog sync, summary) uses.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Atari,
    Platform::Famicom,
    Platform::GameBoy,
    Platform::GameBoyAdvance,
    Platform::GameBoyColor,
    Platform::GameGear,
    Platform::Mame,
    Platform::MegaDrive,
    Platform::NeoGeoPocketColor,
    Platform::PcEngine,
    Platform::PlayStation,
    Platform::SuperFamicom,
];

/// File extensions (lowercase, no dot) recognized as cover-art images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

impl Platform {
    /// Folder name on the card (and the key used in `allfiles.lst`).
    pub fn folder_name(&self) -> &'static str {
        match self {
            Self::Atari => "ATARI",
            Self::Famicom => "FC",
            Self::GameBoy => "GB",
            Self::GameBoyAdvance => "GBA",
            Self::GameBoyColor => "GBC",
            Self::GameGear => "GG",
            Self::Mame => "MAME",
            Self::MegaDrive => "MD",
            Self::NeoGeoPocketColor => "NGPC",
            Self::PcEngine => "PCE",
            Self::PlayStation => "PS",
            Self::SuperFamicom => "SFC",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Atari => "Atari 2600/7800",
            Self::Famicom => "Famicom / NES",
            Self::GameBoy => "Game Boy",
            Self::GameBoyAdvance => "Game Boy Advance",
            Self::GameBoyColor => "Game Boy Color",
            Self::GameGear => "Game Gear / Master System",
            Self::Mame => "Arcade (MAME)",
            Self::MegaDrive => "Mega Drive / Genesis",
            Self::NeoGeoPocketColor => "Neo Geo Pocket Color",
            Self::PcEngine => "PC Engine / TurboGrafx-16",
            Self::PlayStation => "PlayStation",
            Self::SuperFamicom => "Super Famicom / SNES",
        }
    }

    /// ROM file extensions (lowercase, no dot) accepted in this platform's
    /// folder. Matching against file names is case-insensitive.
    pub fn rom_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Atari => &["a26", "a78", "bin", "zip", "7z"],
            Self::Famicom => &["nes", "fds", "zip", "7z"],
            Self::GameBoy => &["gb", "zip", "7z"],
            Self::GameBoyAdvance => &["gba", "zip", "7z"],
            Self::GameBoyColor => &["gbc", "zip", "7z"],
            Self::GameGear => &["gg", "sms", "zip", "7z"],
            Self::Mame => &["fba", "zip", "7z"],
            Self::MegaDrive => &["md", "gen", "bin", "zip", "7z", "smd"],
            Self::NeoGeoPocketColor => &["ngp", "ngc", "zip", "7z"],
            Self::PcEngine => &["pce", "zip", "7z"],
            Self::PlayStation => &["img", "iso", "bin", "cue", "pbp", "chd", "zip", "7z"],
            Self::SuperFamicom => &["sfc", "smc", "zip", "7z"],
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Atari => &["atari", "a26", "a78"],
            Self::Famicom => &["fc", "nes", "famicom"],
            Self::GameBoy => &["gb", "gameboy", "game boy"],
            Self::GameBoyAdvance => &["gba", "gameboy advance"],
            Self::GameBoyColor => &["gbc", "gameboy color"],
            Self::GameGear => &["gg", "gamegear", "sms", "game gear"],
            Self::Mame => &["mame", "arcade", "fba"],
            Self::MegaDrive => &["md", "megadrive", "genesis", "mega drive"],
            Self::NeoGeoPocketColor => &["ngpc", "ngp"],
            Self::PcEngine => &["pce", "pcengine", "tg16", "turbografx"],
            Self::PlayStation => &["ps", "ps1", "psx", "playstation"],
            Self::SuperFamicom => &["sfc", "snes", "super famicom"],
        }
    }

    /// All 12 platform variants, in card-folder order.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.folder_name())
    }
}

/// Returns true if the file name carries a recognized image extension
/// (case-insensitive).
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from a folder name or alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &platform in ALL_PLATFORMS {
            if platform.folder_name().to_lowercase() == lower {
                return Ok(platform);
            }
            for alias in platform.aliases() {
                if *alias == lower {
                    return Ok(platform);
                }
            }
        }
        Err(PlatformParseError(s.to_string()))
    }
}
