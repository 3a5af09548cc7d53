//! romcard CLI
//!
//! Command-line interface for reconciling a retro handheld's SD card
//! against its sidecar metadata (per-platform `filelist.csv`, the global
//! `allfiles.lst`, and the favorites/recent lists).

use std::path::PathBuf;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romcard_lib::{PlatformStatus, SyncEvent, SyncOptions, SyncReport, settings, sync_card};

#[derive(Parser)]
#[command(name = "romcard")]
#[command(about = "Reconcile an SD card's game files against its metadata", long_about = None)]
struct Cli {
    /// Card root (defaults to the saved root, then the platform default)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Apply changes (default is a dry run that only reports)
    #[arg(short = 'x', long)]
    execute: bool,

    /// Save the resolved root to settings.toml for future runs
    #[arg(long)]
    save_root: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let root = settings::resolve_card_root(cli.root);

    if cli.save_root {
        match settings::save_card_root(&root) {
            Ok(()) => println!(
                "{} Saved card root to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                settings::settings_path()
                    .display()
                    .if_supports_color(Stdout, |t| t.cyan()),
            ),
            Err(e) => eprintln!(
                "{} Could not save card root: {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                e,
            ),
        }
    }

    println!(
        "Card root: {}",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if !cli.execute {
        println!(
            "{}",
            "Dry run: no files will be changed".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    let options = SyncOptions {
        dry_run: !cli.execute,
    };
    let report = match sync_card(&root, &options, &render_event) {
        Ok(report) => report,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            std::process::exit(1);
        }
    };

    print_summary(&report);

    if report.errors().next().is_some() {
        std::process::exit(1);
    }
}

/// Render one engine event as a console line.
///
/// Rename events for a platform arrive before its `PlatformStarted`
/// milestone, so every line carries its own `[FOLDER]` tag instead of
/// relying on a header.
fn render_event(event: SyncEvent) {
    match event {
        SyncEvent::PlatformStarted {
            platform,
            rom_count,
        } => {
            log::debug!("[{platform}] {rom_count} game files after sanitize");
        }
        SyncEvent::RomRenamed { platform, from, to }
        | SyncEvent::ImageRenamed { platform, from, to } => println!(
            "  {} {} {} {}",
            tag(&platform.to_string()),
            from.if_supports_color(Stdout, |t| t.dimmed()),
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            to.if_supports_color(Stdout, |t| t.bold()),
        ),
        SyncEvent::ImagesDirCreated { platform } => println!(
            "  {} {}",
            tag(&platform.to_string()),
            "created images/".if_supports_color(Stdout, |t| t.dimmed()),
        ),
        SyncEvent::ImageMoved {
            platform,
            image,
            target,
            score,
        } => println!(
            "  {} {} {} {} {}",
            tag(&platform.to_string()),
            image.if_supports_color(Stdout, |t| t.dimmed()),
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            format!("images/{target}").if_supports_color(Stdout, |t| t.bold()),
            format!("(score {score})").if_supports_color(Stdout, |t| t.dimmed()),
        ),
        SyncEvent::ImageUnmatched { platform, image } => println!(
            "  {} {} {} (no matching game file)",
            tag(&platform.to_string()),
            "?".if_supports_color(Stdout, |t| t.yellow()),
            image.if_supports_color(Stdout, |t| t.dimmed()),
        ),
        SyncEvent::DuplicateRemoved { platform, file } => println!(
            "  {} {} {} (zip archive kept)",
            tag(&platform.to_string()),
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            file,
        ),
        SyncEvent::OrphansPruned {
            platform,
            kept,
            removed,
        } => {
            if removed > 0 {
                println!(
                    "  {} {}",
                    tag(&platform.to_string()),
                    format!("pruned {removed} orphan images ({kept} kept)")
                        .if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
        SyncEvent::ImagesCleared { platform, removed } => println!(
            "  {} {}",
            tag(&platform.to_string()),
            format!("cleared images/ ({removed} files, no game files left)")
                .if_supports_color(Stdout, |t| t.dimmed()),
        ),
        SyncEvent::FilelistWritten { platform, entries } => println!(
            "  {} {} filelist.csv ({entries} entries)",
            tag(&platform.to_string()),
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
        SyncEvent::FilelistTruncated { platform } => println!(
            "  {} {}",
            tag(&platform.to_string()),
            "filelist.csv truncated".if_supports_color(Stdout, |t| t.dimmed()),
        ),
        SyncEvent::CatalogWritten { entries, previous } => println!(
            "  {} allfiles.lst: {entries} entries (was {previous})",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
        SyncEvent::ListFiltered {
            name,
            kept,
            removed,
        } => println!(
            "  {} {name}: {kept} kept, {removed} removed",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
        SyncEvent::OpFailed { message } => eprintln!(
            "  {} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            message,
        ),
    }
}

fn tag(folder: &str) -> String {
    format!(
        "{}",
        format!("[{folder}]").if_supports_color(Stdout, |t| t.dimmed()),
    )
}

/// Print the per-platform summary table and any accumulated errors.
fn print_summary(report: &SyncReport) {
    println!();
    println!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));

    for p in &report.platforms {
        let label = p.status.label();
        let styled = match p.status {
            PlatformStatus::Ok => {
                format!("{}", label.if_supports_color(Stdout, |t| t.green()))
            }
            PlatformStatus::Mismatch | PlatformStatus::NoRoms => {
                format!("{}", label.if_supports_color(Stdout, |t| t.yellow()))
            }
            PlatformStatus::Empty => {
                format!("{}", label.if_supports_color(Stdout, |t| t.dimmed()))
            }
        };
        println!(
            "  {:<6} {} ROMs={:<4} CSV={:<4} Img={:<4} [{}]",
            p.platform.folder_name(),
            format!("{:<26}", p.platform.display_name())
                .if_supports_color(Stdout, |t| t.dimmed()),
            p.rom_count,
            p.csv_count,
            p.image_count,
            styled,
        );
    }

    if report.platforms.is_empty() {
        println!(
            "  {}",
            "No platform folders found on the card".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let errors: Vec<&str> = report.errors().collect();
    if !errors.is_empty() {
        println!();
        for error in errors {
            println!(
                "  {} {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                error,
            );
        }
    }

    if report.dry_run {
        println!();
        println!(
            "{}",
            "Dry run: run again with --execute to apply".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
