//! Reconciliation engine for the romcard tool.
//!
//! A run is a single synchronous pass: per-platform reconciliation
//! (sanitize, image association, duplicate/orphan pruning, filelist
//! regeneration) followed by catalog-wide synchronization of
//! `allfiles.lst` and the favorites/recent lists. Dry run and execute
//! make identical decisions; only the filesystem writes differ.

pub mod catalog;
pub mod error;
pub mod fsops;
pub mod matcher;
pub mod progress;
pub mod reconcile;
pub mod scanner;
pub mod settings;
pub mod store;
pub mod sync;

pub use error::SyncError;
pub use fsops::FileOps;
pub use progress::SyncEvent;
pub use reconcile::{PlatformReport, PlatformStatus};
pub use romcard_core::{Platform, layout};
pub use sync::{SyncOptions, SyncReport, sync_card};
