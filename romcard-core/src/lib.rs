//! Core identity types for the romcard tool: the static platform table
//! and the on-card directory layout.

pub mod layout;
pub mod platform;

pub use platform::{Platform, PlatformParseError, is_image_name};
