//! Configuration module for the dvach-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Progress display modes
//! - The ignored file type filter
//! - Configuration validation

pub mod filter;
pub mod loader;
pub mod modes;
pub mod validation;

pub use filter::{FileTypeFilter, STICKER_TYPE};
pub use loader::{Config, OptionsConfig, SiteConfig};
pub use modes::ProgressMode;
pub use validation::{validate_board, validate_config};
