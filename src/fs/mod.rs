//! Filesystem module.
//!
//! Provides:
//! - Board and thread directory layout
//! - Filename generation and sanitizing

pub mod naming;
pub mod paths;

pub use naming::{file_name_for, sanitize_filename};
pub use paths::{board_dir, ensure_dir, thread_dir};
