//! Imageboard API module.
//!
//! This module provides:
//! - HTTP client for board listings, thread documents and file storage
//! - API response types

pub mod client;
pub mod types;

pub use client::BoardClient;
pub use types::*;
