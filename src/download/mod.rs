//! Download module for board and thread downloading.
//!
//! This module provides:
//! - Board listing pagination
//! - Thread document fetching
//! - Single file streaming
//! - Board and thread jobs
//! - Download statistics

pub mod file;
pub mod job;
pub mod pages;
pub mod state;
pub mod thread;

pub use file::{download_file, ChecksumStatus, DownloadOutcome, FetchOptions};
pub use job::{download_board, download_thread};
pub use pages::board_threads;
pub use state::{JobStats, SessionStats};
pub use thread::fetch_thread;
