//! dvach-downloader - download media files from imageboard threads
//!
//! This library walks a board's listing pages, enumerates the files attached
//! to each thread and streams them to disk one at a time.
//!
//! # Features
//!
//! - Download every thread listed on a board
//! - Download a single thread
//! - Content-addressed file names (`<md5> <name>`)
//! - Configurable ignored file types (stickers by default)
//! - Pluggable progress reporting
//! - Optional MD5 verification
//!
//! # Example
//!
//! ```no_run
//! use dvach_downloader::{download_thread, BoardClient, Config};
//! use dvach_downloader::output::NoProgress;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = BoardClient::new(&config)?;
//!
//!     let stats = download_thread(&client, &config, "b", 123456, &mut NoProgress).await?;
//!     println!("{} files", stats.files_written);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{BoardClient, FileDescriptor, ThreadDocument, ThreadReference};
pub use config::{Config, FileTypeFilter, ProgressMode};
pub use download::{
    board_threads, download_board, download_file, download_thread, fetch_thread,
    DownloadOutcome, JobStats, SessionStats,
};
pub use error::{Error, Result};
