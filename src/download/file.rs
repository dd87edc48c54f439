//! Single file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use md5::{Digest, Md5};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::{BoardClient, FileDescriptor};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::file_name_for;
use crate::output::{ProgressObserver, ProgressState};

/// Transfer settings for file downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Largest piece written per progress step.
    pub chunk_size: usize,
    pub verify_checksum: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            chunk_size: 16 * 1024,
            verify_checksum: false,
        }
    }
}

impl From<&Config> for FetchOptions {
    fn from(config: &Config) -> Self {
        Self {
            chunk_size: config.options.chunk_size,
            verify_checksum: config.options.verify_checksums,
        }
    }
}

/// Result of comparing the received bytes against the advertised hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumStatus {
    NotChecked,
    Match,
    Mismatch { actual: String },
}

/// What happened to a single download.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// The whole body was written.
    Written {
        path: PathBuf,
        bytes: u64,
        checksum: ChecksumStatus,
    },
    /// The destination could not be created. Nothing was requested.
    OpenFailed { path: PathBuf, error: Error },
    /// The request or transfer failed. A partial file may remain.
    StreamFailed { path: PathBuf, error: Error },
}

/// Download a file into `dest_dir` as `<hash> <name>`.
///
/// Never fails: every problem is reported through the returned outcome.
pub async fn download_file<O>(
    client: &BoardClient,
    file: &FileDescriptor,
    dest_dir: &Path,
    status: Option<&str>,
    options: &FetchOptions,
    observer: &mut O,
) -> DownloadOutcome
where
    O: ProgressObserver + ?Sized,
{
    let path = match file_name_for(file) {
        Ok(name) => dest_dir.join(name),
        Err(error) => {
            return DownloadOutcome::OpenFailed {
                path: dest_dir.to_path_buf(),
                error,
            }
        }
    };

    // Two uploads sharing a hash and name map to the same path.
    if path.exists() {
        tracing::warn!("Overwriting existing file {}", path.display());
    }

    let mut output = match File::create(&path).await {
        Ok(output) => output,
        Err(source) => {
            return DownloadOutcome::OpenFailed {
                error: Error::FileOpen {
                    path: path.clone(),
                    source,
                },
                path,
            }
        }
    };

    observer.on_start(&file.remote_path, status);

    match stream_to_file(client, file, &mut output, options, observer).await {
        Ok((state, checksum)) => {
            observer.on_finish(&state);
            DownloadOutcome::Written {
                path,
                bytes: state.bytes_downloaded,
                checksum,
            }
        }
        Err(error) => {
            observer.on_abort();
            DownloadOutcome::StreamFailed { path, error }
        }
    }
}

async fn stream_to_file<O>(
    client: &BoardClient,
    file: &FileDescriptor,
    output: &mut File,
    options: &FetchOptions,
    observer: &mut O,
) -> Result<(ProgressState, ChecksumStatus)>
where
    O: ProgressObserver + ?Sized,
{
    let response = client.download_file(&file.remote_path).await?;

    let mut state = ProgressState::new(response.content_length());
    let mut hasher = options.verify_checksum.then(Md5::new);
    let chunk_size = options.chunk_size.max(1);

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Stream(format!("{}: {}", file.remote_path, e)))?;

        for piece in chunk.chunks(chunk_size) {
            state.advance(piece.len());
            observer.on_progress(&state);

            output.write_all(piece).await?;
            output.flush().await?;

            if let Some(hasher) = hasher.as_mut() {
                hasher.update(piece);
            }
        }
    }

    let checksum = match hasher {
        None => ChecksumStatus::NotChecked,
        Some(hasher) => {
            let actual = format!("{:x}", hasher.finalize());
            if actual.eq_ignore_ascii_case(file.content_hash.trim()) {
                ChecksumStatus::Match
            } else {
                ChecksumStatus::Mismatch { actual }
            }
        }
    };

    Ok((state, checksum))
}
