//! Board and thread download jobs.

use std::path::Path;

use futures::TryStreamExt;

use crate::api::BoardClient;
use crate::config::{validate_board, Config};
use crate::download::file::{download_file, ChecksumStatus, DownloadOutcome, FetchOptions};
use crate::download::pages::board_threads;
use crate::download::state::JobStats;
use crate::download::thread::fetch_thread;
use crate::error::Result;
use crate::fs::{board_dir, ensure_dir, thread_dir};
use crate::output::{print_error, print_warning, ProgressObserver};

/// Download every thread listed on a board.
///
/// A failed listing page or thread document aborts the job, as does a
/// kept file entry that cannot be read.
pub async fn download_board<O>(
    client: &BoardClient,
    config: &Config,
    board: &str,
    observer: &mut O,
) -> Result<JobStats>
where
    O: ProgressObserver + ?Sized,
{
    validate_board(board)?;
    let base = config.download_directory();
    ensure_dir(&board_dir(&base, board))?;

    let mut stats = JobStats::default();
    let threads = board_threads(client, board, config.options.page_count);
    futures::pin_mut!(threads);

    while let Some(thread) = threads.try_next().await? {
        tracing::info!(
            "Downloading {} ({}) from page {}",
            thread.numeric_id,
            thread.position,
            thread.page
        );
        download_thread_into(client, config, &base, board, thread.numeric_id, observer, &mut stats)
            .await?;
    }

    tracing::info!(
        "Board {} complete: {} files from {} threads",
        board,
        stats.files_written,
        stats.threads_processed
    );

    Ok(stats)
}

/// Download the files of a single thread.
pub async fn download_thread<O>(
    client: &BoardClient,
    config: &Config,
    board: &str,
    thread_id: u64,
    observer: &mut O,
) -> Result<JobStats>
where
    O: ProgressObserver + ?Sized,
{
    validate_board(board)?;
    let base = config.download_directory();
    ensure_dir(&board_dir(&base, board))?;

    let mut stats = JobStats::default();
    download_thread_into(client, config, &base, board, thread_id, observer, &mut stats).await?;

    tracing::info!(
        "Thread {}/{} complete: {} files",
        board,
        thread_id,
        stats.files_written
    );

    Ok(stats)
}

async fn download_thread_into<O>(
    client: &BoardClient,
    config: &Config,
    base: &Path,
    board: &str,
    thread_id: u64,
    observer: &mut O,
    stats: &mut JobStats,
) -> Result<()>
where
    O: ProgressObserver + ?Sized,
{
    let out_dir = thread_dir(base, board, thread_id);
    ensure_dir(&out_dir)?;

    let document = fetch_thread(client, board, thread_id).await?;
    let options = FetchOptions::from(config);

    for file in document.files(&config.options.ignored_types) {
        let file = file?;
        let status = file.status();
        let outcome = download_file(
            client,
            &file.descriptor,
            &out_dir,
            Some(&status),
            &options,
            observer,
        )
        .await;

        report_outcome(&outcome);
        stats.record(&outcome);
    }

    stats.increment_threads();
    Ok(())
}

fn report_outcome(outcome: &DownloadOutcome) {
    match outcome {
        DownloadOutcome::Written {
            path,
            checksum: ChecksumStatus::Mismatch { actual },
            ..
        } => {
            print_warning(&format!(
                "Checksum mismatch for {} (got {})",
                path.display(),
                actual
            ));
        }
        DownloadOutcome::Written { .. } => {}
        DownloadOutcome::OpenFailed { error, .. } => print_error(&error.to_string()),
        DownloadOutcome::StreamFailed { path, error } => {
            print_error(&format!("Download of {} failed: {}", path.display(), error));
            tracing::warn!("Skipping {}", path.display());
        }
    }
}
