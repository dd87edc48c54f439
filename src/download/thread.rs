//! Thread document fetching.

use crate::api::{BoardClient, ThreadDocument};
use crate::error::Result;

/// Fetch a thread document with a single request.
///
/// Walk its files with [`ThreadDocument::files`].
pub async fn fetch_thread(
    client: &BoardClient,
    board: &str,
    thread_id: u64,
) -> Result<ThreadDocument> {
    tracing::info!("Getting {}", client.thread_url(board, thread_id));

    let document = client.get_thread(board, thread_id).await?;
    tracing::debug!(
        "Thread {} has {} attached files",
        thread_id,
        document.total_files()
    );

    Ok(document)
}
