//! Board listing pagination.

use futures::stream::{self, Stream, TryStreamExt};

use crate::api::{BoardClient, PageId, ThreadReference};
use crate::error::{Error, Result};

/// Stream the threads of a board, page by page.
///
/// Pages `1..=page_count` are requested in order, one request each. The
/// stream ends after the last page or right after the first failed one.
pub fn board_threads<'a>(
    client: &'a BoardClient,
    board: &'a str,
    page_count: u32,
) -> impl Stream<Item = Result<ThreadReference>> + 'a {
    stream::try_unfold(1u32, move |page| async move {
        if page > page_count {
            return Ok(None);
        }
        fetch_page(client, board, page)
            .await
            .map(|refs| Some((refs, page + 1)))
    })
    .map_ok(|refs| stream::iter(refs.into_iter().map(Ok::<_, Error>)))
    .try_flatten()
}

async fn fetch_page(
    client: &BoardClient,
    board: &str,
    page: u32,
) -> Result<Vec<ThreadReference>> {
    let page_id = PageId::from_page_number(page);
    tracing::info!("Getting {}", client.listing_url(board, page_id));

    let listing = client.get_listing_page(board, page_id).await?;
    tracing::debug!("Page {} lists {} threads", page_id, listing.threads.len());

    Ok(listing.thread_refs(page_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Position;
    use crate::config::Config;
    use futures::StreamExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BoardClient {
        let mut config = Config::default();
        config.site.host = server.uri();
        BoardClient::new(&config).unwrap()
    }

    fn listing(ids: &[u64]) -> serde_json::Value {
        let threads: Vec<_> = ids
            .iter()
            .map(|id| serde_json::json!({ "thread_num": id }))
            .collect();
        serde_json::json!({ "threads": threads })
    }

    async fn mount_page(server: &MockServer, page: &str, ids: &[u64]) {
        Mock::given(method("GET"))
            .and(path(format!("/b/{}.json", page)))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing(ids)))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_pages_in_order_one_request_each() {
        let server = MockServer::start().await;
        mount_page(&server, "index", &[11, 12]).await;
        mount_page(&server, "2", &[]).await;
        mount_page(&server, "3", &[31, 32, 33]).await;

        let client = client_for(&server);
        let threads: Vec<ThreadReference> = board_threads(&client, "b", 3)
            .try_collect()
            .await
            .unwrap();

        let ids: Vec<_> = threads.iter().map(|t| t.numeric_id).collect();
        assert_eq!(ids, vec![11, 12, 31, 32, 33]);
        assert_eq!(threads[1].position, Position::new(2, 2));
        assert_eq!(threads[2].position, Position::new(1, 3));
        assert_eq!(threads[2].page, PageId::Number(3));
        // Mock expectations verify one request per page on drop.
    }

    #[tokio::test]
    async fn test_stops_at_page_bound() {
        let server = MockServer::start().await;
        mount_page(&server, "index", &[1]).await;
        mount_page(&server, "2", &[2]).await;
        Mock::given(method("GET"))
            .and(path("/b/3.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing(&[3])))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let count = board_threads(&client, "b", 2).count().await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_failed_page_ends_stream() {
        let server = MockServer::start().await;
        mount_page(&server, "index", &[1, 2]).await;
        Mock::given(method("GET"))
            .and(path("/b/2.json"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b/3.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing(&[3])))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let items: Vec<Result<ThreadReference>> = board_threads(&client, "b", 3).collect().await;

        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].is_ok());
        assert!(matches!(
            items[2],
            Err(Error::HttpStatus { status: 500, .. })
        ));
    }
}
