//! Imageboard HTTP client.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::types::*;
use crate::config::validation::validate_host;
use crate::config::Config;
use crate::error::{Error, Result};

/// Client for the board's read-only JSON API and file storage.
pub struct BoardClient {
    client: Client,
    host: String,
}

impl BoardClient {
    /// Create a client from the site configuration.
    pub fn new(config: &Config) -> Result<Self> {
        validate_host(&config.site.host)?;

        let mut builder = Client::builder();
        if let Some(user_agent) = &config.site.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host: config.site.host.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a board listing page.
    pub fn listing_url(&self, board: &str, page: PageId) -> String {
        format!("{}/{}/{}.json", self.host, board, page)
    }

    /// URL of a thread document.
    pub fn thread_url(&self, board: &str, thread_id: u64) -> String {
        format!("{}/{}/res/{}.json", self.host, board, thread_id)
    }

    /// URL of an attached file.
    pub fn file_url(&self, remote_path: &str) -> String {
        format!("{}{}", self.host, remote_path)
    }

    /// Issue a GET and fail on a non-success status.
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Fetch and parse a JSON document.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        let text = response.text().await.map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("Response length: {} bytes", text.len());

        serde_json::from_str(&text).map_err(|source| Error::Parse {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch one page of a board listing.
    pub async fn get_listing_page(&self, board: &str, page: PageId) -> Result<ListingPage> {
        self.get_json(&self.listing_url(board, page)).await
    }

    /// Fetch a thread document.
    pub async fn get_thread(&self, board: &str, thread_id: u64) -> Result<ThreadDocument> {
        self.get_json(&self.thread_url(board, thread_id)).await
    }

    /// Start streaming an attached file.
    pub async fn download_file(&self, remote_path: &str) -> Result<Response> {
        self.get(&self.file_url(remote_path)).await
    }
}
