//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Upper bound for the listing page count.
const MAX_PAGE_COUNT: u32 = 100;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_host(&config.site.host)?;
    validate_page_count(config.options.page_count)?;
    validate_chunk_size(config.options.chunk_size)?;

    Ok(())
}

/// Validate the site host.
pub fn validate_host(host: &str) -> Result<()> {
    let url = Url::parse(host)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "host".to_string(),
            message: format!("Unsupported scheme '{}' (use http or https)", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(Error::ConfigValidation {
            field: "host".to_string(),
            message: format!("No host in '{}'", host),
        });
    }

    Ok(())
}

/// Validate the listing page count.
pub fn validate_page_count(page_count: u32) -> Result<()> {
    if page_count == 0 || page_count > MAX_PAGE_COUNT {
        return Err(Error::ConfigValidation {
            field: "page_count".to_string(),
            message: format!(
                "Page count must be between 1 and {} (got {})",
                MAX_PAGE_COUNT, page_count
            ),
        });
    }

    Ok(())
}

/// Validate the transfer chunk size.
pub fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::ConfigValidation {
            field: "chunk_size".to_string(),
            message: "Chunk size must be greater than zero".to_string(),
        });
    }

    Ok(())
}

/// Validate a board name: one or more word characters.
pub fn validate_board(board: &str) -> Result<()> {
    let board_pattern = Regex::new(r"^\w+$").map_err(|e| Error::Config(e.to_string()))?;

    if !board_pattern.is_match(board) {
        return Err(Error::ConfigValidation {
            field: "board".to_string(),
            message: format!("Invalid board name: '{}'", board),
        });
    }

    Ok(())
}
