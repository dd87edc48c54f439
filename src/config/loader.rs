//! Configuration structures and loading logic.

use crate::config::filter::FileTypeFilter;
use crate::config::modes::ProgressMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Remote site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host every request path is appended to.
    #[serde(default = "default_host")]
    pub host: String,

    /// User agent sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Whole-request timeout. Unset leaves the transport default in place.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Number of listing pages walked for a board job.
    #[serde(default = "default_page_count")]
    pub page_count: u32,

    /// File type codes that are never downloaded.
    #[serde(default)]
    pub ignored_types: FileTypeFilter,

    /// Largest piece written (and reported) per progress step.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// How transfer progress is displayed.
    #[serde(default)]
    pub progress: ProgressMode,

    /// Compare each downloaded file's MD5 against the advertised hash.
    #[serde(default)]
    pub verify_checksums: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            page_count: default_page_count(),
            ignored_types: FileTypeFilter::default(),
            chunk_size: default_chunk_size(),
            progress: ProgressMode::default(),
            verify_checksums: false,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user_agent: None,
            timeout_seconds: None,
        }
    }
}

fn default_host() -> String {
    "https://2ch.hk".to_string()
}

fn default_page_count() -> u32 {
    9
}

fn default_chunk_size() -> usize {
    16 * 1024
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists, `None` otherwise.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Configured request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.site.timeout_seconds.map(Duration::from_secs)
    }
}
