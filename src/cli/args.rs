//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ProgressMode};

/// Imageboard thread media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "dvach-downloader",
    version,
    about = "Download media files from imageboard threads",
    long_about = "Downloads every attached file of a thread, or of every thread on a board.\n\n\
                  Without targets an interactive prompt reads 'board' or 'board/thread' lines."
)]
pub struct Args {
    /// Targets to download ('board' or 'board/thread'), then exit.
    pub targets: Vec<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "dvach.toml")]
    pub config: PathBuf,

    /// Site to download from, e.g. https://2ch.hk
    #[arg(long, env = "DVACH_HOST")]
    pub host: Option<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Number of listing pages walked for a board.
    #[arg(long)]
    pub pages: Option<u32>,

    /// File type code to skip. May be repeated; replaces the configured set.
    #[arg(long = "ignore-type")]
    pub ignore_types: Vec<u32>,

    /// How transfer progress is shown.
    #[arg(long, value_enum)]
    pub progress: Option<ProgressModeArg>,

    /// Verify each file's MD5 against the advertised hash.
    #[arg(long)]
    pub verify: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI progress mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressModeArg {
    /// Status line rewritten in place.
    Line,
    /// Progress bar.
    Bar,
    /// No progress output.
    Quiet,
}

impl From<ProgressModeArg> for ProgressMode {
    fn from(arg: ProgressModeArg) -> Self {
        match arg {
            ProgressModeArg::Line => ProgressMode::Line,
            ProgressModeArg::Bar => ProgressMode::Bar,
            ProgressModeArg::Quiet => ProgressMode::Quiet,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.site.host = host.clone();
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(pages) = self.pages {
            config.options.page_count = pages;
        }

        if !self.ignore_types.is_empty() {
            config.options.ignored_types = self.ignore_types.iter().copied().collect();
        }

        if let Some(progress) = self.progress {
            config.options.progress = progress.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.verify {
            config.options.verify_checksums = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_alone() {
        let args = Args::parse_from(["dvach-downloader"]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert!(args.targets.is_empty());
        assert_eq!(args.config, PathBuf::from("dvach.toml"));
        assert_eq!(config.options.page_count, 9);
        assert!(config.options.ignored_types.is_ignored(100));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "dvach-downloader",
            "--host",
            "http://localhost:9000",
            "-d",
            "/tmp/out",
            "--pages",
            "2",
            "--ignore-type",
            "6",
            "--ignore-type",
            "7",
            "--progress",
            "bar",
            "--verify",
            "b",
            "po/42",
        ]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(args.targets, vec!["b".to_string(), "po/42".to_string()]);
        assert_eq!(config.site.host, "http://localhost:9000");
        assert_eq!(config.download_directory(), PathBuf::from("/tmp/out"));
        assert_eq!(config.options.page_count, 2);
        assert!(!config.options.ignored_types.is_ignored(100));
        assert!(config.options.ignored_types.is_ignored(6));
        assert!(config.options.ignored_types.is_ignored(7));
        assert_eq!(config.options.progress, ProgressMode::Bar);
        assert!(config.options.verify_checksums);
    }
}
