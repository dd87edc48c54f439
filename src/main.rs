//! dvach-downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dvach_downloader::{
    cli::{run_batch, run_interactive, Args, Session},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_session_stats,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = match Config::load_optional(&args.config)? {
        Some(config) => config,
        None => {
            print_warning(&format!(
                "Configuration file not found: {}",
                args.config.display()
            ));
            print_info("Using default configuration");
            Config::default()
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let ignored: Vec<u32> = config.options.ignored_types.iter().collect();
    let download_dir = config.download_directory();

    let progress = config.options.progress.to_string();
    let mut session = Session::new(config)?;
    let batch = !args.targets.is_empty();

    if !batch {
        print_banner();
        print_config_summary(
            &session.config().site.host,
            &download_dir.display().to_string(),
            session.config().options.page_count,
            &ignored,
            &progress,
        );
        run_interactive(&mut session).await?;
    } else {
        run_batch(&mut session, &args.targets).await;
    }

    // Print session statistics
    print_session_stats(session.stats());

    if batch && session.stats().jobs_failed > 0 {
        print_warning(&format!("{} job(s) failed", session.stats().jobs_failed));
        return Ok(exit_codes::JOB_FAILED);
    }

    Ok(exit_codes::SUCCESS)
}
