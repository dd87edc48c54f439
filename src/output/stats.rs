//! Statistics reporting.

use console::style;

use crate::download::{JobStats, SessionStats};

/// Print statistics for a single job.
pub fn print_job_stats(label: &str, stats: &JobStats) {
    println!();
    println!("{}", style(format!("Statistics for {}:", label)).bold());
    println!("  Threads:  {}", stats.threads_processed);
    println!("  Files:    {} downloaded", stats.files_written);
    println!("  Bytes:    {}", stats.bytes_written);
    if stats.failed() > 0 {
        println!(
            "  Failed:   {} ({} open, {} stream)",
            style(stats.failed()).red(),
            stats.open_failures,
            stats.stream_failures
        );
    }
    if stats.checksum_mismatches > 0 {
        println!(
            "  Checksum mismatches: {}",
            style(stats.checksum_mismatches).yellow()
        );
    }
}

/// Print totals for the whole session.
pub fn print_session_stats(stats: &SessionStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Session Statistics:").bold());
    println!("  Jobs completed: {}", stats.jobs_completed);
    if stats.jobs_failed > 0 {
        println!("  Jobs failed:    {}", style(stats.jobs_failed).red());
    }
    println!("  Files:  {} downloaded", stats.files_written);
    println!("  Failed: {}", stats.files_failed);
    println!("  Bytes:  {}", stats.bytes_written);
    println!("{}", style("═".repeat(50)).dim());
}
