//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print an error and every source below it, one per line.
pub fn print_error_chain(error: &dyn std::error::Error) {
    print_error(&error.to_string());
    let mut source = error.source();
    while let Some(cause) = source {
        print_error(&format!("  caused by: {}", cause));
        source = cause.source();
    }
}

/// Print the welcome banner and usage lines.
pub fn print_banner() {
    println!("{}", style("Welcome to dvach-downloader!").cyan().bold());
    println!("Type board name as 'name' to download all threads from a board");
    println!("Type thread as 'board/thread' to download one thread");
    println!("Type 'exit' to exit");
}

/// Print configuration summary.
pub fn print_config_summary(
    host: &str,
    download_dir: &str,
    pages: u32,
    ignored: &[u32],
    progress: &str,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Host: {}", host);
    println!("  Directory: {}", download_dir);
    println!("  Listing pages: {}", pages);
    println!(
        "  Ignored types: {}",
        ignored
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Progress: {}", progress);
    println!();
}
