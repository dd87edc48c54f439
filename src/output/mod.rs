//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress observers
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    print_banner, print_config_summary, print_error, print_error_chain, print_info,
    print_success, print_warning,
};
pub use self::progress::{
    observer_for, render_progress_line, BarProgress, LineProgress, NoProgress, ProgressObserver,
    ProgressState,
};
pub use self::stats::{print_job_stats, print_session_stats};
