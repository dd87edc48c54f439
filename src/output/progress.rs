//! Transfer progress tracking and display.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ProgressMode;

/// Width of the `=` bar in the status line.
const BAR_WIDTH: usize = 20;

/// Width the file label is padded or cut to.
const LABEL_WIDTH: usize = 35;

/// Byte counters for a single transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    pub bytes_downloaded: u64,
    /// Announced size, or 1 when the server sent none.
    pub expected_total: u64,
}

impl ProgressState {
    pub fn new(content_length: Option<u64>) -> Self {
        Self {
            bytes_downloaded: 0,
            expected_total: content_length.filter(|&len| len > 0).unwrap_or(1),
        }
    }

    pub fn advance(&mut self, bytes: usize) {
        self.bytes_downloaded += bytes as u64;
    }

    /// Share of the expected total received so far. May exceed 1.0.
    pub fn fraction(&self) -> f64 {
        self.bytes_downloaded as f64 / self.expected_total as f64
    }
}

/// Receives progress notifications from a transfer.
pub trait ProgressObserver {
    /// A transfer is about to start.
    fn on_start(&mut self, _label: &str, _status: Option<&str>) {}

    /// A piece was received.
    fn on_progress(&mut self, state: &ProgressState);

    /// The transfer completed.
    fn on_finish(&mut self, _state: &ProgressState) {}

    /// The transfer stopped before completing.
    fn on_abort(&mut self) {}
}

/// Ignores every notification.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _state: &ProgressState) {}
}

/// Rewrites a fixed-width status line in place.
pub struct LineProgress {
    term: Term,
    label: String,
    status: Option<String>,
    dirty: bool,
}

impl LineProgress {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            label: String::new(),
            status: None,
            dirty: false,
        }
    }

    fn end_line(&mut self) {
        if self.dirty {
            let _ = self.term.write_line("");
            self.dirty = false;
        }
    }
}

impl Default for LineProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LineProgress {
    fn on_start(&mut self, label: &str, status: Option<&str>) {
        self.label = label.to_string();
        self.status = status.map(str::to_string);
        self.dirty = false;
    }

    fn on_progress(&mut self, state: &ProgressState) {
        let line = render_progress_line(&self.label, state, self.status.as_deref());
        let _ = self
            .term
            .write_str(&format!("\r{} {}", style("INFO").cyan().bold(), line));
        let _ = self.term.flush();
        self.dirty = true;
    }

    fn on_finish(&mut self, _state: &ProgressState) {
        // Always terminate, even if nothing was drawn.
        let _ = self.term.write_line("");
        self.dirty = false;
    }

    fn on_abort(&mut self) {
        self.end_line();
    }
}

/// Shows an indicatif bar per transfer.
#[derive(Default)]
pub struct BarProgress {
    label: String,
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for BarProgress {
    fn on_start(&mut self, label: &str, status: Option<&str>) {
        self.label = match status {
            Some(status) => format!("{} [{}]", label, status),
            None => label.to_string(),
        };
        self.bar = None;
    }

    fn on_progress(&mut self, state: &ProgressState) {
        let label = &self.label;
        let bar = self.bar.get_or_insert_with(|| {
            let bar = create_download_bar(state.expected_total);
            bar.set_message(label.clone());
            bar
        });
        if state.bytes_downloaded > bar.length().unwrap_or(0) {
            bar.set_length(state.bytes_downloaded);
        }
        bar.set_position(state.bytes_downloaded);
    }

    fn on_finish(&mut self, _state: &ProgressState) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }

    fn on_abort(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}

/// Build the observer for a display mode.
pub fn observer_for(mode: ProgressMode) -> Box<dyn ProgressObserver + Send> {
    match mode {
        ProgressMode::Line => Box::new(LineProgress::new()),
        ProgressMode::Bar => Box::new(BarProgress::new()),
        ProgressMode::Quiet => Box::new(NoProgress),
    }
}

/// Create a progress bar for downloads.
pub fn create_download_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}

/// Render the status line: label, `=` bar, percentage and status.
pub fn render_progress_line(label: &str, state: &ProgressState, status: Option<&str>) -> String {
    let fraction = state.fraction();
    let filled = ((fraction * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    let status = status.map(|s| format!("[{}]", s)).unwrap_or_default();

    format!(
        "{:>width$}: [{:<bar$}] {:7.3}% {}",
        fit_label(label),
        "=".repeat(filled),
        fraction * 100.0,
        status,
        width = LABEL_WIDTH,
        bar = BAR_WIDTH,
    )
}

/// Keep the tail of labels longer than the label width.
fn fit_label(label: &str) -> String {
    let len = label.chars().count();
    if len <= LABEL_WIDTH {
        return label.to_string();
    }
    let tail: String = label.chars().skip(len - (LABEL_WIDTH - 3)).collect();
    format!("...{}", tail)
}
