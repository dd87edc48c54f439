//! Command dispatch for a download session.

use crate::api::BoardClient;
use crate::cli::command::Command;
use crate::config::Config;
use crate::download::{download_board, download_thread, JobStats, SessionStats};
use crate::error::{Error, Result};
use crate::output::{observer_for, ProgressObserver};

/// What executing one command produced.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The job ran to the end. Individual files may still have failed.
    Completed { label: String, stats: JobStats },
    /// Discovery failed and the job was aborted.
    Failed { label: String, error: Error },
    /// The input was not a recognised command.
    Rejected(String),
    /// Nothing to do.
    Skipped,
    /// The user asked to leave.
    Exit,
}

/// Holds everything a sequence of jobs shares.
pub struct Session {
    client: BoardClient,
    config: Config,
    observer: Box<dyn ProgressObserver + Send>,
    stats: SessionStats,
}

impl Session {
    /// Create a session with the observer chosen by the configuration.
    pub fn new(config: Config) -> Result<Self> {
        let observer = observer_for(config.options.progress);
        Self::with_observer(config, observer)
    }

    pub fn with_observer(
        config: Config,
        observer: Box<dyn ProgressObserver + Send>,
    ) -> Result<Self> {
        let client = BoardClient::new(&config)?;
        Ok(Self {
            client,
            config,
            observer,
            stats: SessionStats::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Count a job abandoned before it returned.
    pub fn mark_interrupted(&mut self) {
        self.stats.mark_job_failed();
    }

    /// Run one command to completion.
    pub async fn execute(&mut self, command: Command) -> CommandOutcome {
        let label = command.to_string();

        let result = match command {
            Command::Exit => return CommandOutcome::Exit,
            Command::Empty => return CommandOutcome::Skipped,
            Command::Invalid(line) => return CommandOutcome::Rejected(line),
            Command::Board(board) => {
                download_board(&self.client, &self.config, &board, self.observer.as_mut()).await
            }
            Command::Thread { board, thread_id } => {
                download_thread(
                    &self.client,
                    &self.config,
                    &board,
                    thread_id,
                    self.observer.as_mut(),
                )
                .await
            }
        };

        match result {
            Ok(stats) => {
                self.stats.add_job_stats(&stats);
                CommandOutcome::Completed { label, stats }
            }
            Err(error) => {
                self.stats.mark_job_failed();
                CommandOutcome::Failed { label, error }
            }
        }
    }
}
