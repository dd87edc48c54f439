//! Download statistics tracking.

use crate::download::file::{ChecksumStatus, DownloadOutcome};

/// Per-job statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JobStats {
    pub threads_processed: u64,
    pub files_written: u64,
    pub bytes_written: u64,
    pub open_failures: u64,
    pub stream_failures: u64,
    pub checksum_mismatches: u64,
}

impl JobStats {
    /// Count the outcome of one download.
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Written {
                bytes, checksum, ..
            } => {
                self.files_written += 1;
                self.bytes_written += bytes;
                if matches!(checksum, ChecksumStatus::Mismatch { .. }) {
                    self.checksum_mismatches += 1;
                }
            }
            DownloadOutcome::OpenFailed { .. } => self.open_failures += 1,
            DownloadOutcome::StreamFailed { .. } => self.stream_failures += 1,
        }
    }

    pub fn increment_threads(&mut self) {
        self.threads_processed += 1;
    }

    /// Files that were not written.
    pub fn failed(&self) -> u64 {
        self.open_failures + self.stream_failures
    }
}

/// Statistics across every job of a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub jobs_completed: u64,
    pub jobs_failed: u64,
    pub files_written: u64,
    pub files_failed: u64,
    pub bytes_written: u64,
}

impl SessionStats {
    /// Add statistics from a finished job.
    pub fn add_job_stats(&mut self, stats: &JobStats) {
        self.jobs_completed += 1;
        self.files_written += stats.files_written;
        self.files_failed += stats.failed();
        self.bytes_written += stats.bytes_written;
    }

    /// Mark a job as failed or abandoned.
    pub fn mark_job_failed(&mut self) {
        self.jobs_failed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_record_outcomes() {
        let mut stats = JobStats::default();

        stats.record(&DownloadOutcome::Written {
            path: PathBuf::from("a"),
            bytes: 10,
            checksum: ChecksumStatus::NotChecked,
        });
        stats.record(&DownloadOutcome::Written {
            path: PathBuf::from("b"),
            bytes: 5,
            checksum: ChecksumStatus::Mismatch {
                actual: "00".into(),
            },
        });
        stats.record(&DownloadOutcome::OpenFailed {
            path: PathBuf::from("c"),
            error: Error::InvalidFilename("c".into()),
        });
        stats.record(&DownloadOutcome::StreamFailed {
            path: PathBuf::from("d"),
            error: Error::Stream("reset".into()),
        });

        assert_eq!(stats.files_written, 2);
        assert_eq!(stats.bytes_written, 15);
        assert_eq!(stats.checksum_mismatches, 1);
        assert_eq!(stats.failed(), 2);
    }

    #[test]
    fn test_session_totals() {
        let mut session = SessionStats::default();
        let job = JobStats {
            files_written: 3,
            bytes_written: 300,
            stream_failures: 1,
            ..Default::default()
        };

        session.add_job_stats(&job);
        session.add_job_stats(&job);
        session.mark_job_failed();

        assert_eq!(session.jobs_completed, 2);
        assert_eq!(session.jobs_failed, 1);
        assert_eq!(session.files_written, 6);
        assert_eq!(session.files_failed, 2);
        assert_eq!(session.bytes_written, 600);
    }
}
