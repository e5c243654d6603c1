//! Simulated upload ticker
//!
//! A background thread advances the upload by 10% per step and reports over a
//! channel; the UI thread drains the channel on each tick. Cancelling sets the
//! shared flag and drops the receiver, so nothing reaches the UI afterwards.

use crate::model::upload::{UploadJob, UploadMessage, UploadProgress, UploadStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const PROGRESS_INCREMENT: u8 = 10;

/// Pause between reaching 100% and reporting completion
const DEFAULT_SETTLE: Duration = Duration::from_millis(500);

pub struct UploadRunner {
    job: Option<UploadJob>,
    step: Duration,
    settle: Duration,
}

impl Default for UploadRunner {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

impl UploadRunner {
    pub fn new(step: Duration) -> Self {
        Self {
            job: None,
            step,
            settle: DEFAULT_SETTLE,
        }
    }

    /// Override the completion delay
    #[cfg(test)]
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }

    /// Time since the current upload started
    pub fn elapsed(&self) -> Option<Duration> {
        self.job.as_ref().map(|j| j.start_instant.elapsed())
    }

    /// Start a new upload, cancelling any previous one
    pub fn start(&mut self, progress: &mut UploadProgress) {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let (step, settle) = (self.step, self.settle);

        thread::spawn(move || {
            Self::run_ticker(step, settle, &flag, tx);
        });

        self.job = Some(UploadJob {
            receiver: rx,
            cancelled,
            start_instant: Instant::now(),
        });

        *progress = UploadProgress {
            status: UploadStatus::Uploading,
            percent: 0,
        };
    }

    /// Stop the current upload. No message is applied after this returns.
    pub fn cancel(&mut self) -> bool {
        match self.job.take() {
            Some(job) => {
                job.cancelled.store(true, Ordering::SeqCst);
                true
            }
            None => false,
        }
    }

    /// Apply pending messages to `progress`, returns true if anything changed
    pub fn poll(&mut self, progress: &mut UploadProgress) -> bool {
        let Some(ref job) = self.job else {
            return false;
        };

        let mut had_updates = false;
        let mut finished = false;

        loop {
            match job.receiver.try_recv() {
                Ok(UploadMessage::Progress(percent)) => {
                    had_updates = true;
                    progress.percent = percent.min(100);
                }
                Ok(UploadMessage::Completed) => {
                    had_updates = true;
                    progress.percent = 100;
                    progress.status = UploadStatus::Completed;
                    finished = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.job = None;
        }

        had_updates
    }

    fn run_ticker(step: Duration, settle: Duration, cancelled: &AtomicBool, tx: Sender<UploadMessage>) {
        let mut percent = 0u8;
        while percent < 100 {
            thread::sleep(step);
            if cancelled.load(Ordering::SeqCst) {
                return;
            }
            percent = percent.saturating_add(PROGRESS_INCREMENT).min(100);
            if tx.send(UploadMessage::Progress(percent)).is_err() {
                return;
            }
        }

        thread::sleep(settle);
        if cancelled.load(Ordering::SeqCst) {
            return;
        }
        let _ = tx.send(UploadMessage::Completed);
    }
}

impl Drop for UploadRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_runner() -> UploadRunner {
        UploadRunner::new(Duration::from_millis(1)).with_settle(Duration::from_millis(1))
    }

    fn poll_until_done(runner: &mut UploadRunner, progress: &mut UploadProgress) -> Vec<u8> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = Vec::new();
        while runner.is_active() && Instant::now() < deadline {
            if runner.poll(progress) {
                seen.push(progress.percent);
            }
            thread::sleep(Duration::from_millis(1));
        }
        seen
    }

    #[test]
    fn test_upload_runs_to_completion() {
        let mut runner = fast_runner();
        let mut progress = UploadProgress::default();

        runner.start(&mut progress);
        assert!(progress.is_uploading());
        assert_eq!(progress.percent, 0);

        let seen = poll_until_done(&mut runner, &mut progress);

        assert_eq!(progress.status, UploadStatus::Completed);
        assert_eq!(progress.percent, 100);
        assert!(!runner.is_active());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_cancel_stops_all_mutation() {
        let mut runner = UploadRunner::new(Duration::from_millis(5));
        let mut progress = UploadProgress::default();

        runner.start(&mut progress);
        thread::sleep(Duration::from_millis(20));
        runner.poll(&mut progress);

        assert!(runner.cancel());
        let snapshot = progress;

        thread::sleep(Duration::from_millis(100));
        assert!(!runner.poll(&mut progress));
        assert_eq!(progress, snapshot);
        assert!(!runner.is_active());
    }

    #[test]
    fn test_cancel_without_job() {
        let mut runner = fast_runner();
        assert!(!runner.cancel());
        assert!(runner.elapsed().is_none());
    }

    #[test]
    fn test_restart_replaces_previous_job() {
        let mut runner = UploadRunner::new(Duration::from_millis(5));
        let mut progress = UploadProgress::default();

        runner.start(&mut progress);
        thread::sleep(Duration::from_millis(20));
        runner.poll(&mut progress);

        runner.start(&mut progress);
        assert_eq!(progress.percent, 0);
        assert!(runner.is_active());
    }
}
