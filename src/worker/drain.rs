//! Fixed-delay loop moving jobs from the overflow buffer back into the pool.

use std::{sync::Arc, time::Duration};

use tracing::{debug, error, info};

use crate::worker::{overflow::OverflowBuffer, pool::TrackerPool, TrackingJob};

/// Result of one drain tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainReport {
    /// Jobs handed to the pool.
    pub drained: usize,
    /// Jobs still in the overflow buffer after the tick.
    pub remaining: usize,
    /// A rejected job could not be put back and was dropped.
    pub requeue_failed: bool,
}

/// Resubmits overflowed jobs in batches.
pub struct OverflowDrainer {
    buffer: Arc<OverflowBuffer>,
    pool: TrackerPool,
    batch_size: usize,
}

impl OverflowDrainer {
    pub fn new(buffer: Arc<OverflowBuffer>, pool: TrackerPool, batch_size: usize) -> Self {
        Self {
            buffer,
            pool,
            batch_size: batch_size.max(1),
        }
    }

    /// Moves up to `batch_size` jobs from the buffer into the pool.
    ///
    /// Jobs are resubmitted with `execute`, never `submit`, so a rejected job cannot
    /// re-enter the buffer at the back. A rejected job is put back at the front and the
    /// tick stops, leaving the buffer in its original order.
    ///
    /// # Returns
    /// - `DrainReport` - Jobs moved, jobs left, and whether a job was lost on requeue
    pub fn drain_once(&self) -> DrainReport {
        let mut drained = 0;
        let mut requeue_failed = false;

        while drained < self.batch_size {
            let Some(job) = self.buffer.poll() else {
                break;
            };

            match self.pool.execute(job) {
                Ok(_) => drained += 1,
                Err(job) => {
                    requeue_failed = !self.hand_back(job);
                    break;
                }
            }
        }

        DrainReport {
            drained,
            remaining: self.buffer.len(),
            requeue_failed,
        }
    }

    /// Puts a rejected job back at the head of the buffer.
    ///
    /// Returns false when producers filled the freed slot in the meantime; the job is
    /// then dropped.
    fn hand_back(&self, job: TrackingJob) -> bool {
        match self.buffer.requeue_front(job) {
            Ok(_) => true,
            Err(job) => {
                error!(
                    steam_id = %job.steam_id,
                    "Overflow buffer refilled during drain; dropping tracking job"
                );
                false
            }
        }
    }

    /// Runs `drain_once` forever, sleeping `interval` between the end of one tick and
    /// the start of the next.
    pub async fn run(self, interval: Duration) {
        info!(
            batch_size = self.batch_size,
            interval_ms = interval.as_millis() as u64,
            "Started overflow drain loop"
        );

        loop {
            tokio::time::sleep(interval).await;

            if self.buffer.is_empty() {
                continue;
            }

            let report = self.drain_once();
            if report.drained > 0 {
                info!(
                    drained = report.drained,
                    remaining = report.remaining,
                    "Resubmitted overflowed tracking jobs"
                );
            } else {
                debug!(
                    remaining = report.remaining,
                    "Tracker pool still saturated; overflow drain deferred"
                );
            }
        }
    }
}
