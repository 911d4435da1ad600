//! Bounded FIFO holding jobs the worker pool rejected.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::worker::TrackingJob;

/// Bounded, thread-safe FIFO of tracking jobs.
///
/// The length never exceeds the capacity given at construction. Operations that would
/// exceed it hand the job back to the caller instead.
#[derive(Debug)]
pub struct OverflowBuffer {
    jobs: Mutex<VecDeque<TrackingJob>>,
    capacity: usize,
}

impl OverflowBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            jobs: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
        }
    }

    /// Appends a job at the back of the buffer.
    ///
    /// # Returns
    /// - `Ok(usize)` - Buffer length after the insert
    /// - `Err(TrackingJob)` - Buffer full, the job is handed back
    pub fn offer(&self, job: TrackingJob) -> Result<usize, TrackingJob> {
        let mut jobs = self.lock();
        if jobs.len() >= self.capacity {
            return Err(job);
        }
        jobs.push_back(job);
        Ok(jobs.len())
    }

    /// Removes the oldest job.
    pub fn poll(&self) -> Option<TrackingJob> {
        self.lock().pop_front()
    }

    /// Puts a job back at the front so it is the next one polled.
    ///
    /// Used when a drained job could not be resubmitted, keeping submission order.
    ///
    /// # Returns
    /// - `Ok(usize)` - Buffer length after the insert
    /// - `Err(TrackingJob)` - Buffer filled up in the meantime, the job is handed back
    pub fn requeue_front(&self, job: TrackingJob) -> Result<usize, TrackingJob> {
        let mut jobs = self.lock();
        if jobs.len() >= self.capacity {
            return Err(job);
        }
        jobs.push_front(job);
        Ok(jobs.len())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A panic while holding the lock cannot leave the deque half-modified, so a
    /// poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<TrackingJob>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
