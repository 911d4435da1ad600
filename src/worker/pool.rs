//! Bounded worker pool for tracking jobs.
//!
//! Core workers live for the lifetime of the pool. A job goes straight to an idle core
//! worker if there is one, otherwise it waits in a bounded internal queue. When the queue
//! is full the pool starts short-lived surge workers up to `max_pool_size`; each one runs
//! the job it was started for and then helps empty the queue before exiting. Past that
//! the job is rejected and, for `submit`, offered to the overflow buffer.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use crate::{
    config::TrackerPoolConfig,
    worker::{overflow::OverflowBuffer, JobRunner, TrackingJob},
};

/// Where `execute` placed a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Handed directly to an idle core worker.
    IdleWorker,
    /// Waiting in the internal queue for the next free worker.
    Queued,
    /// Handed to a newly started surge worker.
    SurgeWorker,
}

/// Where `submit` placed a job, including the rejection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    IdleWorker,
    Queued,
    SurgeWorker,
    /// Pool saturated, job parked in the overflow buffer.
    Overflowed,
    /// Pool and overflow buffer both full, job discarded.
    Dropped,
}

impl From<Placement> for SubmitOutcome {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::IdleWorker => Self::IdleWorker,
            Placement::Queued => Self::Queued,
            Placement::SurgeWorker => Self::SurgeWorker,
        }
    }
}

/// Queue and idle workers, guarded together so a job is never queued while a core
/// worker sits idle and no worker goes idle while a job is queued.
struct PoolState {
    queue: VecDeque<TrackingJob>,
    /// One hand-off slot per idle core worker.
    idle: Vec<oneshot::Sender<TrackingJob>>,
}

/// State shared by every worker task.
struct WorkerShared {
    state: Mutex<PoolState>,
    runner: Arc<dyn JobRunner>,
    live_workers: AtomicUsize,
    active_jobs: AtomicUsize,
}

impl WorkerShared {
    /// No code path panics while holding the lock, so a poisoned state is still
    /// consistent.
    fn lock(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one job on its own task so a panic in the job body is contained.
    async fn run(&self, job: TrackingJob) {
        let steam_id = job.steam_id.clone();
        let runner = self.runner.clone();

        self.active_jobs.fetch_add(1, Ordering::SeqCst);
        let result = tokio::spawn(async move { runner.run(job).await }).await;
        self.active_jobs.fetch_sub(1, Ordering::SeqCst);

        match result {
            Ok(Ok(())) => debug!(steam_id = %steam_id, "Tracking job finished"),
            Ok(Err(e)) => error!(steam_id = %steam_id, error = %e, "Tracking job failed"),
            Err(e) => error!(steam_id = %steam_id, error = %e, "Tracking job panicked"),
        }
    }

    /// Takes the next queued job, or registers the calling core worker as idle.
    fn next_or_idle(&self) -> Result<TrackingJob, oneshot::Receiver<TrackingJob>> {
        let mut state = self.lock();
        match state.queue.pop_front() {
            Some(job) => Ok(job),
            None => {
                let (sender, receiver) = oneshot::channel();
                state.idle.push(sender);
                Err(receiver)
            }
        }
    }

    fn next_queued(&self) -> Option<TrackingJob> {
        self.lock().queue.pop_front()
    }
}

/// Handle to the tracker worker pool.
///
/// Cloning is cheap; all clones submit to the same workers. Core workers run until
/// the runtime shuts down.
#[derive(Clone)]
pub struct TrackerPool {
    shared: Arc<WorkerShared>,
    overflow: Arc<OverflowBuffer>,
    queue_capacity: usize,
    max_pool_size: usize,
}

impl TrackerPool {
    /// Starts the core workers and returns a handle to the pool.
    ///
    /// Every core worker starts idle, so the first `core_pool_size` jobs are handed
    /// out directly even before the worker tasks were first polled.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Arguments
    /// - `config` - Pool sizing; `core_pool_size`, `max_pool_size` and `queue_capacity`
    ///   are used here
    /// - `runner` - Job body executed by every worker
    /// - `overflow` - Buffer receiving jobs rejected by `submit`
    ///
    /// # Returns
    /// - `TrackerPool` - Handle for submitting jobs
    pub fn start(
        config: &TrackerPoolConfig,
        runner: Arc<dyn JobRunner>,
        overflow: Arc<OverflowBuffer>,
    ) -> Self {
        let core_pool_size = config.core_pool_size.max(1);
        let queue_capacity = config.queue_capacity.max(1);

        let shared = Arc::new(WorkerShared {
            state: Mutex::new(PoolState {
                queue: VecDeque::with_capacity(queue_capacity.min(1024)),
                idle: Vec::with_capacity(core_pool_size),
            }),
            runner,
            live_workers: AtomicUsize::new(core_pool_size),
            active_jobs: AtomicUsize::new(0),
        });

        for worker in 0..core_pool_size {
            let (sender, receiver) = oneshot::channel();
            shared.lock().idle.push(sender);
            tokio::spawn(core_worker(worker, shared.clone(), receiver));
        }

        info!(
            core_pool_size,
            max_pool_size = config.max_pool_size,
            queue_capacity,
            overflow_capacity = overflow.capacity(),
            "Started tracker pool"
        );

        Self {
            shared,
            overflow,
            queue_capacity,
            max_pool_size: config.max_pool_size.max(core_pool_size),
        }
    }

    /// Places a job in the pool without any rejection handling.
    ///
    /// An idle core worker takes the job first, then the internal queue, then a new
    /// surge worker.
    ///
    /// # Returns
    /// - `Ok(Placement)` - Job handed to a worker or queued
    /// - `Err(TrackingJob)` - Queue full and every worker slot taken, job handed back
    pub fn execute(&self, mut job: TrackingJob) -> Result<Placement, TrackingJob> {
        let mut state = self.shared.lock();

        while let Some(idle) = state.idle.pop() {
            match idle.send(job) {
                Ok(()) => return Ok(Placement::IdleWorker),
                // Worker task is gone (runtime shutting down); try the next one.
                Err(returned) => job = returned,
            }
        }

        if state.queue.len() < self.queue_capacity {
            state.queue.push_back(job);
            return Ok(Placement::Queued);
        }
        drop(state);

        if !self.reserve_worker() {
            return Err(job);
        }

        debug!(steam_id = %job.steam_id, "Queue full; starting surge worker");
        tokio::spawn(surge_worker(self.shared.clone(), job));

        Ok(Placement::SurgeWorker)
    }

    /// Places a job in the pool, falling back to the overflow buffer.
    ///
    /// Never fails. A job that fits neither the pool nor the overflow buffer is
    /// dropped and logged as an error.
    ///
    /// # Returns
    /// - `SubmitOutcome` - Where the job ended up
    pub fn submit(&self, job: TrackingJob) -> SubmitOutcome {
        let job = match self.execute(job) {
            Ok(placement) => return placement.into(),
            Err(job) => job,
        };

        let steam_id = job.steam_id.clone();
        match self.overflow.offer(job) {
            Ok(overflow_len) => {
                warn!(
                    steam_id = %steam_id,
                    overflow_len,
                    "Tracker pool saturated; job moved to overflow buffer"
                );
                SubmitOutcome::Overflowed
            }
            Err(_) => {
                error!(
                    steam_id = %steam_id,
                    overflow_capacity = self.overflow.capacity(),
                    "Tracker pool and overflow buffer full; dropping tracking job"
                );
                SubmitOutcome::Dropped
            }
        }
    }

    /// Jobs waiting in the internal queue.
    pub fn queued(&self) -> usize {
        self.shared.lock().queue.len()
    }

    /// Core workers waiting for a job.
    pub fn idle_workers(&self) -> usize {
        self.shared.lock().idle.len()
    }

    /// Jobs currently being executed.
    pub fn active_jobs(&self) -> usize {
        self.shared.active_jobs.load(Ordering::SeqCst)
    }

    /// Core plus surge workers currently alive.
    pub fn live_workers(&self) -> usize {
        self.shared.live_workers.load(Ordering::SeqCst)
    }

    pub fn overflow(&self) -> &Arc<OverflowBuffer> {
        &self.overflow
    }

    /// Claims a worker slot if fewer than `max_pool_size` workers are alive.
    fn reserve_worker(&self) -> bool {
        self.shared
            .live_workers
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |live| {
                (live < self.max_pool_size).then_some(live + 1)
            })
            .is_ok()
    }
}

async fn core_worker(
    worker: usize,
    shared: Arc<WorkerShared>,
    mut handoff: oneshot::Receiver<TrackingJob>,
) {
    loop {
        let Ok(mut job) = handoff.await else {
            break;
        };

        loop {
            shared.run(job).await;
            match shared.next_or_idle() {
                Ok(next) => job = next,
                Err(receiver) => {
                    handoff = receiver;
                    break;
                }
            }
        }
    }

    shared.live_workers.fetch_sub(1, Ordering::SeqCst);
    debug!(worker, "Tracker worker stopped");
}

async fn surge_worker(shared: Arc<WorkerShared>, first: TrackingJob) {
    shared.run(first).await;

    while let Some(job) = shared.next_queued() {
        shared.run(job).await;
    }

    shared.live_workers.fetch_sub(1, Ordering::SeqCst);
    debug!("Surge worker stopped");
}
