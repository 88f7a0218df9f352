//! Bounded worker-thread pool built on [`super::queue::MpmcQueue`].
//!
//! Lifecycle: `Running -> Draining -> Stopped`. `shutdown(true)` stops
//! accepting new jobs and waits for everything already queued to finish;
//! `shutdown(false)` stops accepting new jobs and returns as soon as workers
//! notice, without waiting for jobs still in the queue (jobs a worker has
//! already claimed still run to completion — there is no preemption).

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use super::queue::{Full, MpmcQueue};
use crate::error::JsonToolsError;

type Job = Box<dyn FnOnce() + Send + 'static>;

const RUNNING: u8 = 0;
const DRAINING: u8 = 1;
const STOPPED: u8 = 2;

/// Snapshot of the pool's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    Running,
    Draining,
    Stopped,
}

struct Shared {
    queue: MpmcQueue<Job>,
    state: AtomicU8,
    pending: AtomicUsize,
    completion_lock: Mutex<()>,
    completion_cvar: Condvar,
}

/// A fixed-size pool of OS worker threads.
pub struct ThreadPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl ThreadPool {
    /// Spawn `num_workers` (clamped to at least 1) worker threads, backed by
    /// a queue sized generously relative to the worker count.
    pub fn new(num_workers: usize) -> Self {
        let num_workers = num_workers.max(1);
        let shared = Arc::new(Shared {
            queue: MpmcQueue::with_capacity((num_workers * 4).max(8)),
            state: AtomicU8::new(RUNNING),
            pending: AtomicUsize::new(0),
            completion_lock: Mutex::new(()),
            completion_cvar: Condvar::new(),
        });

        let workers = (0..num_workers)
            .map(|i| {
                let shared = Arc::clone(&shared);
                thread::Builder::new()
                    .name(format!("jsontools-worker-{i}"))
                    .spawn(move || worker_loop(shared))
                    .expect("failed to spawn worker thread")
            })
            .collect();

        Self { shared, workers }
    }

    pub fn state(&self) -> PoolState {
        match self.shared.state.load(Ordering::Acquire) {
            RUNNING => PoolState::Running,
            DRAINING => PoolState::Draining,
            _ => PoolState::Stopped,
        }
    }

    /// Queue `job` for execution by some worker. Fails if the pool is no
    /// longer `Running`.
    pub fn submit<F>(&self, job: F) -> Result<(), JsonToolsError>
    where
        F: FnOnce() + Send + 'static,
    {
        if self.shared.state.load(Ordering::Acquire) != RUNNING {
            return Err(JsonToolsError::Internal(
                "thread pool is not accepting work".to_string(),
            ));
        }
        self.shared.pending.fetch_add(1, Ordering::SeqCst);
        let mut boxed: Job = Box::new(job);
        loop {
            match self.shared.queue.push(boxed) {
                Ok(()) => return Ok(()),
                Err(Full(returned)) => {
                    boxed = returned;
                    thread::yield_now();
                }
            }
        }
    }

    /// Block until every submitted job has run to completion.
    pub fn wait_for_completion(&self) {
        let guard = self.shared.completion_lock.lock().unwrap();
        let _guard = self
            .shared
            .completion_cvar
            .wait_while(guard, |_| self.shared.pending.load(Ordering::SeqCst) != 0)
            .expect("completion mutex poisoned");
    }

    /// Stop accepting new jobs. With `drain == true`, waits for every job
    /// already queued (or in flight) to finish first; otherwise returns as
    /// soon as the workers notice the state change.
    pub fn shutdown(mut self, drain: bool) {
        self.shared
            .state
            .store(if drain { DRAINING } else { STOPPED }, Ordering::Release);
        if drain {
            self.wait_for_completion();
        }
        self.shared.state.store(STOPPED, Ordering::Release);
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shared.state.store(STOPPED, Ordering::Release);
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(shared: Arc<Shared>) {
    loop {
        if shared.state.load(Ordering::Acquire) == STOPPED {
            return;
        }
        match shared.queue.pop() {
            Some(job) => {
                job();
                let remaining = shared.pending.fetch_sub(1, Ordering::SeqCst) - 1;
                if remaining == 0 {
                    let _guard = shared.completion_lock.lock().unwrap();
                    shared.completion_cvar.notify_all();
                }
            }
            None => {
                let state = shared.state.load(Ordering::Acquire);
                if state == DRAINING && shared.pending.load(Ordering::SeqCst) == 0 {
                    return;
                }
                thread::yield_now();
            }
        }
    }
}
