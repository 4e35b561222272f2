//! # Quiesce - Debounced Value Propagation
//!
//! A debouncer delays propagation of a rapidly changing value until the input
//! has been quiet for a fixed interval, coalescing bursts into a single
//! downstream update.
//!
//! ## The Problem
//!
//! Some inputs change far faster than their consumers want to react. A search
//! box fires on every keystroke, but recomputing a result list nine times
//! while someone types "cardiology" is wasted work and visual noise. The
//! consumer only cares about the value once typing pauses.
//!
//! ## The Solution
//!
//! [`Debouncer`] owns a background worker thread. Each [`Debouncer::submit`]
//! restarts a quiescence window; only when a full window elapses with no new
//! submission does the latest value become *settled* and observable through
//! [`Debouncer::try_settled`] or [`Debouncer::settle`]. Intermediate values
//! from a burst are never observable downstream.
//!
//! ## Quick Example
//!
//! ```rust
//! use quiesce::Debouncer;
//! use std::time::Duration;
//!
//! let mut search = Debouncer::new(Duration::from_millis(50));
//! search.submit("c".to_string());
//! search.submit("ca".to_string());
//! search.submit("car".to_string());
//!
//! // Only the last value of the burst ever settles.
//! assert_eq!(search.settle(), Some("car".to_string()));
//! ```
//!
//! ## Cancellation
//!
//! Dropping the `Debouncer` closes the input channel. The worker exits
//! without emitting a value still waiting out its window, so no late update
//! can reach a consumer that is already gone.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Extra slack added to blocking waits so a window that was restarted just
/// before the wait began still has time to close.
const SETTLE_GRACE: Duration = Duration::from_millis(100);

/// Delays propagation of a value until submissions have been quiet for a
/// fixed interval.
///
/// Values are tagged with a generation counter so [`Debouncer::settle`] can
/// tell when the most recent submission has settled, rather than an older
/// one that was already queued.
#[derive(Debug)]
pub struct Debouncer<T: Send + 'static> {
    input: Option<Sender<(u64, T)>>,
    settled: Receiver<(u64, T)>,
    worker: Option<JoinHandle<()>>,
    delay: Duration,
    submitted: u64,
    adopted: u64,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer whose quiescence window is `delay`.
    pub fn new(delay: Duration) -> Self {
        let (input_tx, input_rx) = mpsc::channel();
        let (settled_tx, settled_rx) = mpsc::channel();
        let worker = thread::spawn(move || run_worker(input_rx, settled_tx, delay));
        Self {
            input: Some(input_tx),
            settled: settled_rx,
            worker: Some(worker),
            delay,
            submitted: 0,
            adopted: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Submit a new value, restarting the quiescence window.
    pub fn submit(&mut self, value: T) {
        if let Some(tx) = &self.input {
            self.submitted += 1;
            // The worker only disappears when we drop the sender ourselves
            let _ = tx.send((self.submitted, value));
        }
    }

    /// True when a submission has not yet been observed as settled.
    pub fn is_pending(&self) -> bool {
        self.adopted < self.submitted
    }

    /// Non-blocking: drain anything that has settled and return the latest,
    /// or `None` when no window has closed since the last call.
    pub fn try_settled(&mut self) -> Option<T> {
        let mut latest = None;
        while let Ok((generation, value)) = self.settled.try_recv() {
            self.adopted = generation;
            latest = Some(value);
        }
        latest
    }

    /// Block until the most recent submission settles and return it.
    ///
    /// Returns `None` when nothing is pending, or when the worker vanished
    /// without delivering (which only happens during teardown).
    pub fn settle(&mut self) -> Option<T> {
        if !self.is_pending() {
            return self.try_settled();
        }
        let budget = self.delay + self.delay + SETTLE_GRACE;
        let mut latest = None;
        while self.adopted < self.submitted {
            match self.settled.recv_timeout(budget) {
                Ok((generation, value)) => {
                    self.adopted = generation;
                    latest = Some(value);
                }
                Err(_) => break,
            }
        }
        latest
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // Closing the input channel tells the worker to exit without
        // emitting whatever is still waiting out its window.
        self.input.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<T: Send>(input: Receiver<(u64, T)>, settled: Sender<(u64, T)>, delay: Duration) {
    loop {
        // Idle: block until the next burst begins.
        let mut candidate = match input.recv() {
            Ok(pair) => pair,
            Err(_) => return,
        };
        // A window is open. Every new value restarts it.
        loop {
            match input.recv_timeout(delay) {
                Ok(pair) => candidate = pair,
                Err(RecvTimeoutError::Timeout) => {
                    if settled.send(candidate).is_err() {
                        return;
                    }
                    break;
                }
                // Consumer torn down mid-window: discard, never emit late.
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    }
}
