//! Elapsed-time capture for test runs
//!
//! A small monotonic stopwatch backed by [`std::time::Instant`]. Cloning a
//! running timer takes a snapshot that can be stopped and read without
//! touching the original, which is how a test body reads its own elapsed
//! time mid-run.

use std::time::Instant;

/// Monotonic stopwatch with millisecond readout
#[derive(Debug, Clone, Default)]
pub struct CpuTimer {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl CpuTimer {
    /// Create a timer that has not been started
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped = None;
    }

    /// Stop the timer; a timer that was never started stays unstarted
    pub fn stop(&mut self) {
        if self.started.is_some() {
            self.stopped = Some(Instant::now());
        }
    }

    /// Elapsed milliseconds between start and stop
    ///
    /// A running timer reports the time elapsed so far; a timer that was
    /// never started reports zero.
    pub fn elapsed_ms(&self) -> f32 {
        match (self.started, self.stopped) {
            (Some(started), Some(stopped)) => {
                stopped.duration_since(started).as_secs_f32() * 1000.0
            }
            (Some(started), None) => started.elapsed().as_secs_f32() * 1000.0,
            _ => 0.0,
        }
    }
}
