//! Virtual-time scheduler
//!
//! Time only moves when [`ManualScheduler::advance`] is called, so tests can
//! assert exactly when the auto-advance timer fires.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{Scheduler, TimerGeneration, MIN_PERIOD};

#[derive(Clone, Copy, Debug)]
struct ArmedTimer {
    generation: TimerGeneration,
    period: Duration,
    deadline: Duration,
}

#[derive(Debug, Default)]
struct ManualState {
    now: Duration,
    last_generation: u64,
    arm_count: u64,
    armed: Option<ArmedTimer>,
}

/// Deterministic scheduler driven by explicit time advancement
///
/// Clones share the same clock and timer, so a test can move one clone into
/// the carousel and keep another to advance time.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    /// Create a scheduler at virtual time zero with nothing armed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// When the armed timer will next fire, in virtual time
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.lock().armed.map(|t| t.deadline)
    }

    /// How many times a timer has been armed
    #[must_use]
    pub fn arm_count(&self) -> u64 {
        self.state.lock().arm_count
    }

    /// Move virtual time forward and collect the ticks that came due
    ///
    /// A repeating timer may fire several times within one call; each firing
    /// is reported in order.
    pub fn advance(&self, by: Duration) -> Vec<TimerGeneration> {
        let mut state = self.state.lock();
        let target = state.now + by;
        let mut fired = Vec::new();

        if let Some(timer) = state.armed.as_mut() {
            while timer.deadline <= target {
                fired.push(timer.generation);
                timer.deadline += timer.period;
            }
        }

        state.now = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, period: Duration) -> TimerGeneration {
        let mut state = self.state.lock();
        state.last_generation += 1;
        state.arm_count += 1;

        let generation = TimerGeneration::new(state.last_generation);
        let period = period.max(MIN_PERIOD);
        let deadline = state.now + period;
        state.armed = Some(ArmedTimer {
            generation,
            period,
            deadline,
        });

        tracing::trace!(%generation, ?deadline, "manual timer armed");
        generation
    }

    fn cancel(&mut self) {
        if let Some(timer) = self.state.lock().armed.take() {
            tracing::trace!(generation = %timer.generation, "manual timer cancelled");
        }
    }

    fn armed(&self) -> Option<TimerGeneration> {
        self.state.lock().armed.map(|t| t.generation)
    }
}
