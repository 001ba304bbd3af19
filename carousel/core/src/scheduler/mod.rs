//! Auto-Advance Scheduling
//!
//! The carousel does not own a clock. It depends on a [`Scheduler`] that can
//! arm a repeating timer and cancel it again. Two implementations ship with
//! the crate:
//!
//! - [`ManualScheduler`]: virtual time, advanced explicitly. Used by tests
//!   and by hosts that already run their own frame clock.
//! - [`TokioScheduler`]: a tokio interval task that delivers
//!   [`TimerFired`] messages over a channel.
//!
//! # Generations
//!
//! Every call to [`Scheduler::arm`] returns a fresh [`TimerGeneration`], and
//! every tick carries the generation that armed it. A host hands the
//! generation back to [`Carousel::on_timer`](crate::Carousel::on_timer),
//! which drops ticks from a timer that has since been reset. Re-arming is
//! therefore atomic from the controller's point of view even if a tick from
//! the old timer is still sitting in the host's queue.

mod manual;
mod runtime;

pub use manual::ManualScheduler;
pub use runtime::{TimerFired, TokioScheduler};

use std::fmt;
use std::time::Duration;

/// Shortest period a scheduler will arm; zero would spin
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Identity of one arming of the auto-advance timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerGeneration(u64);

impl TimerGeneration {
    /// Wrap a raw generation number
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw generation number
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}

/// Capability to arm and cancel a single repeating timer
///
/// Implementations hold at most one live timer. `arm` must cancel the
/// previous one before scheduling the next, with no window in which both
/// can fire.
pub trait Scheduler {
    /// Cancel any pending timer and arm a repeating one whose first tick is
    /// a full `period` from now
    fn arm(&mut self, period: Duration) -> TimerGeneration;

    /// Cancel the pending timer, if any
    fn cancel(&mut self);

    /// Generation of the currently armed timer
    fn armed(&self) -> Option<TimerGeneration>;
}
