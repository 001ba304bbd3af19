//! Tokio-backed scheduler
//!
//! Each arming spawns one interval task that sends a [`TimerFired`] per
//! period. Re-arming aborts the previous task before spawning the next one.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::{Scheduler, TimerGeneration, MIN_PERIOD};

/// A tick delivered by [`TokioScheduler`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFired {
    /// Generation of the timer that produced this tick
    pub generation: TimerGeneration,
}

/// Scheduler that runs the auto-advance timer on the tokio runtime
///
/// Ticks arrive on the receiver returned by [`TokioScheduler::new`]. The host
/// forwards each one to [`Carousel::on_timer`](crate::Carousel::on_timer)
/// from its own event loop, which keeps all carousel mutation on one task.
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerFired>,
    task: Option<(TimerGeneration, JoinHandle<()>)>,
    last_generation: u64,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its ticks are delivered on
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            task: None,
            last_generation: 0,
        };
        (scheduler, rx)
    }
}

impl Scheduler for TokioScheduler {
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    fn arm(&mut self, period: Duration) -> TimerGeneration {
        self.cancel();

        self.last_generation += 1;
        let generation = TimerGeneration::new(self.last_generation);
        let period = period.max(MIN_PERIOD);
        let first_tick = Instant::now() + period;
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(TimerFired { generation }).is_err() {
                    // Receiver gone, nobody left to advance
                    break;
                }
            }
        });

        tracing::trace!(%generation, ?period, "auto-advance timer armed");
        self.task = Some((generation, handle));
        generation
    }

    fn cancel(&mut self) {
        if let Some((generation, handle)) = self.task.take() {
            handle.abort();
            tracing::trace!(%generation, "auto-advance timer cancelled");
        }
    }

    fn armed(&self) -> Option<TimerGeneration> {
        self.task.as_ref().map(|(generation, _)| *generation)
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
