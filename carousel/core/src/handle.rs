//! Slide and Indicator Handles
//!
//! The controller never creates or inspects UI elements. It only needs
//! something with a binary active state it can flip, which is what
//! [`Activatable`] describes. A rendered card, a dot in a status line or a
//! test double all qualify.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A handle whose active/inactive state the carousel controls
pub trait Activatable {
    /// Mark this handle active or inactive
    fn set_active(&mut self, active: bool);

    /// Whether this handle is currently marked active
    fn is_active(&self) -> bool;
}

impl Activatable for bool {
    fn set_active(&mut self, active: bool) {
        *self = active;
    }

    fn is_active(&self) -> bool {
        *self
    }
}

/// A shared active flag
///
/// Clones observe the same state, so a host can hand one clone to the
/// carousel and keep another to read back what the controller wrote.
#[derive(Clone, Debug, Default)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    /// Create a new, inactive flag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `count` independent flags
    #[must_use]
    pub fn many(count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::new()).collect()
    }

    /// Read the flag
    #[must_use]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Activatable for ActiveFlag {
    fn set_active(&mut self, active: bool) {
        self.0.store(active, Ordering::Release);
    }

    fn is_active(&self) -> bool {
        self.get()
    }
}

/// Indices of every active handle in `handles`, in order
pub fn active_positions<H: Activatable>(handles: &[H]) -> Vec<usize> {
    handles
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_active())
        .map(|(i, _)| i)
        .collect()
}
