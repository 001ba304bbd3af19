//! Carousel Controller
//!
//! Owns the cursor and the auto-advance timer for a fixed set of slides.
//! Every index change marks exactly one slide active, and when indicators
//! are present, exactly the indicator at the same position.
//!
//! # Timer Policy
//!
//! ```text
//! construct ──► arm (only if N > 1 and auto-advance enabled)
//! next / previous / go_to ──► show ──► re-arm (full fresh period)
//! tick (timer firing) ──► show          (timer keeps its cadence)
//! teardown / drop ──► cancel
//! ```

use std::fmt;

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::handle::Activatable;
use crate::scheduler::{Scheduler, TimerGeneration};

/// Why the active slide last changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationCause {
    /// Slide 0 shown at construction
    Initial,
    /// Direct call to [`Carousel::show`]
    Show,
    /// Forward navigation by the user
    Next,
    /// Backward navigation by the user
    Previous,
    /// An indicator was activated
    Indicator,
    /// The auto-advance timer fired
    AutoAdvance,
}

impl fmt::Display for NavigationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initial => "initial",
            Self::Show => "show",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Indicator => "indicator",
            Self::AutoAdvance => "auto-advance",
        };
        f.write_str(name)
    }
}

/// Rotating slide controller with manual override and auto-advance
///
/// `S` is the slide handle type, `D` the indicator handle type and `T` the
/// scheduler that drives auto-advance. Slides and indicators are fixed at
/// construction.
#[derive(Debug)]
pub struct Carousel<S, D, T>
where
    S: Activatable,
    D: Activatable,
    T: Scheduler,
{
    slides: Vec<S>,
    indicators: Vec<D>,
    cursor: Option<usize>,
    scheduler: T,
    config: CarouselConfig,
    last_cause: Option<NavigationCause>,
    torn_down: bool,
}

impl<S, T> Carousel<S, bool, T>
where
    S: Activatable,
    T: Scheduler,
{
    /// Create a carousel that has no indicator controls
    #[must_use]
    pub fn without_indicators(slides: Vec<S>, scheduler: T, config: CarouselConfig) -> Self {
        let slide_count = slides.len();
        let mut carousel = Self {
            slides,
            indicators: Vec::new(),
            cursor: None,
            scheduler,
            config,
            last_cause: None,
            torn_down: false,
        };
        carousel.start(slide_count);
        carousel
    }
}

impl<S, D, T> Carousel<S, D, T>
where
    S: Activatable,
    D: Activatable,
    T: Scheduler,
{
    /// Create a carousel over `slides`, mirrored onto `indicators`
    ///
    /// Shows slide 0 when there is at least one slide, and arms the
    /// auto-advance timer when there is more than one.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndicatorCountMismatch`] unless `indicators`
    /// is empty or has exactly one entry per slide.
    pub fn new(
        slides: Vec<S>,
        indicators: Vec<D>,
        scheduler: T,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        if !indicators.is_empty() && indicators.len() != slides.len() {
            return Err(CarouselError::IndicatorCountMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        let slide_count = slides.len();
        let mut carousel = Self {
            slides,
            indicators,
            cursor: None,
            scheduler,
            config,
            last_cause: None,
            torn_down: false,
        };
        carousel.start(slide_count);
        Ok(carousel)
    }

    fn start(&mut self, slide_count: usize) {
        if slide_count > 0 {
            self.apply(0, NavigationCause::Initial);
        }
        self.reset_timer();
        tracing::debug!(
            slides = slide_count,
            indicators = self.indicators.len(),
            auto_advance = self.is_auto_advancing(),
            "carousel started"
        );
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Mark slide `index` active and every other slide inactive
    ///
    /// Does not touch the auto-advance timer.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndexOutOfRange`] if `index >= len()`; state
    /// is left unchanged.
    pub fn show(&mut self, index: usize) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.apply(index, NavigationCause::Show);
        Ok(())
    }

    /// Advance to the following slide, wrapping to the first, and restart
    /// the auto-advance period
    pub fn next(&mut self) {
        if let Some(index) = self.following() {
            self.apply(index, NavigationCause::Next);
            self.reset_timer();
        }
    }

    /// Step back to the preceding slide, wrapping to the last, and restart
    /// the auto-advance period
    pub fn previous(&mut self) {
        if let Some(index) = self.preceding() {
            self.apply(index, NavigationCause::Previous);
            self.reset_timer();
        }
    }

    /// Jump to slide `index` (indicator activation) and restart the
    /// auto-advance period
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndexOutOfRange`] if `index >= len()`; state
    /// and timer are left unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.check_index(index)?;
        self.apply(index, NavigationCause::Indicator);
        self.reset_timer();
        Ok(())
    }

    /// Auto-advance step: like [`next`](Self::next) but leaves the timer's
    /// cadence alone
    pub fn tick(&mut self) {
        if let Some(index) = self.following() {
            self.apply(index, NavigationCause::AutoAdvance);
        }
    }

    /// Handle a fired timer
    ///
    /// Ticks from a timer that has been re-armed or cancelled since are
    /// dropped. Returns whether the tick was applied.
    pub fn on_timer(&mut self, generation: TimerGeneration) -> bool {
        if self.scheduler.armed() != Some(generation) {
            tracing::trace!(%generation, "ignoring stale auto-advance tick");
            return false;
        }
        self.tick();
        true
    }

    /// Cancel the auto-advance timer for good
    ///
    /// Later manual navigation still works but never re-arms the timer.
    /// Also runs on drop.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            self.torn_down = true;
            self.scheduler.cancel();
            tracing::debug!("carousel torn down");
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Index of the active slide, `None` for an empty carousel
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of slides
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether there are no slides at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide handles in order
    #[must_use]
    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Indicator handles in order (empty if the carousel has none)
    #[must_use]
    pub fn indicators(&self) -> &[D] {
        &self.indicators
    }

    /// The active slide handle
    #[must_use]
    pub fn current(&self) -> Option<&S> {
        self.cursor.and_then(|i| self.slides.get(i))
    }

    /// Configuration the carousel was built with
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Whether an auto-advance timer is currently armed
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.scheduler.armed().is_some()
    }

    /// What caused the most recent slide change
    #[must_use]
    pub fn last_cause(&self) -> Option<NavigationCause> {
        self.last_cause
    }

    /// The scheduler driving auto-advance
    #[must_use]
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_index(&self, index: usize) -> Result<(), CarouselError> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(CarouselError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            })
        }
    }

    fn following(&self) -> Option<usize> {
        let len = self.slides.len();
        match self.cursor {
            Some(cursor) if len > 1 => Some((cursor + 1) % len),
            _ => None,
        }
    }

    fn preceding(&self) -> Option<usize> {
        let len = self.slides.len();
        match self.cursor {
            Some(0) if len > 1 => Some(len - 1),
            Some(cursor) if len > 1 => Some(cursor - 1),
            _ => None,
        }
    }

    fn apply(&mut self, index: usize, cause: NavigationCause) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(i == index);
        }
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.set_active(i == index);
        }

        let from = self.cursor.replace(index);
        self.last_cause = Some(cause);
        tracing::debug!(?from, to = index, %cause, "slide shown");
    }

    fn reset_timer(&mut self) {
        // A single slide has nothing to rotate to
        if self.torn_down || !self.config.auto_advance || self.slides.len() < 2 {
            return;
        }
        self.scheduler.arm(self.config.auto_advance_period);
    }
}

impl<S, D, T> Drop for Carousel<S, D, T>
where
    S: Activatable,
    D: Activatable,
    T: Scheduler,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
