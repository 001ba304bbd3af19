//! Error Types
//!
//! Navigation has exactly two ways to go wrong, both caller contract
//! violations. Neither is corrected silently.

use thiserror::Error;

/// Errors returned by the carousel controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A slide index outside `0..len` was requested
    #[error("slide index {index} is out of range for a carousel of {len} slide(s)")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of slides in the carousel
        len: usize,
    },

    /// The indicator list is neither empty nor one-per-slide
    #[error("expected 0 or {slides} indicator(s), got {indicators}")]
    IndicatorCountMismatch {
        /// Number of slides supplied
        slides: usize,
        /// Number of indicators supplied
        indicators: usize,
    },
}
