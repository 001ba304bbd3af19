//! Carousel Core - Headless Testimonial Rotation
//!
//! This crate provides the carousel controller behind the testimonial
//! section, completely independent of any UI framework. The host supplies
//! slide and indicator handles and a scheduler; the controller decides which
//! handle is active.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Host                             │
//! │   key / click ──► next · previous · go_to                │
//! │   timer tick  ──► on_timer(generation)                   │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼──────────────────────────────┐
//! │                     CAROUSEL CORE                        │
//! │  ┌────────────────────────┴───────────────────────────┐  │
//! │  │                    Carousel                        │  │
//! │  │   cursor ─► show ─► Activatable (slides, dots)     │  │
//! │  │   reset  ─► Scheduler (Manual | Tokio)             │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use carousel_core::{ActiveFlag, Carousel, CarouselConfig, ManualScheduler};
//!
//! let slides = ActiveFlag::many(3);
//! let clock = ManualScheduler::new();
//! let mut carousel = Carousel::without_indicators(
//!     slides.clone(),
//!     clock.clone(),
//!     CarouselConfig::with_period(Duration::from_millis(100)),
//! );
//!
//! carousel.next();
//! assert!(slides[1].get());
//!
//! for generation in clock.advance(Duration::from_millis(100)) {
//!     carousel.on_timer(generation);
//! }
//! assert!(slides[2].get());
//! ```
//!
//! # Module Overview
//!
//! - [`carousel`]: The controller and its navigation operations
//! - [`handle`]: The [`Activatable`] capability for slides and indicators
//! - [`scheduler`]: Auto-advance timer capability and implementations
//! - [`config`]: Period/enable settings, file and environment loading
//! - [`error`]: Contract violations reported by the controller
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod handle;
pub mod scheduler;

pub use carousel::{Carousel, NavigationCause};
pub use config::{
    default_config_path, load_config, load_config_from_path, CarouselConfig, CarouselConfigFile,
    CarouselToml, ConfigError, ConfigOverrides, ConfigSource, DEFAULT_AUTO_ADVANCE_PERIOD,
};
pub use error::CarouselError;
pub use handle::{active_positions, ActiveFlag, Activatable};
pub use scheduler::{ManualScheduler, Scheduler, TimerFired, TimerGeneration, TokioScheduler};
