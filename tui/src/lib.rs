//! Testimonial TUI - Terminal host for the testimonial carousel
//!
//! This crate puts the headless carousel from `carousel-core` on a
//! terminal: one testimonial card at a time, a row of indicator dots, and
//! auto-advance driven by the tokio runtime.
//!
//! # Architecture
//!
//! - **Deck**: testimonials loaded from TOML or the built-in set
//! - **Slides**: card and dot handles the carousel toggles
//! - **Widgets**: borderless card and centered indicator row
//! - **App**: event loop binding keys and timer ticks to the carousel
//! - **Logging**: where log lines go while the terminal is in raw mode

pub mod app;
pub mod deck;
pub mod logging;
pub mod slides;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use deck::{Deck, Testimonial};
pub use logging::LogDestination;
