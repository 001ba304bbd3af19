//! Main Application
//!
//! The App struct is the host for the carousel:
//! - Event loop (keyboard, resize, auto-advance ticks)
//! - Key bindings for previous/next/indicator navigation, plus a go-to
//!   prompt that reaches indicators past the ninth
//! - Rendering of the active card and the indicator row
//!
//! All carousel mutation happens on the event loop task. Timer ticks arrive
//! over a channel and are applied in the order they are dequeued, between
//! key events, never concurrently with them.

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use unicode_width::UnicodeWidthStr;

use carousel_core::{Carousel, CarouselConfig, TimerFired, TokioScheduler};

use crate::deck::Deck;
use crate::slides::{build_handles, CardView, IndicatorDot};
use crate::theme;
use crate::widgets::{IndicatorRow, TestimonialCard};

/// Heading shown above the card
const TITLE: &str = "What clients say";

/// Key help shown at the bottom
const HELP: &str = "←/h prev   →/l next   1-9 jump   g go to   q quit";

/// Longest number the go-to prompt accepts
const GOTO_MAX_DIGITS: usize = 4;

/// The carousel type the terminal host drives
pub type TestimonialCarousel = Carousel<CardView, IndicatorDot, TokioScheduler>;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The controller, owning the card and dot handles
    carousel: TestimonialCarousel,
    /// Auto-advance ticks from the scheduler
    ticks: mpsc::UnboundedReceiver<TimerFired>,
    /// Last rejected input, cleared by the next successful navigation
    status: Option<String>,
    /// Digits typed into the go-to prompt, `None` when it is closed
    goto: Option<String>,
}

impl App {
    /// Create the app for a deck
    ///
    /// Must be called inside a tokio runtime, since the auto-advance timer
    /// is armed immediately for decks of two or more testimonials.
    ///
    /// # Errors
    ///
    /// Fails only if the carousel rejects the handles it is given.
    pub fn new(deck: Deck, config: CarouselConfig) -> anyhow::Result<Self> {
        let (cards, dots) = build_handles(deck);
        let (scheduler, ticks) = TokioScheduler::new();
        let carousel = Carousel::new(cards, dots, scheduler, config)
            .context("building testimonial carousel")?;

        tracing::info!(
            testimonials = carousel.len(),
            period_ms = u64::try_from(config.auto_advance_period.as_millis()).unwrap_or(u64::MAX),
            auto_advance = carousel.is_auto_advancing(),
            "App ready"
        );

        Ok(Self {
            running: true,
            carousel,
            ticks,
            status: None,
            goto: None,
        })
    }

    /// Main event loop
    ///
    /// # Errors
    ///
    /// Returns terminal I/O errors from reading events or drawing.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events first, so a key press beats a tick queued
                // at the same moment
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("reading terminal events"),
                    None => self.running = false,
                },

                Some(fired) = self.ticks.recv() => self.on_tick(fired),
            }

            terminal.draw(|frame| self.draw(frame))?;
        }

        self.carousel.teardown();
        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.goto.is_some() {
            self.handle_goto_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Left | KeyCode::Char('h' | 'p') => {
                self.carousel.previous();
                self.status = None;
            }
            KeyCode::Right | KeyCode::Char('l' | 'n') => {
                self.carousel.next();
                self.status = None;
            }
            KeyCode::Char('g') => {
                self.goto = Some(String::new());
                self.status = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.jump(c),
            _ => {}
        }
    }

    /// Keys while the go-to prompt is open
    fn handle_goto_key(&mut self, key: KeyEvent) {
        let Some(typed) = self.goto.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char(c) if c.is_ascii_digit() && typed.len() < GOTO_MAX_DIGITS => {
                typed.push(c);
            }
            KeyCode::Backspace => {
                typed.pop();
            }
            KeyCode::Esc => self.goto = None,
            KeyCode::Enter => {
                let typed = self.goto.take().unwrap_or_default();
                // Empty prompt just closes
                if let Ok(number) = typed.parse::<usize>() {
                    match number.checked_sub(1) {
                        Some(position) => self.select(position),
                        None => self.reject(&typed, "no such testimonial"),
                    }
                }
            }
            _ => {}
        }
    }

    /// Select the slide of the dot bound to `hotkey`
    fn jump(&mut self, hotkey: char) {
        let bound = self
            .carousel
            .indicators()
            .iter()
            .position(|dot| dot.hotkey == Some(hotkey));

        match bound {
            Some(position) => self.select(position),
            None => self.reject(&hotkey.to_string(), "no indicator bound to key"),
        }
    }

    fn select(&mut self, position: usize) {
        match self.carousel.go_to(position) {
            Ok(()) => self.status = None,
            Err(e) => self.reject(&(position + 1).to_string(), &e.to_string()),
        }
    }

    fn reject(&mut self, input: &str, reason: &str) {
        tracing::warn!(input, reason, "Ignoring navigation input");
        self.status = Some(format!("No testimonial #{input}"));
    }

    /// Apply an auto-advance tick
    pub fn on_tick(&mut self, fired: TimerFired) {
        self.carousel.on_timer(fired.generation);
    }

    /// Draw the whole screen
    pub fn draw(&self, frame: &mut Frame) {
        let [title_area, card_area, dots_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        put_centered(frame, title_area, TITLE, theme::heading());

        match self.carousel.current() {
            Some(card) => frame.render_widget(TestimonialCard::new(&card.testimonial), card_area),
            None => put_centered(frame, card_area, "No testimonials yet", theme::dim()),
        }

        frame.render_widget(IndicatorRow::new(self.carousel.indicators()), dots_area);

        if let Some(typed) = &self.goto {
            let prompt = format!("Go to testimonial: {typed}_   Enter ok   Esc cancel");
            put_centered(frame, footer_area, &prompt, theme::heading());
        } else if let Some(status) = &self.status {
            put_centered(frame, footer_area, status, theme::error());
        } else {
            put_centered(frame, footer_area, HELP, theme::dim());
        }
    }

    /// Is the app still running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The carousel being shown
    #[must_use]
    pub fn carousel(&self) -> &TestimonialCarousel {
        &self.carousel
    }

    /// Last rejected-input message, if any
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Digits typed so far while the go-to prompt is open
    #[must_use]
    pub fn goto_prompt(&self) -> Option<&str> {
        self.goto.as_deref()
    }
}

/// Write `text` on the first line of `area`, horizontally centered
fn put_centered(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let x = area.x + area.width.saturating_sub(width) / 2;
    frame
        .buffer_mut()
        .set_stringn(x, area.y, text, usize::from(area.width), style);
}
