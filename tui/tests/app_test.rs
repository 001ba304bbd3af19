//! Integration Tests for the Terminal Host
//!
//! Drives [`App`] the way the event loop does (key events and timer
//! ticks) and renders into ratatui's `TestBackend`.
//!
//! # Test Coverage
//!
//! 1. **Key bindings**: previous/next/jump/quit reach the carousel
//! 2. **Rejected input**: out-of-range jumps leave the carousel alone
//! 3. **Go-to prompt**: reaches indicators past the ninth
//! 4. **Auto-advance**: ticks from the runtime rotate the cards
//! 5. **Rendering**: active card, dots, prompt and placeholder

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use carousel_core::{active_positions, CarouselConfig, Scheduler, TimerFired, TimerGeneration};
use testimonial_tui::{App, Deck, Testimonial};

// ============================================================================
// Helpers
// ============================================================================

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn small_deck() -> Deck {
    Deck {
        testimonials: vec![
            Testimonial::new("Ada", "CTO", "First quote."),
            Testimonial::new("Lin", "PM", "Second quote."),
            Testimonial::new("Sam", "", "Third quote."),
        ],
    }
}

fn large_deck(count: usize) -> Deck {
    Deck {
        testimonials: (1..=count)
            .map(|n| Testimonial::new(format!("Client {n}"), "", format!("Quote {n}.")))
            .collect(),
    }
}

fn armed_tick(app: &App) -> TimerFired {
    TimerFired {
        generation: app.carousel().scheduler().armed().unwrap(),
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Key Bindings
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_arrow_keys_navigate() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();
    assert_eq!(app.carousel().cursor(), Some(0));

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.carousel().cursor(), Some(1));

    app.handle_key(key(KeyCode::Char('l')));
    assert_eq!(app.carousel().cursor(), Some(2));

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.carousel().cursor(), Some(0));

    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.carousel().cursor(), Some(2));

    app.handle_key(key(KeyCode::Char('h')));
    assert_eq!(app.carousel().cursor(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_digit_jumps_to_indicator() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();

    app.handle_key(key(KeyCode::Char('3')));
    assert_eq!(app.carousel().cursor(), Some(2));
    assert_eq!(active_positions(app.carousel().indicators()), vec![2]);
    assert_eq!(app.status(), None);
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_digit_is_rejected() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();
    app.handle_key(key(KeyCode::Char('2')));

    app.handle_key(key(KeyCode::Char('7')));
    assert_eq!(app.carousel().cursor(), Some(1));
    assert_eq!(app.status(), Some("No testimonial #7"));

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.status(), None);
}

#[tokio::test(start_paused = true)]
async fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();
        app.handle_key(key(code));
        assert!(!app.is_running());
    }

    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_digits_follow_indicator_hotkeys() {
    let mut app = App::new(large_deck(12), CarouselConfig::default()).unwrap();

    app.handle_key(key(KeyCode::Char('9')));
    assert_eq!(app.carousel().cursor(), Some(8));

    // No dot is bound to '0'
    app.handle_key(key(KeyCode::Char('0')));
    assert_eq!(app.carousel().cursor(), Some(8));
    assert_eq!(app.status(), Some("No testimonial #0"));
}

// ============================================================================
// Go-To Prompt
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_goto_prompt_reaches_every_indicator() {
    let mut app = App::new(large_deck(12), CarouselConfig::default()).unwrap();

    for target in [12, 10, 1] {
        app.handle_key(key(KeyCode::Char('g')));
        for digit in target.to_string().chars() {
            app.handle_key(key(KeyCode::Char(digit)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.goto_prompt(), None);
        assert_eq!(app.carousel().cursor(), Some(target - 1));
        assert_eq!(active_positions(app.carousel().indicators()), vec![target - 1]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_goto_prompt_editing_and_cancel() {
    let mut app = App::new(large_deck(12), CarouselConfig::default()).unwrap();

    app.handle_key(key(KeyCode::Char('g')));
    app.handle_key(key(KeyCode::Char('1')));
    app.handle_key(key(KeyCode::Char('x')));
    app.handle_key(key(KeyCode::Char('q')));
    assert_eq!(app.goto_prompt(), Some("1"));
    assert!(app.is_running());

    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.goto_prompt(), Some(""));

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.goto_prompt(), None);
    assert!(app.is_running());
    assert_eq!(app.carousel().cursor(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_goto_prompt_rejects_unknown_number() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();

    app.handle_key(key(KeyCode::Char('g')));
    app.handle_key(key(KeyCode::Char('4')));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.carousel().cursor(), Some(0));
    assert_eq!(app.status(), Some("No testimonial #4"));

    app.handle_key(key(KeyCode::Char('g')));
    app.handle_key(key(KeyCode::Char('0')));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.status(), Some("No testimonial #0"));

    // Empty prompt closes without complaint
    app.handle_key(key(KeyCode::Char('g')));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.goto_prompt(), None);
    assert_eq!(app.status(), None);
}

// ============================================================================
// Auto-Advance
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_armed_tick_rotates_card() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();

    app.on_tick(armed_tick(&app));
    assert_eq!(app.carousel().cursor(), Some(1));
    assert!(screen(&app).contains("Second quote."));

    app.on_tick(armed_tick(&app));
    app.on_tick(armed_tick(&app));
    assert_eq!(app.carousel().cursor(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_tick_from_before_key_press_is_ignored() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();
    let before = armed_tick(&app);

    app.handle_key(key(KeyCode::Right));
    app.on_tick(before);
    assert_eq!(app.carousel().cursor(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_stale_tick_is_ignored() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();
    app.on_tick(TimerFired {
        generation: TimerGeneration::new(999),
    });
    assert_eq!(app.carousel().cursor(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_disabled_auto_advance() {
    let app = App::new(small_deck(), CarouselConfig::manual_only()).unwrap();
    assert!(!app.carousel().is_auto_advancing());
}

#[tokio::test(start_paused = true)]
async fn test_single_testimonial_never_schedules() {
    let deck = Deck {
        testimonials: vec![Testimonial::new("Ada", "", "Only one.")],
    };
    let app = App::new(deck, CarouselConfig::with_period(Duration::from_millis(10))).unwrap();
    assert!(!app.carousel().is_auto_advancing());
}

// ============================================================================
// Rendering
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_renders_active_card_and_dots() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();

    let first = screen(&app);
    assert!(first.contains("What clients say"));
    assert!(first.contains("First quote."));
    assert!(first.contains("- Ada, CTO"));
    assert!(first.contains("● ○ ○"));
    assert!(!first.contains("Second quote."));

    app.handle_key(key(KeyCode::Right));
    let second = screen(&app);
    assert!(second.contains("Second quote."));
    assert!(second.contains("○ ● ○"));
}

#[tokio::test(start_paused = true)]
async fn test_renders_status_after_rejected_jump() {
    let mut app = App::new(small_deck(), CarouselConfig::default()).unwrap();
    app.handle_key(key(KeyCode::Char('9')));
    assert!(screen(&app).contains("No testimonial #9"));
}

#[tokio::test(start_paused = true)]
async fn test_renders_goto_prompt() {
    let mut app = App::new(large_deck(12), CarouselConfig::default()).unwrap();
    app.handle_key(key(KeyCode::Char('g')));
    app.handle_key(key(KeyCode::Char('1')));
    app.handle_key(key(KeyCode::Char('1')));
    assert!(screen(&app).contains("Go to testimonial: 11_"));
}

#[tokio::test(start_paused = true)]
async fn test_empty_deck_shows_placeholder() {
    let app = App::new(Deck::default(), CarouselConfig::default()).unwrap();
    assert_eq!(app.carousel().cursor(), None);
    assert!(!app.carousel().is_auto_advancing());
    assert!(screen(&app).contains("No testimonials yet"));
}
