//! Testimonial TUI Entry Point
//!
//! Usage:
//!   testimonial-tui [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>    Carousel config file
//!   -d, --deck <FILE>      Testimonial deck (TOML)
//!   -p, --period-ms <MS>   Auto-advance period
//!       --no-auto-advance  Only move on key presses
//!   -l, --log-level <LVL>  Log level when logging to a file
//!       --log-file <FILE>  Write logs to FILE

use std::io;
use std::panic;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::{load_config, load_config_from_path, CarouselConfig, ConfigOverrides};
use testimonial_tui::{App, Deck, LogDestination};

/// Testimonial TUI - rotate client testimonials in the terminal
#[derive(Parser, Debug)]
#[command(name = "testimonial-tui")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "CAROUSEL_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Testimonial deck file (TOML)
    #[arg(short = 'd', long, env = "CAROUSEL_DECK", value_name = "FILE")]
    deck: Option<PathBuf>,

    /// Auto-advance period in milliseconds
    #[arg(short = 'p', long, value_name = "MS")]
    period_ms: Option<u64>,

    /// Disable auto-advance
    #[arg(long)]
    no_auto_advance: bool,

    /// Log level (trace, debug, info, warn, error) used with --log-file
    #[arg(short = 'l', long, env = "CAROUSEL_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Write logs to this file; without it logs are discarded
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = resolve_config(&args)?;
    let deck = Deck::load_or_builtin(args.deck.as_deref()).context("loading testimonial deck")?;

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: testimonial-tui requires a terminal (TTY)");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, deck, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    deck: Deck,
    config: CarouselConfig,
) -> Result<()> {
    let mut app = App::new(deck, config)?;
    app.run(terminal).await
}

/// Install the tracing subscriber
///
/// The terminal is in raw mode while the app runs, so logs only go to
/// `--log-file`; without one they are dropped.
fn init_logging(args: &Args) -> Result<()> {
    let destination = LogDestination::from_path(args.log_file.clone());
    let writer = destination.make_writer()
        .with_context(|| format!("Failed to open log file: {:?}", args.log_file))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .with(destination.filter(&args.log_level))
        .init();
    Ok(())
}

/// Config file, then environment, then CLI flags
fn resolve_config(args: &Args) -> Result<CarouselConfig> {
    let mut loaded = match &args.config {
        Some(path) => load_config_from_path(Some(path.as_path())),
        None => load_config(),
    }
    .context("Failed to load carousel configuration")?;

    let mut overrides = ConfigOverrides::new();
    if let Some(ms) = args.period_ms {
        overrides = overrides.with_auto_advance_ms(ms);
    }
    if args.no_auto_advance {
        overrides = overrides.with_auto_advance(false);
    }
    overrides
        .apply(&mut loaded)
        .context("Invalid command-line configuration")?;

    tracing::info!(
        source = %loaded.source(),
        file = ?loaded.config_file_path,
        "Configuration resolved"
    );
    Ok(loaded.carousel)
}
