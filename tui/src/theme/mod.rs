//! Theme and Colors
//!
//! Dark portfolio palette: near-white quote text on the terminal
//! background, a violet accent for attribution and the active indicator.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Accent violet (headings, attribution, active dot)
pub const ACCENT: Color = Color::Rgb(167, 139, 250);

/// Quote body text
pub const QUOTE_TEXT: Color = Color::Rgb(230, 230, 235);

/// Role/company and help text
pub const DIM_GRAY: Color = Color::Rgb(110, 110, 120);

/// Inactive indicator dot
pub const DOT_INACTIVE: Color = Color::Rgb(70, 70, 80);

/// Rejected-input status line
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

// ============================================================================
// Styles
// ============================================================================

/// Section heading
#[must_use]
pub fn heading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Quote body
#[must_use]
pub fn quote() -> Style {
    Style::default().fg(QUOTE_TEXT).add_modifier(Modifier::ITALIC)
}

/// Attribution line
#[must_use]
pub fn attribution() -> Style {
    Style::default().fg(ACCENT)
}

/// Help and placeholder text
#[must_use]
pub fn dim() -> Style {
    Style::default().fg(DIM_GRAY)
}

/// Indicator dot
#[must_use]
pub fn dot(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DOT_INACTIVE)
    }
}

/// Status line for rejected input
#[must_use]
pub fn error() -> Style {
    Style::default().fg(ERROR_RED)
}
