//! IndicatorRow Widget
//!
//! One dot per slide, centered, the active one highlighted.

use carousel_core::Activatable;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::slides::IndicatorDot;
use crate::theme;

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Renders the indicator dots on a single line
pub struct IndicatorRow<'a> {
    dots: &'a [IndicatorDot],
}

impl<'a> IndicatorRow<'a> {
    pub fn new(dots: &'a [IndicatorDot]) -> Self {
        Self { dots }
    }
}

impl Widget for IndicatorRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.dots.is_empty() || area.height == 0 {
            return;
        }

        // Dots are one cell wide with one cell between them
        let needed = self.dots.len().saturating_mul(2).saturating_sub(1);
        let width = usize::from(area.width);
        let start = area.x + u16::try_from(width.saturating_sub(needed) / 2).unwrap_or(0);

        for (i, dot) in self.dots.iter().enumerate() {
            let Ok(offset) = u16::try_from(i * 2) else {
                break;
            };
            let x = start.saturating_add(offset);
            if x >= area.right() {
                break;
            }
            let symbol = if dot.is_active() { ACTIVE_DOT } else { INACTIVE_DOT };
            buf.set_string(x, area.y, symbol, theme::dot(dot.is_active()));
        }
    }
}
