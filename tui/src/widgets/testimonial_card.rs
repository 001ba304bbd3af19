//! TestimonialCard Widget
//!
//! A borderless card: the wrapped quote, a blank line, then the
//! attribution. Each line is centered within the padded area; lines past
//! the bottom of the area are dropped.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::deck::Testimonial;
use crate::theme;

/// Horizontal padding on each side of the card
const PADDING: u16 = 2;

/// Renders a single testimonial
pub struct TestimonialCard<'a> {
    testimonial: &'a Testimonial,
}

impl<'a> TestimonialCard<'a> {
    pub fn new(testimonial: &'a Testimonial) -> Self {
        Self { testimonial }
    }

    /// Lines this card occupies at the given width, with their styles
    fn lines(&self, width: usize) -> Vec<(String, ratatui::style::Style)> {
        let mut lines: Vec<_> = self
            .testimonial
            .quote
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width)
                        .into_iter()
                        .map(|cow| cow.to_string())
                        .collect()
                }
            })
            .map(|line| (line, theme::quote()))
            .collect();

        lines.push((String::new(), theme::quote()));
        lines.extend(
            wrap(&self.testimonial.attribution(), width)
                .into_iter()
                .map(|cow| (cow.to_string(), theme::attribution())),
        );
        lines
    }
}

impl Widget for TestimonialCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(PADDING * 2);
        if inner_width == 0 || area.height == 0 {
            return;
        }

        for (i, (line, style)) in self
            .lines(inner_width as usize)
            .iter()
            .take(area.height as usize)
            .enumerate()
        {
            // take() above bounds i by area.height
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y + i as u16;
            let width = u16::try_from(line.width()).unwrap_or(inner_width);
            let x = area.x + PADDING + inner_width.saturating_sub(width) / 2;
            buf.set_string(x, y, line, *style);
        }
    }
}
