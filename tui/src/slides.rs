//! Slide and Indicator Handles
//!
//! Terminal-side handles the carousel toggles. Rendering reads the active
//! flag back; nothing else writes it.

use carousel_core::Activatable;

use crate::deck::{Deck, Testimonial};

/// One testimonial card
#[derive(Clone, Debug)]
pub struct CardView {
    /// Content shown on the card
    pub testimonial: Testimonial,
    active: bool,
}

impl CardView {
    /// Wrap a testimonial as an inactive card
    pub fn new(testimonial: Testimonial) -> Self {
        Self {
            testimonial,
            active: false,
        }
    }
}

impl Activatable for CardView {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// One indicator dot, selectable with its hotkey
#[derive(Clone, Debug)]
pub struct IndicatorDot {
    /// Digit key that jumps to this dot's slide, if it has one
    pub hotkey: Option<char>,
    active: bool,
}

impl IndicatorDot {
    /// Dot for the slide at `position` (0-based)
    pub fn for_position(position: usize) -> Self {
        let hotkey = u32::try_from(position + 1)
            .ok()
            .filter(|n| *n <= 9)
            .and_then(|n| char::from_digit(n, 10));
        Self {
            hotkey,
            active: false,
        }
    }
}

impl Activatable for IndicatorDot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Build one card and one dot per testimonial
pub fn build_handles(deck: Deck) -> (Vec<CardView>, Vec<IndicatorDot>) {
    let cards: Vec<CardView> = deck.testimonials.into_iter().map(CardView::new).collect();
    let dots = (0..cards.len()).map(IndicatorDot::for_position).collect();
    (cards, dots)
}
