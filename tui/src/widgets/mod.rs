//! Custom Widgets

pub mod indicator_row;
pub mod testimonial_card;

pub use indicator_row::IndicatorRow;
pub use testimonial_card::TestimonialCard;
