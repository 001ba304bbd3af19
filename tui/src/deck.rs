//! Testimonial Decks
//!
//! A deck is the ordered list of testimonials the carousel rotates through.
//! Decks are TOML files with one `[[testimonial]]` table per entry:
//!
//! ```toml
//! [[testimonial]]
//! author = "Amina K."
//! role = "Founder, Kilele Studio"
//! quote = "Delivered ahead of schedule and the site finally loads fast."
//! ```
//!
//! When no deck file is configured, the built-in deck is used.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a deck
#[derive(Debug, Error)]
pub enum DeckError {
    /// Failed to read the deck file
    #[error("Failed to read deck file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse deck: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A testimonial is missing required text
    #[error("Testimonial #{position} has an empty {field}")]
    EmptyField {
        /// 1-based position in the deck
        position: usize,
        /// Name of the empty field
        field: &'static str,
    },
}

/// One client testimonial
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    /// Who said it
    pub author: String,
    /// Their role or company
    #[serde(default)]
    pub role: String,
    /// What they said
    pub quote: String,
}

impl Testimonial {
    /// Create a testimonial
    pub fn new(
        author: impl Into<String>,
        role: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            role: role.into(),
            quote: quote.into(),
        }
    }

    /// Attribution line shown under the quote
    #[must_use]
    pub fn attribution(&self) -> String {
        if self.role.is_empty() {
            format!("- {}", self.author)
        } else {
            format!("- {}, {}", self.author, self.role)
        }
    }
}

/// An ordered collection of testimonials
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Deck {
    /// Testimonials in display order
    #[serde(default, rename = "testimonial")]
    pub testimonials: Vec<Testimonial>,
}

impl Deck {
    /// The deck shipped with the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            testimonials: vec![
                Testimonial::new(
                    "Amina K.",
                    "Founder, Kilele Studio",
                    "Delivered ahead of schedule and the new site finally loads fast on \
                     mobile. Our enquiries doubled within a month.",
                ),
                Testimonial::new(
                    "Daniel O.",
                    "Product Lead, Savanna Pay",
                    "Clear communication from the first call to launch. Every design \
                     decision came with a reason we could understand.",
                ),
                Testimonial::new(
                    "Grace W.",
                    "Marketing Director, Jenga Co.",
                    "The portfolio redesign gave our brand a confident, modern voice. \
                     We still get compliments on it.",
                ),
            ],
        }
    }

    /// Parse a deck from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ParseError`] for malformed TOML and
    /// [`DeckError::EmptyField`] for a testimonial without author or quote.
    pub fn from_toml_str(content: &str) -> Result<Self, DeckError> {
        let deck: Self = toml::from_str(content)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Load a deck from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(|e| DeckError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let deck = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), count = deck.len(), "Loaded testimonial deck");
        Ok(deck)
    }

    /// Load an explicitly requested deck, else the default deck file if it
    /// exists, else the built-in deck
    ///
    /// # Errors
    ///
    /// An explicit `path` must be readable. The default file is only read if
    /// present, but must parse when it is.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DeckError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_deck_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => {
                tracing::debug!("No deck file configured, using built-in deck");
                Ok(Self::builtin())
            }
        }
    }

    /// Number of testimonials
    #[must_use]
    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    /// Whether the deck has no testimonials
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }

    fn validate(&self) -> Result<(), DeckError> {
        for (i, t) in self.testimonials.iter().enumerate() {
            let field = if t.author.trim().is_empty() {
                "author"
            } else if t.quote.trim().is_empty() {
                "quote"
            } else {
                continue;
            };
            return Err(DeckError::EmptyField {
                position: i + 1,
                field,
            });
        }
        Ok(())
    }
}

/// Default deck location next to the carousel config file
#[must_use]
pub fn default_deck_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("testimonial-carousel").join("testimonials.toml"))
}
