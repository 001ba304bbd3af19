//! Log Destination
//!
//! The app owns the terminal in raw mode on the alternate screen, so log
//! lines must never reach stdout or stderr while it runs. They are written
//! to a file when one is given and dropped otherwise.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Where the tracing subscriber writes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogDestination {
    /// Append to this file
    File(PathBuf),
    /// Drop every record
    Discard,
}

impl LogDestination {
    /// File destination if a path was given, else discard
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Discard, Self::File)
    }

    /// Writer for the fmt layer
    ///
    /// # Errors
    ///
    /// Returns the IO error if the log file cannot be opened for appending.
    pub fn make_writer(&self) -> io::Result<BoxMakeWriter> {
        match self {
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
            Self::Discard => Ok(BoxMakeWriter::new(io::sink)),
        }
    }

    /// Filter for this destination
    ///
    /// `RUST_LOG` wins over `level` for files. Discarded output is filtered
    /// out entirely so no record is even formatted.
    #[must_use]
    pub fn filter(&self, level: &str) -> EnvFilter {
        match self {
            Self::File(_) => {
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
            }
            Self::Discard => EnvFilter::new("off"),
        }
    }
}
