//! Carousel Configuration
//!
//! The only tunable is the auto-advance timer: its period and whether it
//! runs at all. Values are layered, highest priority first:
//!
//! 1. CLI arguments (applied by the host through [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! The file lives at `$XDG_CONFIG_HOME/testimonial-carousel/carousel.toml`
//! (typically `~/.config/testimonial-carousel/carousel.toml`).
//!
//! # Example Configuration
//!
//! ```toml
//! [carousel]
//! auto_advance_ms = 5000
//! auto_advance = true
//! ```
//!
//! # Environment
//!
//! - `CAROUSEL_AUTO_ADVANCE_MS`: period in milliseconds
//! - `CAROUSEL_AUTO_ADVANCE`: `0`/`false` disables auto-advance

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Auto-advance period used when nothing else is configured
pub const DEFAULT_AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(5000);

const ENV_AUTO_ADVANCE_MS: &str = "CAROUSEL_AUTO_ADVANCE_MS";
const ENV_AUTO_ADVANCE: &str = "CAROUSEL_AUTO_ADVANCE";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Settings the carousel controller is constructed with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Time between automatic advances
    pub auto_advance_period: Duration,

    /// Whether the auto-advance timer runs at all
    pub auto_advance: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_period: DEFAULT_AUTO_ADVANCE_PERIOD,
            auto_advance: true,
        }
    }
}

impl CarouselConfig {
    /// Auto-advancing configuration with the given period
    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        Self {
            auto_advance_period: period,
            auto_advance: true,
        }
    }

    /// Configuration with auto-advance switched off
    #[must_use]
    pub fn manual_only() -> Self {
        Self {
            auto_advance: false,
            ..Self::default()
        }
    }

    /// Check that the values can drive a timer
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero period while
    /// auto-advance is enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_advance && self.auto_advance_period.is_zero() {
            return Err(ConfigError::ValidationError(
                "auto_advance_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[carousel]` section of the TOML configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CarouselSection {
    /// Auto-advance period in milliseconds
    pub auto_advance_ms: Option<u64>,

    /// Whether auto-advance is enabled
    pub auto_advance: Option<bool>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CarouselToml {
    /// Carousel section
    pub carousel: CarouselSection,
}

// =============================================================================
// Loaded Configuration
// =============================================================================

/// Configuration resolved from every layer, with provenance
#[derive(Clone, Debug)]
pub struct CarouselConfigFile {
    /// The resolved carousel settings
    pub carousel: CarouselConfig,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    source: ConfigSource,
}

impl Default for CarouselConfigFile {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl CarouselConfigFile {
    /// Highest-priority layer that set a value
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("testimonial-carousel").join("carousel.toml"))
}

/// Load configuration from the default path and the environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed,
/// or if the resolved values are invalid. A missing file is not an error.
pub fn load_config() -> Result<CarouselConfigFile, ConfigError> {
    load_config_from_path(default_config_path().as_deref())
}

/// Load configuration from a specific path and the environment
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// resolved values are invalid.
pub fn load_config_from_path(path: Option<&Path>) -> Result<CarouselConfigFile, ConfigError> {
    let mut config = CarouselConfigFile::default();

    if let Some(config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.to_path_buf(),
                    source: e,
                })?;

            let toml_config: CarouselToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.to_path_buf());

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);
    config.carousel.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut CarouselConfigFile, toml: &CarouselToml) {
    let section = &toml.carousel;
    if let Some(ms) = section.auto_advance_ms {
        config.carousel.auto_advance_period = Duration::from_millis(ms);
        config.source = ConfigSource::File;
    }
    if let Some(enabled) = section.auto_advance {
        config.carousel.auto_advance = enabled;
        config.source = ConfigSource::File;
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut CarouselConfigFile) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

fn apply_env_from(config: &mut CarouselConfigFile, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(raw) = lookup(ENV_AUTO_ADVANCE_MS) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => {
                config.carousel.auto_advance_period = Duration::from_millis(ms);
                config.source = ConfigSource::Env;
            }
            Err(e) => {
                tracing::warn!(var = ENV_AUTO_ADVANCE_MS, value = %raw, error = %e, "Ignoring unparsable value");
            }
        }
    }
    if let Some(raw) = lookup(ENV_AUTO_ADVANCE) {
        let enabled = raw != "0" && !raw.eq_ignore_ascii_case("false");
        config.carousel.auto_advance = enabled;
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Auto-advance period override (milliseconds)
    pub auto_advance_ms: Option<u64>,

    /// Auto-advance enabled override
    pub auto_advance: Option<bool>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set auto-advance period override
    #[must_use]
    pub fn with_auto_advance_ms(mut self, ms: u64) -> Self {
        self.auto_advance_ms = Some(ms);
        self
    }

    /// Set auto-advance enabled override
    #[must_use]
    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = Some(enabled);
        self
    }

    /// Apply overrides to a configuration and re-validate it
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the overridden values are
    /// invalid.
    pub fn apply(&self, config: &mut CarouselConfigFile) -> Result<(), ConfigError> {
        if self.auto_advance_ms.is_some() || self.auto_advance.is_some() {
            config.source = ConfigSource::Cli;
        }

        if let Some(ms) = self.auto_advance_ms {
            config.carousel.auto_advance_period = Duration::from_millis(ms);
        }
        if let Some(enabled) = self.auto_advance {
            config.carousel.auto_advance = enabled;
        }

        config.carousel.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================
