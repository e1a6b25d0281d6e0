//! Application settings.
//!
//! Loaded in layers, later sources overriding earlier ones:
//!
//! 1. Bundled defaults (`rekakata.toml` shipped with the crate)
//! 2. `~/.config/rekakata/rekakata.toml`
//! 3. `./rekakata.toml`
//! 4. `REKAKATA_*` environment variables, with `__` between nested keys
//!    (`REKAKATA_GENERATION__MODEL`) and comma-separated platform lists
//!    (`REKAKATA_DEFAULT_PLATFORMS=tiktok,youtube`)
//!
//! Credentials for generation services are never part of settings; the
//! driver implementation reads its own secrets.

use config::{Config, Environment, File, FileFormat};
use rekakata_core::LengthBounds;
use rekakata_error::{ConfigError, RekaError, RekaResult};
use rekakata_platform::{Platform, PlatformOptimizer};
use rekakata_trending::FormatMatching;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../rekakata.toml");

/// Parameters passed to the generation driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Model identifier requested from the driver
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
        }
    }
}

/// Top-level settings.
///
/// # Example
///
/// ```toml
/// log_level = "debug"
/// output_dir = "exports"
/// default_platforms = ["tiktok"]
///
/// [generation]
/// model = "llama-3.1-8b-instant"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON-formatted logs
    pub json_logs: bool,
    /// Directory receiving exported prompts
    pub output_dir: PathBuf,
    /// Trending catalog document
    pub catalog_path: PathBuf,
    /// Platform names used when a request names none
    pub default_platforms: Vec<String>,
    /// Minimum normalized input length, in characters
    pub min_input_length: usize,
    /// Maximum normalized input length, in characters
    pub max_input_length: usize,
    /// Format selection mode
    pub format_matching: FormatMatching,
    /// Generation parameters
    pub generation: GenerationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let bounds = LengthBounds::default();
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            output_dir: PathBuf::from("output"),
            catalog_path: PathBuf::from("data/trending_elements.json"),
            default_platforms: Platform::iter().map(|p| p.to_string()).collect(),
            min_input_length: bounds.min,
            max_input_length: bounds.max,
            format_matching: FormatMatching::default(),
            generation: GenerationSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a single file, on top of the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed,
    /// or if the resulting values are inconsistent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> RekaResult<Self> {
        debug!("Loading settings from file");

        let settings: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                RekaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                RekaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load layered settings.
    ///
    /// Missing user files are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any present source is malformed or
    /// the merged values are inconsistent.
    #[instrument]
    pub fn load() -> RekaResult<Self> {
        debug!("Loading settings with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/rekakata/rekakata.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("rekakata").required(false))
            .add_source(
                Environment::with_prefix("REKAKATA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("default_platforms"),
            );

        let settings: Self = builder
            .build()
            .map_err(|e| {
                RekaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                RekaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Bundled defaults only, ignoring user files and the environment.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled file is malformed.
    pub fn bundled() -> RekaResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                RekaError::from(ConfigError::new(format!(
                    "Failed to parse bundled configuration: {}",
                    e
                )))
            })
    }

    /// Check cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for inverted length bounds, a zero
    /// minimum, a temperature outside `0.0..=2.0`, or a zero token limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_input_length == 0 || self.min_input_length > self.max_input_length {
            return Err(ConfigError::new(format!(
                "Invalid input length bounds: min {} max {}",
                self.min_input_length, self.max_input_length
            )));
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::new(format!(
                "Temperature must be between 0.0 and 2.0 (got {})",
                self.generation.temperature
            )));
        }
        if self.generation.max_tokens == 0 {
            return Err(ConfigError::new("max_tokens must be positive"));
        }
        Ok(())
    }

    /// Input length bounds.
    pub fn length_bounds(&self) -> LengthBounds {
        LengthBounds {
            min: self.min_input_length,
            max: self.max_input_length,
        }
    }

    /// Optimizer for the default platforms; unknown names become TikTok.
    pub fn platform_optimizer(&self) -> PlatformOptimizer {
        PlatformOptimizer::from_names(&self.default_platforms)
    }
}
