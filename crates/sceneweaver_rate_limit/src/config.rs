//! Layered configuration.
//!
//! Sources, in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`sceneweaver.toml` shipped with the library)
//! 2. User config in home directory (`~/.config/sceneweaver/sceneweaver.toml`)
//! 3. User config in current directory (`./sceneweaver.toml`)

use crate::CourtesyDelay;
use config::{Config, File, FileFormat};
use sceneweaver_core::{AspectRatio, QualityMode};
use sceneweaver_error::{ConfigError, SceneweaverError, SceneweaverResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Settings for the scene generation call.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Text model identifier
    pub model: String,
    /// REST API base URL
    pub base_url: String,
    /// Thinking token budget in `Fast` mode (0 disables thinking)
    pub fast_thinking_budget: u32,
    /// Thinking token budget in `Thorough` mode
    pub thorough_thinking_budget: u32,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Extra attempts after a transient transport failure
    pub max_retries: usize,
    /// Base backoff between attempts, in milliseconds
    pub retry_backoff_ms: u64,
    /// Per-request timeout, in seconds
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Thinking budget for the given quality mode.
    pub fn thinking_budget(&self, mode: QualityMode) -> u32 {
        match mode {
            QualityMode::Fast => self.fast_thinking_budget,
            QualityMode::Thorough => self.thorough_thinking_budget,
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Settings for the asset render call.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Image model identifier
    pub model: String,
    /// REST API base URL
    pub base_url: String,
    /// Pause between consecutive bulk render calls, in milliseconds
    pub courtesy_delay_ms: u64,
    /// Aspect ratio used when a request does not specify one
    pub default_aspect_ratio: String,
}

impl RenderConfig {
    /// Courtesy delay for bulk rendering.
    pub fn courtesy_delay(&self) -> CourtesyDelay {
        CourtesyDelay::from_millis(self.courtesy_delay_ms)
    }

    /// Parsed default aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured ratio is not supported.
    pub fn aspect_ratio(&self) -> SceneweaverResult<AspectRatio> {
        self.default_aspect_ratio
            .parse()
            .map_err(|e: String| ConfigError::new(e).into())
    }
}

/// Settings for production history.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding the history file; `~` expands to the home directory
    pub path: String,
    /// Namespace key the history list is stored under
    pub namespace: String,
}

impl StoreConfig {
    /// The history directory with `~` expanded.
    pub fn resolved_path(&self) -> PathBuf {
        match self.path.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(&self.path)),
            None => PathBuf::from(&self.path),
        }
    }
}

/// Top-level Sceneweaver configuration.
///
/// # Example
///
/// ```no_run
/// use sceneweaver_rate_limit::SceneweaverConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SceneweaverConfig::load()?;
/// println!("Generating with {}", config.generation.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SceneweaverConfig {
    /// Scene generation settings
    pub generation: GenerationConfig,
    /// Asset render settings
    pub render: RenderConfig,
    /// History settings
    pub store: StoreConfig,
}

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../sceneweaver.toml");

impl SceneweaverConfig {
    /// The bundled defaults alone, ignoring user files.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file cannot be parsed.
    pub fn defaults() -> SceneweaverResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SceneweaverResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    #[instrument]
    pub fn load() -> SceneweaverResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/sceneweaver/sceneweaver.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("sceneweaver").required(false));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> SceneweaverResult<Self> {
        builder
            .build()
            .map_err(|e| {
                SceneweaverError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SceneweaverError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
