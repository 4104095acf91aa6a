//! Run configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use variator_core::{GenerationDefaults, LogFormat};
use variator_error::ConfigError;
use variator_models::{
    BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_ENV_VAR, env_override,
};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "VARIATOR_CONFIG";

/// Configuration file read from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "variator.toml";

/// Question explored when none is configured.
pub const DEFAULT_QUESTION: &str = "What is the capital of Ukraine?";

/// Settings for one run of the `variator` binary.
///
/// The API key is never read from the file, only from `OPENAI_API_KEY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct VariatorConfig {
    /// Question to generate variations of
    question: String,
    /// Number of variations to request
    variation_count: usize,
    /// Completion model identifier
    model: String,
    /// Base URL of the completions API
    base_url: String,
    /// Log output format
    log_format: LogFormat,
    /// Generation defaults for every request
    generation: GenerationDefaults,
}

impl Default for VariatorConfig {
    fn default() -> Self {
        Self {
            question: DEFAULT_QUESTION.to_string(),
            variation_count: crate::DEFAULT_VARIATION_COUNT,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_format: LogFormat::default(),
            generation: GenerationDefaults::default(),
        }
    }
}

impl VariatorConfig {
    /// Load configuration from a TOML file. Missing fields take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e)).with_path(&path)
        })?;
        content.parse::<Self>().map_err(|e| e.with_path(&path))
    }

    /// Resolve configuration for the binary.
    ///
    /// Uses the file named by `VARIATOR_CONFIG`, else `variator.toml` in the
    /// working directory if it exists, else built-in defaults. Non-blank
    /// `OPENAI_COMPLETION_MODEL` and `OPENAI_BASE_URL` then override the
    /// model and base URL.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::resolve_path(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                Self::from_file(path)?
            }
            None => {
                debug!("No configuration file, using defaults");
                Self::default()
            }
        };
        Ok(config.with_env_overrides(
            env_override(MODEL_ENV_VAR),
            env_override(BASE_URL_ENV_VAR),
        ))
    }

    /// Replaces the model and base URL with the given overrides.
    ///
    /// `None` and blank values keep the current setting.
    pub fn with_env_overrides(mut self, model: Option<String>, base_url: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            debug!(model = %model, "Model overridden by environment");
            self.model = model;
        }
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            debug!(base_url = %base_url, "Base URL overridden by environment");
            self.base_url = base_url;
        }
        self
    }

    fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            fallback.is_file().then_some(fallback)
        })
    }
}

impl std::str::FromStr for VariatorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}
