//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// What to convert and where to put the result.
    pub conversion: ConversionConfig,
    /// Logging and progress settings.
    pub debug: DebugConfig,
}

/// Input/output locations and output size for one conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Folder holding `{base_name}_pos_x.png` and the other five faces.
    pub input_folder: PathBuf,
    /// Folder the equirectangular image is written to.
    pub output_folder: PathBuf,
    /// Common file-name prefix of the face images.
    pub base_name: String,
    /// Output width in pixels.
    pub output_width: u32,
    /// Output height in pixels.
    pub output_height: u32,
}

/// Logging and progress configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log progress every this many percent of rows (0 disables).
    pub progress_step_percent: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from("input"),
            output_folder: PathBuf::from("output"),
            base_name: "sky".to_string(),
            output_width: 2048,
            output_height: 1024,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            progress_step_percent: 10,
        }
    }
}

/// Where a loaded [`Config`] came from.
///
/// Returned instead of logged, since config is read before logging is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing file.
    Loaded(PathBuf),
    /// No file existed; defaults were written to this path.
    Created(PathBuf),
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigOrigin::Loaded(path) => write!(f, "Loaded config from {}", path.display()),
            ConfigOrigin::Created(path) => {
                write!(f, "Created default config at {}", path.display())
            }
        }
    }
}

/// Default directory holding `config.ron`.
///
/// Uses the platform config directory, or `./config` if there is none.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("skywrap"))
        .unwrap_or_else(|| PathBuf::from("config"))
}

// --- Load / Save / Validate ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            Ok((config, ConfigOrigin::Loaded(config_path)))
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok((config, ConfigOrigin::Created(config_path)))
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Reject settings no conversion can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let conv = &self.conversion;
        if conv.output_width == 0 || conv.output_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "output size must be non-zero, got {}x{}",
                conv.output_width, conv.output_height
            )));
        }
        if conv.base_name.trim().is_empty() {
            return Err(ConfigError::Invalid("base name is empty".to_string()));
        }
        if self.debug.progress_step_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "progress step must be at most 100 percent, got {}",
                self.debug.progress_step_percent
            )));
        }
        Ok(())
    }
}
