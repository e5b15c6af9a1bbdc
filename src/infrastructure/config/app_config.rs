//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{CuratedEntry, ImageSize};
use crate::domain::errors::ConfigError;

use super::args::CliArgs;

const APP_NAME: &str = "portrait-resolver";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Resolution engine tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Rendition requested when the caller does not name one.
    #[serde(default)]
    pub default_size: ImageSize,

    /// Rendition used by batch preloads.
    #[serde(default = "default_preload_size")]
    pub preload_size: ImageSize,

    /// Seconds a single probe may take before it counts as failed.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Images must be strictly larger than this on both sides.
    #[serde(default = "default_min_dimension")]
    pub min_dimension: u32,

    /// User agent for probe requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ResolverConfig {
    /// Probe deadline as a duration.
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_size: ImageSize::default(),
            preload_size: default_preload_size(),
            probe_timeout_secs: default_probe_timeout_secs(),
            min_dimension: default_min_dimension(),
            user_agent: None,
        }
    }
}

fn default_preload_size() -> ImageSize {
    ImageSize::new(ImageSize::PRELOAD)
}

const fn default_probe_timeout_secs() -> u64 {
    5
}

const fn default_min_dimension() -> u32 {
    50
}

/// Application configuration from file and CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Resolution engine settings.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Extra curated portraits, appended after the built-in ones.
    #[serde(default)]
    pub curated: Vec<CuratedEntry>,
}

impl AppConfig {
    /// Loads configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields defaults; a missing
    /// file that was named explicitly is an error.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.config = Some(path);

        Ok(config)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(size) = &args.size {
            self.resolver.default_size = ImageSize::new(size.clone());
        }
        if let Some(timeout) = args.timeout_secs {
            self.resolver.probe_timeout_secs = timeout;
        }
        if let Some(min_dimension) = args.min_dimension {
            self.resolver.min_dimension = min_dimension;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns effective log path, if file logging is enabled.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone()
    }
}
