//! Configuration for the GenderKit CLI.
//!
//! Raw TOML structs keep `Option` fields and stay close to the file. The
//! loader resolves them into [`Settings`], where every value is present and
//! validated.
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [logging]
//! filter = "genderkit=debug"
//! ```

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Overrides the default config location when set.
pub const CONFIG_PATH_ENV: &str = "GENDERKIT_CONFIG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Default, Deserialize)]
pub struct GenderKitConfig {
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl GenderKitConfig {
    /// Load the config from [`config_path`]. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Resolve raw values into [`Settings`], dropping any warnings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.resolve().0
    }

    /// Resolve raw values into [`Settings`].
    ///
    /// Unknown or blank values fall back to their defaults. Each fallback
    /// from an unusable value is reported in the returned warnings, so the
    /// caller can log them once its subscriber is up.
    #[must_use]
    pub fn resolve(&self) -> (Settings, Vec<String>) {
        let mut warnings = Vec::new();

        let format = self
            .output
            .as_ref()
            .and_then(|output| output.format.as_deref())
            .and_then(|raw| match OutputFormat::parse(raw) {
                Ok(format) => Some(format),
                Err(err) => {
                    warnings.push(format!("{err}; using {}", OutputFormat::default()));
                    None
                }
            })
            .unwrap_or_default();

        let log_filter = self
            .logging
            .as_ref()
            .and_then(|logging| logging.filter.as_deref())
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        (Settings { format, log_filter }, warnings)
    }
}

/// `$GENDERKIT_CONFIG`, else `~/.genderkit/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    select_config_path(env::var_os(CONFIG_PATH_ENV), dirs::home_dir())
}

fn select_config_path(custom: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(custom) = custom
        && !custom.is_empty()
    {
        return Some(PathBuf::from(custom));
    }
    home.map(|home| home.join(".genderkit").join("config.toml"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The bare gender token, one per line.
    #[default]
    Token,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid output format '{raw}'; expected one of: token, json")]
pub struct OutputFormatError {
    raw: String,
}

impl OutputFormatError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Token => "token",
            OutputFormat::Json => "json",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, OutputFormatError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "token" | "text" => Ok(OutputFormat::Token),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OutputFormatError {
                raw: raw.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    format: OutputFormat,
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
