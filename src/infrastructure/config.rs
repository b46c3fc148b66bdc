//! Runtime configuration.
//!
//! Values are taken from, in order of priority:
//! 1. Command-line flags
//! 2. Environment variables (`SHELFSCAN_*`)
//! 3. The TOML file given with `--config`
//! 4. Built-in defaults

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_LOOKUP_URL: &str = "https://testocrtest.pythonanywhere.com/receive_isbn";
pub const DEFAULT_SAVE_URL: &str = "https://testocrtest.pythonanywhere.com/save_title";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_FILE: &str = "shelfscan.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(
    name = "shelfscan",
    version,
    about = "Scan or type an ISBN, price the book, and record where it is stocked"
)]
pub struct Cli {
    /// TOML file with default settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Endpoint that resolves an ISBN to a title
    #[arg(long, env = "SHELFSCAN_LOOKUP_URL")]
    pub lookup_url: Option<String>,

    /// Endpoint that stores a completed record
    #[arg(long, env = "SHELFSCAN_SAVE_URL")]
    pub save_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SHELFSCAN_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Character device (or file) that emits one barcode per line
    #[arg(long, env = "SHELFSCAN_SCANNER_DEVICE", value_name = "PATH")]
    pub scanner_device: Option<PathBuf>,

    /// Where log output goes; the terminal itself is taken by the UI
    #[arg(long, env = "SHELFSCAN_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// trace, debug, info, warn or error (RUST_LOG takes precedence)
    #[arg(long, env = "SHELFSCAN_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    lookup_url: Option<String>,
    save_url: Option<String>,
    timeout_secs: Option<u64>,
    scanner_device: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl FileConfig {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("timeout must be at least one second")]
    ZeroTimeout,
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub lookup_url: String,
    pub save_url: String,
    pub timeout: Duration,
    pub scanner_device: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::read(path)?,
            None => FileConfig::default(),
        };

        let timeout_secs = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let log_level = cli
            .log_level
            .or(file.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_level = Level::from_str(&log_level).map_err(|_| ConfigError::LogLevel(log_level))?;

        Ok(Self {
            lookup_url: cli
                .lookup_url
                .or(file.lookup_url)
                .unwrap_or_else(|| DEFAULT_LOOKUP_URL.to_string()),
            save_url: cli
                .save_url
                .or(file.save_url)
                .unwrap_or_else(|| DEFAULT_SAVE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            scanner_device: cli.scanner_device.or(file.scanner_device),
            log_file: cli
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_level,
        })
    }
}
