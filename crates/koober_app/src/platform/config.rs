use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use koober_engine::RemoteSettings;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "koober.ron";
const CONFIG_ENV: &str = "KOOBER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid api_base_url {0:?}: {1}")]
    BaseUrl(String, url::ParseError),
    #[error("invalid log_level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Use the offline account instead of the cloud API.
    pub use_fake_remote: bool,
    pub session_dir: PathBuf,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: RemoteSettings::default().base_url.to_string(),
            use_fake_remote: true,
            session_dir: PathBuf::from(".koober"),
            connect_timeout_ms: RemoteSettings::DEFAULT_CONNECT_TIMEOUT_MS,
            request_timeout_ms: RemoteSettings::DEFAULT_REQUEST_TIMEOUT_MS,
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn remote_settings(&self) -> Result<RemoteSettings, ConfigError> {
        let base_url = url::Url::parse(&self.api_base_url)
            .map_err(|err| ConfigError::BaseUrl(self.api_base_url.clone(), err))?;
        Ok(RemoteSettings {
            base_url,
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        })
    }

    pub fn level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

/// Loads `$KOOBER_CONFIG`, or `./koober.ron` when the variable is unset.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    load(&path)
}

/// A missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
