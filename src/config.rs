use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maven Central, used when no registry is configured
pub const DEFAULT_REGISTRY_URL: &str = "https://repo.maven.apache.org/maven2";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("sbt-releases/", env!("CARGO_PKG_VERSION"));

/// Timeout for a single HTTP request in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Registries tried in order; the first with a result wins
    pub registry_urls: Vec<String>,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    pub fallback: FallbackConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry_urls: vec![DEFAULT_REGISTRY_URL.to_string()],
            timeout_ms: DEFAULT_TIMEOUT_MS,
            fallback: FallbackConfig::default(),
        }
    }
}

/// Settings for the `maven-metadata.xml` fallback
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FallbackConfig {
    pub enabled: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ResolverConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads [`config_path`] if it exists, otherwise returns the defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Returns the path to the data directory for sbt-releases.
/// Uses $XDG_DATA_HOME/sbt-releases if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/sbt-releases,
/// or ./sbt-releases if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("sbt-releases.log")
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("sbt-releases")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("sbt-releases")
}
