//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where catalog documents come from
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding labels.json, artistIndex.json and artists/
    #[serde(default = "default_data_dir")]
    pub dir: String,

    /// Fetch documents from this URL instead of `dir`
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("lofi-stats").join("api").to_string_lossy().to_string())
        .unwrap_or_else(|| "./public/api".to_string())
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            url: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8083
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("lofi-stats").join("config.toml")),
            Some(PathBuf::from("/etc/lofi-stats/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(dir) = lookup("LOFI_DATA_DIR") {
            self.data.dir = dir;
        }
        if let Some(url) = lookup("LOFI_DATA_URL") {
            self.data.url = Some(url).filter(|u| !u.is_empty());
        }

        // API overrides
        if let Some(host) = lookup("LOFI_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("LOFI_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("LOFI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOFI_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Lofi Stats Configuration
#
# Environment variables override these settings:
# - LOFI_DATA_DIR
# - LOFI_DATA_URL
# - LOFI_API_HOST
# - LOFI_API_PORT
# - LOFI_LOG_LEVEL
# - LOFI_LOG_FORMAT

[data]
# Directory holding labels.json, artistIndex.json and artists/<id>.json
dir = "./public/api"

# Fetch the documents over HTTP instead (takes precedence over dir)
# url = "https://example.com/api"

# Timeout for remote document requests (ms)
request_timeout_ms = 10000

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8083

# Allowed CORS origins (empty = allow any)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.data.dir, "./public/api");
        assert!(config.data.url.is_none());
        assert_eq!(config.api.port, 8083);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("[api]\nport = 9000\n").unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.data.request_timeout_ms, 10_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::parse("[api\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[data]\ndir = 5\n").unwrap();

        match Config::load(&path).unwrap_err() {
            ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }

        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("LOFI_DATA_DIR", "/srv/lofi"),
            ("LOFI_DATA_URL", "https://cdn.example/api"),
            ("LOFI_API_PORT", "not-a-port"),
            ("LOFI_LOG_FORMAT", "json"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.dir, "/srv/lofi");
        assert_eq!(config.data.url.as_deref(), Some("https://cdn.example/api"));
        assert_eq!(config.api.port, 8083);
        assert_eq!(config.logging.format, "json");
    }
}
