// Required external crates for configuration management and serialization
use serde::Deserialize;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Environment, File};

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "WEBUI_DEMO";

/// Configuration for the HTTP server
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

/// Bounds of the simulated network delay
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Shortest delay in milliseconds (inclusive)
    pub min_ms: u64,
    /// Longest delay in milliseconds (exclusive)
    pub max_ms: u64,
}

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
    /// Directory receiving the daily rolling log files
    pub directory: Option<PathBuf>,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Server-related settings
    pub server: ServerConfig,
    /// Simulated latency settings
    pub latency: LatencyConfig,
    /// Logging-related settings
    pub logging: LoggingConfig,
}

impl Settings {
    /// Loads settings from the `config` directory of the current working
    /// directory. See [`Settings::from_dir`].
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::current_dir()
            .map_err(|e| ConfigError::Message(
                format!("Failed to get current directory: {}", e)
            ))?
            .join("config");

        Self::from_dir(&config_dir)
    }

    /// Creates a new Settings instance by loading config from multiple sources
    /// in the following order of precedence (highest to lowest):
    /// 1. Environment variables prefixed with WEBUI_DEMO_ (nested keys joined by `__`)
    /// 2. Local config file (local.toml) if present
    /// 3. Default config file (default.toml)
    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        if !config_dir.exists() {
            return Err(ConfigError::Message(
                format!("Config directory not found at: {}", config_dir.display())
            ));
        }

        let default_config = config_dir.join("default.toml");
        if !default_config.exists() {
            return Err(ConfigError::Message(
                format!("Default configuration file not found at: {}", default_config.display())
            ));
        }

        let local_config = config_dir.join("local.toml");

        let settings = Config::builder()
            .add_source(File::from(default_config))
            .add_source(File::from(local_config).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message(
                "Port must be between 1 and 65535, got: 0".to_string()
            ));
        }

        if self.latency.max_ms < self.latency.min_ms {
            return Err(ConfigError::Message(format!(
                "latency.max_ms ({}) must not be lower than latency.min_ms ({})",
                self.latency.max_ms, self.latency.min_ms
            )));
        }

        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }?;

        // Create the log directory if configured and doesn't exist
        if let Some(log_dir) = &self.logging.directory {
            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    ConfigError::Message(format!(
                        "Failed to create log directory at {}: {}",
                        log_dir.display(), e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Base URL clients use to reach the server
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    const DEFAULT_TOML: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[latency]
min_ms = 100
max_ms = 600

[logging]
level = "info"
"#;

    fn settings() -> Settings {
        Settings {
            server: ServerConfig { host: "127.0.0.1".to_string(), port: 8080 },
            latency: LatencyConfig { min_ms: 100, max_ms: 600 },
            logging: LoggingConfig { level: "info".to_string(), directory: None },
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut s = settings();
        s.server.port = 0;
        assert!(s.validate().is_err());

        let mut s = settings();
        s.latency = LatencyConfig { min_ms: 600, max_ms: 100 };
        assert!(s.validate().is_err());

        let mut s = settings();
        s.logging.level = "verbose".to_string();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_zero_latency_is_valid() {
        let mut s = settings();
        s.latency = LatencyConfig { min_ms: 0, max_ms: 0 };
        assert!(s.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_dir_merges_local_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), DEFAULT_TOML).unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[latency]\nmin_ms = 0\nmax_ms = 0\n",
        )
        .unwrap();

        let s = Settings::from_dir(dir.path()).unwrap();
        assert_eq!(s.server.port, 8080);
        assert_eq!(s.latency, LatencyConfig { min_ms: 0, max_ms: 0 });
        assert_eq!(s.server_url(), "http://127.0.0.1:8080");
    }

    #[test]
    #[serial]
    fn test_from_dir_requires_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("default.toml"));

        let missing = dir.path().join("nope");
        assert!(Settings::from_dir(&missing).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), DEFAULT_TOML).unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 8181\n").unwrap();

        std::env::set_var("WEBUI_DEMO_SERVER__PORT", "9100");
        std::env::set_var("WEBUI_DEMO_LATENCY__MIN_MS", "7");
        let loaded = Settings::from_dir(dir.path());
        std::env::remove_var("WEBUI_DEMO_SERVER__PORT");
        std::env::remove_var("WEBUI_DEMO_LATENCY__MIN_MS");

        let s = loaded.unwrap();
        assert_eq!(s.server.port, 9100);
        assert_eq!(s.latency, LatencyConfig { min_ms: 7, max_ms: 600 });
        assert_eq!(s.server.host, "127.0.0.1");
    }

    #[test]
    fn test_validate_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs").join("demo");

        let mut s = settings();
        s.logging.directory = Some(log_dir.clone());
        s.validate().unwrap();
        assert!(log_dir.is_dir());
    }
}
