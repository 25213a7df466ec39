use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub artifacts: ArtifactSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Locations of the startup artifacts
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSettings {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_features_path")]
    pub features_path: String,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            features_path: default_features_path(),
        }
    }
}

fn default_model_path() -> String { "artifacts/job_satisfaction_model.json".to_string() }
fn default_features_path() -> String { "artifacts/model_features.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBSAT__)
    /// 5. MODEL_PATH, FEATURES_PATH, LOG_LEVEL and LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBSAT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("JOBSAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOBSAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Worker count for the HTTP server; scoring is cheap so one is the default
    pub fn workers(&self) -> usize {
        self.server.workers.unwrap_or(1).max(1)
    }
}

/// Unprefixed variables that override the matching config keys
const ENV_OVERRIDES: [(&str, &str); 4] = [
    ("MODEL_PATH", "artifacts.model_path"),
    ("FEATURES_PATH", "artifacts.features_path"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    apply_overrides(settings, |var| std::env::var(var).ok())
}

fn apply_overrides<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    for (var, key) in ENV_OVERRIDES {
        if let Some(value) = lookup(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
