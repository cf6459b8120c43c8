use crate::core::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use anyhow::Result;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;

pub const TOKEN_ENV_VAR: &str = "HUBSTAFF_API_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub batch: BatchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// Defaults, then `config/<CONFIG_ENV>`, then `HUBSTAFF_*` variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());
        Self::load(Path::new("config"), &config_env, Self::environment())
    }

    /// Defaults, then `<dir>/<config_env>.*` when present, then `environment`
    pub fn load(dir: &Path, config_env: &str, environment: Environment) -> Result<Self, ConfigError> {
        let file = dir.join(config_env);

        let config = Self::defaults()?
            .add_source(File::with_name(&file.to_string_lossy()).required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    /// `HUBSTAFF_API__BASE_URL` -> `api.base_url`
    pub fn environment() -> Environment {
        Environment::with_prefix("HUBSTAFF")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Defaults overlaid with a single config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::from(path))
            .build()?;

        config.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("batch.concurrency", 4)?
            .set_default("logging.level", "info")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                user_agent: None,
            },
            batch: BatchConfig { concurrency: 4 },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

/// Pre-issued Hubstaff bearer token
#[derive(Clone, Default)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    /// No token; requests go out without an Authorization header
    pub fn none() -> Self {
        Self { token: None }
    }

    /// Read the token once from `HUBSTAFF_API_API_KEY`
    pub fn from_env() -> Self {
        match env::var(TOKEN_ENV_VAR) {
            Ok(token) => Self::new(token),
            Err(_) => {
                tracing::warn!("{} not set; calls will be sent unauthenticated", TOKEN_ENV_VAR);
                Self::none()
            }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.token.is_some() { "<redacted>" } else { "<none>" };
        f.debug_struct("Credentials").field("token", &shown).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://localhost:9000\"\n\n[batch]\nconcurrency = 16").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:9000");
        assert_eq!(settings.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.batch.concurrency, 16);
        assert_eq!(settings.logging.level, "info");
    }

    fn env_map(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::environment().source(Some(map))
    }

    #[test]
    fn test_environment_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(
            dir.path(),
            "default",
            env_map(&[
                ("HUBSTAFF_API__BASE_URL", "http://localhost:7000"),
                ("HUBSTAFF_API__TIMEOUT_SECS", "5"),
                ("HUBSTAFF_API_API_KEY", "not-a-setting"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api.base_url, "http://localhost:7000");
        assert_eq!(settings.api.timeout_secs, 5);
        assert_eq!(settings.batch.concurrency, 4);
    }

    #[test]
    fn test_config_env_selects_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("staging.toml"),
            "[api]\nbase_url = \"https://staging.example.com\"\ntimeout_secs = 12\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let settings = Settings::load(
            dir.path(),
            "staging",
            env_map(&[("HUBSTAFF_API__TIMEOUT_SECS", "3")]),
        )
        .unwrap();
        assert_eq!(settings.api.base_url, "https://staging.example.com");
        assert_eq!(settings.api.timeout_secs, 3);
        assert_eq!(settings.logging.level, "debug");

        let settings = Settings::load(dir.path(), "production", env_map(&[])).unwrap();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "https://api.hubstaff.com");
        assert!(settings.api.user_agent.is_none());
    }

    #[test]
    fn test_blank_token_is_no_token() {
        assert!(Credentials::new("  ").token().is_none());
        assert_eq!(Credentials::new("abc").token(), Some("abc"));
    }

    #[test]
    fn test_credentials_debug_redacted() {
        let debug = format!("{:?}", Credentials::new("very-secret"));
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("redacted"));
    }
}
