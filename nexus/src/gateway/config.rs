//! Gateway configuration from environment variables or `nexus.toml`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use super::factory::GatewayKind;
use crate::error::ConfigError;

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_kind() -> String {
    "http".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

/// Connection settings for the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway implementation: `http` or `local`.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Versioned API root, e.g. `http://127.0.0.1:8000/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request deadline in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl GatewayConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `NEXUS_GATEWAY` (optional, default: `http`): `http` | `local`
    /// - `NEXUS_API_BASE_URL` (optional, default: [`DEFAULT_BASE_URL`])
    /// - `NEXUS_REQUEST_TIMEOUT_SECS` (optional, default: 30)
    /// - `NEXUS_CONNECT_TIMEOUT_SECS` (optional, default: 10)
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let kind = env::var("NEXUS_GATEWAY").unwrap_or(defaults.kind);
        let base_url = env::var("NEXUS_API_BASE_URL").unwrap_or(defaults.base_url);
        let request_timeout_secs = parse_env_secs(
            "NEXUS_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout_secs,
        )?;
        let connect_timeout_secs = parse_env_secs(
            "NEXUS_CONNECT_TIMEOUT_SECS",
            defaults.connect_timeout_secs,
        )?;

        let config = Self {
            kind,
            base_url,
            request_timeout_secs,
            connect_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot: a known gateway kind, an http(s) base
    /// URL and non-zero timeouts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway_kind()?;
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.request_timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeouts must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn gateway_kind(&self) -> Result<GatewayKind, ConfigError> {
        GatewayKind::from_str(&self.kind).map_err(ConfigError::Invalid)
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn parse_env_secs(key: &str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{} must be a whole number of seconds", key))),
        Err(_) => Ok(default),
    }
}

/// Preference storage settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSettings {
    /// Where the theme preference is persisted. Defaults to
    /// `nexus-preferences.toml` in the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Contents of a `nexus.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NexusConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub preferences: PreferenceSettings,
}

impl NexusConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: NexusConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.gateway.validate()?;

        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `nexus.toml` in:
    /// 1. Current directory
    /// 2. `nexus/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("nexus.toml"),
            PathBuf::from("nexus/nexus.toml"),
            PathBuf::from("../nexus.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// File configuration when one exists, otherwise the environment.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::from_default_location() {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound) => Ok(Self {
                gateway: GatewayConfig::from_env()?,
                preferences: PreferenceSettings::default(),
            }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.gateway_kind().unwrap(), GatewayKind::Http);
    }

    #[test]
    fn test_parse_full_file() {
        let toml = r#"
[gateway]
type = "local"
base_url = "https://nexus.example.org/api/v1/"
request_timeout_secs = 5
connect_timeout_secs = 2

[preferences]
path = "/tmp/prefs.toml"
"#;
        let config: NexusConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.gateway.gateway_kind().unwrap(), GatewayKind::Local);
        assert_eq!(
            config.gateway.normalized_base_url(),
            "https://nexus.example.org/api/v1"
        );
        assert_eq!(config.gateway.request_timeout_secs, 5);
        assert_eq!(config.preferences.path, Some(PathBuf::from("/tmp/prefs.toml")));
    }

    #[test]
    fn test_parse_empty_file_uses_defaults() {
        let config: NexusConfig = toml::from_str("").unwrap();
        assert_eq!(config.gateway, GatewayConfig::default());
        assert!(config.preferences.path.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GatewayConfig {
            base_url: "ftp://example".to_string(),
            ..GatewayConfig::default()
        };
        assert!(config.validate().is_err());

        config.base_url = DEFAULT_BASE_URL.to_string();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 1;
        config.kind = "grpc".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gateway\nbase_url = ").unwrap();

        let err = NexusConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = NexusConfig::from_file("/definitely/not/here/nexus.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
