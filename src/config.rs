//! Runtime settings.
//!
//! Settings are layered, highest precedence first:
//! 1. Command-line flags and their environment variables (`NEWS_API_KEY`,
//!    `NEWS_API_ENDPOINT`)
//! 2. The YAML file named by `--config`
//! 3. Built-in defaults
//!
//! The API key has no default; it must come from one of the first two.

use crate::cli::Cli;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Contents of the optional YAML config file.
///
/// ```yaml
/// api_key: "0123abcd..."
/// endpoint: "https://newsapi.org/v2/everything"
/// timeout_secs: 10
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    #[instrument(level = "info")]
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).await.map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::parse(path, &raw)?;
        info!("Loaded config file");
        Ok(config)
    }

    fn parse(path: &str, raw: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, empty config.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Invalid {
            path: path.to_string(),
            source,
        })
    }
}

/// Fully resolved settings.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub endpoint: Url,
    pub timeout: Duration,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    /// Resolve settings from the CLI, reading the config file if one was given.
    ///
    /// # Arguments
    ///
    /// * `cli` - Parsed command line, with environment fallbacks applied
    ///
    /// # Returns
    ///
    /// The merged [`Settings`], CLI values taking precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, the
    /// endpoint is not a URL, or no API key was supplied anywhere.
    pub async fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path).await?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let api_key = cli
            .api_key
            .clone()
            .or(file.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let endpoint = cli
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint).map_err(|source| ConfigError::Endpoint {
            endpoint: endpoint.clone(),
            source,
        })?;

        let timeout_secs = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> Cli {
        Cli {
            query: None,
            api_key: None,
            endpoint: None,
            config: None,
            timeout_secs: None,
            json: false,
        }
    }

    #[test]
    fn test_defaults_with_cli_key() {
        let mut args = cli();
        args.api_key = Some("cli-key".to_string());

        let settings = Settings::merge(&args, FileConfig::default()).unwrap();
        assert_eq!(settings.api_key, "cli-key");
        assert_eq!(settings.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut args = cli();
        args.api_key = Some("cli-key".to_string());
        args.timeout_secs = Some(2);
        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            endpoint: Some("http://localhost:8080/v2/everything".to_string()),
            timeout_secs: Some(30),
        };

        let settings = Settings::merge(&args, file).unwrap();
        assert_eq!(settings.api_key, "cli-key");
        assert_eq!(settings.endpoint.as_str(), "http://localhost:8080/v2/everything");
        assert_eq!(settings.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let err = Settings::merge(&cli(), FileConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let mut args = cli();
        args.api_key = Some("   ".to_string());
        let err = Settings::merge(&args, FileConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_bad_endpoint() {
        let mut args = cli();
        args.api_key = Some("k".to_string());
        args.endpoint = Some("not a url".to_string());
        let err = Settings::merge(&args, FileConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Endpoint { .. }));
    }

    #[test]
    fn test_parse_file() {
        let raw = "api_key: file-key\ntimeout_secs: 5\n";
        let file = FileConfig::parse("newgle.yaml", raw).unwrap();
        assert_eq!(file.api_key.as_deref(), Some("file-key"));
        assert_eq!(file.timeout_secs, Some(5));
        assert_eq!(file.endpoint, None);

        assert!(FileConfig::parse("empty.yaml", "\n").unwrap().api_key.is_none());
    }

    #[test]
    fn test_parse_file_rejects_unknown_keys() {
        let err = FileConfig::parse("newgle.yaml", "apikey: typo\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[tokio::test]
    async fn test_resolve_reads_file() {
        let path = std::env::temp_dir().join(format!("newgle-config-{}.yaml", std::process::id()));
        tokio::fs::write(&path, "api_key: from-file\n").await.unwrap();

        let mut args = cli();
        args.config = Some(path.to_string_lossy().into_owned());
        let settings = Settings::resolve(&args).await.unwrap();
        assert_eq!(settings.api_key, "from-file");
        assert!(!format!("{settings:?}").contains("from-file"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let mut args = cli();
        args.config = Some("/nonexistent/newgle.yaml".to_string());
        let err = Settings::resolve(&args).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
