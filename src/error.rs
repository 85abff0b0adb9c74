//! Error types.
//!
//! [`SearchFailure`] is the one error kind a search can produce. It never
//! escapes the screen controller: a failed search is logged and shows up as
//! an empty result list. [`ConfigError`] is fatal at startup and
//! [`OpenError`] covers handing an article link to the platform opener.

use thiserror::Error;

/// Any failure while calling the news endpoint or reading its response.
#[derive(Debug, Error)]
pub enum SearchFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("news API error ({code}): {message}")]
    Api { code: String, message: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("response has no `articles` field")]
    MissingArticles,
}

impl From<reqwest::Error> for SearchFailure {
    fn from(err: reqwest::Error) -> Self {
        SearchFailure::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SearchFailure {
    fn from(err: serde_json::Error) -> Self {
        SearchFailure::Parse(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key: pass --api-key, set NEWS_API_KEY, or add `api_key` to the config file")]
    MissingApiKey,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid endpoint {endpoint}: {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// The platform refused to open an article link.
#[derive(Debug, Error)]
#[error("could not open {url}: {reason}")]
pub struct OpenError {
    pub url: String,
    pub reason: String,
}
