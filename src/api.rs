//! News endpoint interaction.
//!
//! The network call sits behind the [`NewsSource`] trait so the screen
//! controller can be driven by any backend:
//! - [`NewsSource`]: core trait, one request in, raw articles out
//! - [`NewsApiClient`]: reqwest-backed implementation for the NewsAPI
//!   `everything` endpoint
//!
//! One request per search. There is no retry, backoff, or rate limiting;
//! every failure comes back as a [`SearchFailure`] for the caller to log.

use crate::error::SearchFailure;
use crate::models::{Article, NewsResponse};
use crate::query::SearchRequest;
use crate::utils::truncate_for_log;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Something that can answer a [`SearchRequest`] with a raw article list.
pub trait NewsSource {
    /// Perform the search. The returned articles are unfiltered and in
    /// response order.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, SearchFailure>;
}

/// HTTP client for the NewsAPI search endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
}

impl NewsApiClient {
    /// Create a client whose requests give up after `timeout`.
    ///
    /// The endpoint rejects requests without a `User-Agent`, so one is always
    /// sent.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Total time allowed per request, connect through body
    ///
    /// # Errors
    ///
    /// Returns [`SearchFailure::Network`] if the TLS backend cannot be
    /// initialized.
    pub fn new(timeout: Duration) -> Result<Self, SearchFailure> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl NewsSource for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(q = %request.q, from = %request.from_param()))]
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, SearchFailure> {
        let t0 = Instant::now();
        let resp = self.http.get(request.to_url()).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        let dt = t0.elapsed();
        debug!(status, bytes = body.len(), elapsed_ms = dt.as_millis() as u64, "Search response received");

        let articles = interpret_response(status, &body)?;
        info!(
            count = articles.len(),
            elapsed_ms = dt.as_millis() as u64,
            "Search returned articles"
        );
        Ok(articles)
    }
}

/// Turn a raw HTTP status and body into the article list, or the failure
/// that explains why there is none.
///
/// # Arguments
///
/// * `status` - HTTP status code of the response
/// * `body` - Raw response body
///
/// # Returns
///
/// The unfiltered articles in response order. Individual `null` string
/// fields are tolerated; they read as empty strings.
///
/// # Errors
///
/// - [`SearchFailure::Api`] when the body is the endpoint's error envelope
/// - [`SearchFailure::Status`] for any other non-2xx status
/// - [`SearchFailure::Parse`] when the body is not a JSON response object
/// - [`SearchFailure::MissingArticles`] when `articles` is absent
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<Article>, SearchFailure> {
    let parsed = serde_json::from_str::<NewsResponse>(body);

    if !(200..300).contains(&status) {
        // The endpoint usually explains itself in an error envelope.
        if let Ok(envelope) = parsed {
            if envelope.is_error() {
                return Err(api_failure(envelope));
            }
        }
        warn!(status, body = %truncate_for_log(body, 300), "Non-success status from news endpoint");
        return Err(SearchFailure::Status {
            status,
            body: truncate_for_log(body, 300),
        });
    }

    let envelope = parsed?;
    if envelope.is_error() {
        return Err(api_failure(envelope));
    }
    debug!(total_results = ?envelope.total_results, "Parsed search response");
    envelope.articles.ok_or(SearchFailure::MissingArticles)
}

fn api_failure(envelope: NewsResponse) -> SearchFailure {
    SearchFailure::Api {
        code: envelope.code.unwrap_or_else(|| "unknown".to_string()),
        message: envelope.message.unwrap_or_default(),
    }
}
