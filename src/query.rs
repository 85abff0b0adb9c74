//! Request construction for the news search endpoint.
//!
//! A search is always bounded below by a fixed lookback window: only
//! articles published in the last [`LOOKBACK_DAYS`] days are requested.

use chrono::{Duration, NaiveDate, Utc};
use std::fmt;
use url::Url;

/// Size of the lookback window in days.
pub const LOOKBACK_DAYS: i64 = 7;

/// Fully-qualified request descriptor for one search.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub endpoint: Url,
    /// Raw query text. Not trimmed or validated; may be empty.
    pub q: String,
    /// Date floor, `today - LOOKBACK_DAYS`.
    pub from: NaiveDate,
    pub api_key: String,
}

impl SearchRequest {
    /// Build the request for `query` as seen on `today`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Search endpoint; the query string is appended to it
    /// * `query` - Search text exactly as typed, possibly empty
    /// * `api_key` - Credential from configuration
    /// * `today` - Current date; `from` is set [`LOOKBACK_DAYS`] before it
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    /// let req = SearchRequest::build(&endpoint, "rust", "key", today);
    /// assert_eq!(req.from_param(), "2023-12-27");
    /// ```
    pub fn build(endpoint: &Url, query: &str, api_key: &str, today: NaiveDate) -> Self {
        Self {
            endpoint: endpoint.clone(),
            q: query.to_string(),
            from: lookback_floor(today),
            api_key: api_key.to_string(),
        }
    }

    /// `from` rendered as `YYYY-MM-DD`.
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    /// Query parameters in the order they are sent.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("q", self.q.clone()),
            ("from", self.from_param()),
            ("apiKey", self.api_key.clone()),
        ]
    }

    /// `{endpoint}?q={query}&from={YYYY-MM-DD}&apiKey={key}`, form-encoded.
    pub fn to_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in self.params() {
                pairs.append_pair(name, &value);
            }
        }
        url
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequest")
            .field("endpoint", &self.endpoint.as_str())
            .field("q", &self.q)
            .field("from", &self.from_param())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Today's date in UTC, the clock the lookback window is measured on.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// First day of the lookback window ending on `today`.
pub fn lookback_floor(today: NaiveDate) -> NaiveDate {
    today - Duration::days(LOOKBACK_DAYS)
}
