//! The search screen controller.
//!
//! [`SearchScreen`] owns the [`SearchState`] for one session and is the only
//! thing that mutates it. The presentation layer reads the state through
//! accessors and feeds three events back in:
//!
//! 1. [`SearchScreen::on_submit`]: build request, fetch, filter, reset paging
//! 2. [`SearchScreen::on_load_more`]: grow the visible window
//! 3. [`SearchScreen::on_open_article`]: hand a link to the platform opener
//!
//! Every event takes `&mut self` (or `&self`), so events run one at a time
//! and a search's continuation can never interleave with another event.

use crate::api::NewsSource;
use crate::error::OpenError;
use crate::filter::filter_articles;
use crate::models::Article;
use crate::page::PageWindow;
use crate::query::{SearchRequest, utc_today};
use chrono::NaiveDate;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Process-local state of the screen. Lives as long as the session.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    results: Vec<Article>,
    window: PageWindow,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Filtered results of the last completed search, in response order.
    pub fn results(&self) -> &[Article] {
        &self.results
    }

    pub fn displayed_count(&self) -> usize {
        self.window.displayed_count()
    }

    pub fn visible(&self) -> &[Article] {
        self.window.visible(&self.results)
    }

    pub fn can_load_more(&self) -> bool {
        self.window.can_extend(self.results.len())
    }
}

/// Opens article links outside the application.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens links with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        open::that(url).map_err(|e| OpenError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug)]
pub struct SearchScreen<S, O = SystemOpener> {
    source: S,
    opener: O,
    endpoint: Url,
    api_key: String,
    state: SearchState,
}

impl<S, O> SearchScreen<S, O>
where
    S: NewsSource,
    O: UrlOpener,
{
    pub fn new(source: S, opener: O, endpoint: Url, api_key: String) -> Self {
        Self {
            source,
            opener,
            endpoint,
            api_key,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn visible(&self) -> &[Article] {
        self.state.visible()
    }

    pub fn can_load_more(&self) -> bool {
        self.state.can_load_more()
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn opener(&self) -> &O {
        &self.opener
    }

    /// Text-input binding. The query survives searches.
    pub fn set_query(&mut self, text: &str) {
        self.state.query = text.to_string();
    }

    /// Run a search as of today's UTC date.
    pub async fn on_submit(&mut self, query: &str) -> usize {
        self.submit_on(query, utc_today()).await
    }

    /// Run a search as of `today`.
    ///
    /// # Arguments
    ///
    /// * `query` - Search text exactly as typed; becomes the current query
    /// * `today` - Date the lookback window ends on
    ///
    /// # Returns
    ///
    /// The number of results kept after filtering. Failures are logged and
    /// leave an empty result list; they never propagate.
    #[instrument(level = "info", skip(self))]
    pub async fn submit_on(&mut self, query: &str, today: NaiveDate) -> usize {
        self.set_query(query);
        let request = SearchRequest::build(&self.endpoint, query, &self.api_key, today);
        debug!(?request, "Submitting search");

        let raw = match self.source.search(&request).await {
            Ok(articles) => Some(articles),
            Err(e) => {
                error!(error = %e, "Search failed; showing no results");
                None
            }
        };
        let raw_len = raw.as_ref().map_or(0, Vec::len);

        self.state.results = filter_articles(raw);
        self.state.window.reset();

        let kept = self.state.results.len();
        info!(received = raw_len, kept, removed = raw_len - kept, "Search complete");
        kept
    }

    /// Show the next page. No-op once everything is visible; returns whether
    /// the window grew.
    pub fn on_load_more(&mut self) -> bool {
        let grew = self.state.window.extend(self.state.results.len());
        debug!(grew, displayed = self.state.displayed_count(), "Load more");
        grew
    }

    /// Open an article link verbatim.
    #[instrument(level = "info", skip(self))]
    pub fn on_open_article(&self, url: &str) -> Result<(), OpenError> {
        self.opener.open(url).inspect_err(|e| {
            error!(error = %e, "Failed to open article");
        })
    }
}
