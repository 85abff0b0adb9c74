//! Test doubles shared by the unit tests.

use crate::api::NewsSource;
use crate::error::{OpenError, SearchFailure};
use crate::models::Article;
use crate::query::SearchRequest;
use crate::screen::{SearchScreen, UrlOpener};
use std::cell::RefCell;
use std::io;
use std::sync::{Arc, Mutex};
use url::Url;

pub fn article(title: &str, url: &str) -> Article {
    Article {
        title: title.to_string(),
        description: None,
        url: url.to_string(),
        url_to_image: None,
        published_at: "2024-05-01T12:00:00Z".to_string(),
        author: None,
        source: None,
    }
}

/// `n` distinct, non-removed articles titled `t0..t{n-1}`.
pub fn many(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| article(&format!("t{i}"), &format!("https://a/{i}")))
        .collect()
}

pub enum Reply {
    Articles(Vec<Article>),
    Fail,
}

/// Answers searches from a queue of canned replies and records each request.
pub struct FakeSource {
    replies: RefCell<Vec<Reply>>,
    pub requests: RefCell<Vec<SearchRequest>>,
}

impl FakeSource {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl NewsSource for FakeSource {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, SearchFailure> {
        self.requests.borrow_mut().push(request.clone());
        match self.replies.borrow_mut().remove(0) {
            Reply::Articles(articles) => Ok(articles),
            Reply::Fail => Err(SearchFailure::Network("connection refused".to_string())),
        }
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        if self.fail {
            return Err(OpenError {
                url: url.to_string(),
                reason: "no handler".to_string(),
            });
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

pub fn fake_screen(replies: Vec<Reply>) -> SearchScreen<FakeSource, RecordingOpener> {
    SearchScreen::new(
        FakeSource::new(replies),
        RecordingOpener::default(),
        Url::parse("https://newsapi.org/v2/everything").unwrap(),
        "test-key".to_string(),
    )
}

/// In-memory log sink for asserting on `tracing` output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
