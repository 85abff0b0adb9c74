//! Data models for the news search endpoint.
//!
//! - [`Article`]: one search result as returned by the endpoint
//! - [`NewsResponse`]: the response envelope carrying the `articles` array
//!
//! The endpoint speaks camelCase JSON; field names are mapped with serde
//! renames so the Rust side stays snake_case.

use serde::{Deserialize, Deserializer, Serialize};

/// Title the upstream API puts on retracted articles.
pub const REMOVED_TITLE: &str = "[Removed]";
/// URL the upstream API puts on retracted articles.
pub const REMOVED_URL: &str = "https://removed.com";

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline. May be the [`REMOVED_TITLE`] sentinel.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Short teaser text.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the original article. May be the [`REMOVED_URL`] sentinel.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Lead image, if the publisher provided one.
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// ISO-8601 publication timestamp.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ArticleSource>,
}

/// Reads a string field the endpoint sometimes sends as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Publisher identity attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Article {
    /// True when the upstream API marked this article as retracted.
    pub fn is_removed(&self) -> bool {
        self.title == REMOVED_TITLE || self.url == REMOVED_URL
    }

    /// Publisher name, when known.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// Response envelope of the search endpoint.
///
/// On success `status` is `"ok"` and `articles` is present. On failure the
/// endpoint answers `status: "error"` with a `code` and `message` instead.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewsResponse {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::article;

    #[test]
    fn test_article_deserialization() {
        let json = r#"{
            "source": {"id": null, "name": "The Verge"},
            "author": "Jane Doe",
            "title": "Rust 2024 ships",
            "description": "A new edition.",
            "url": "https://example.com/rust",
            "urlToImage": "https://example.com/rust.png",
            "publishedAt": "2024-05-01T12:00:00Z",
            "content": "ignored"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Rust 2024 ships");
        assert_eq!(article.url_to_image.as_deref(), Some("https://example.com/rust.png"));
        assert_eq!(article.published_at, "2024-05-01T12:00:00Z");
        assert_eq!(article.source_name(), Some("The Verge"));
    }

    #[test]
    fn test_article_missing_optional_fields() {
        let json = r#"{"title": "A", "url": "https://x"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.description, None);
        assert_eq!(article.url_to_image, None);
        assert_eq!(article.published_at, "");
    }

    #[test]
    fn test_article_null_strings_become_empty() {
        let json = r#"{"title": null, "url": null, "publishedAt": null, "description": null}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.url, "");
        assert_eq!(article.published_at, "");
        assert_eq!(article.description, None);
    }

    #[test]
    fn test_is_removed() {
        assert!(article("[Removed]", "https://x").is_removed());
        assert!(article("A", "https://removed.com").is_removed());
        assert!(!article("A", "https://x").is_removed());
        // Only exact matches count.
        assert!(!article("[removed]", "https://removed.com/a").is_removed());
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#;
        let resp: NewsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_error());
        assert!(resp.articles.is_none());
        assert_eq!(resp.code.as_deref(), Some("apiKeyInvalid"));
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let json = serde_json::to_string(&article("A", "https://x")).unwrap();
        assert!(json.contains("\"publishedAt\""));
        assert!(json.contains("\"urlToImage\""));
    }
}
