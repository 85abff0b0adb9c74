//! JSON rendering of the visible results.

use crate::models::Article;

/// Serialize the visible cards as a pretty-printed JSON array, using the
/// endpoint's own camelCase field names.
pub fn render_visible(visible: &[Article]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(visible)
}
