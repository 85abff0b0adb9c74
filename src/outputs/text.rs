//! Terminal card rendering.
//!
//! Each visible article becomes a numbered card:
//!
//! ```text
//!  1. Rust 2024 ships
//!     The Verge | 2024-05-01
//!     A new edition.
//!     image: https://example.com/rust.png
//!     https://example.com/rust
//! ```
//!
//! Cards are numbered from 1 so `:open N` can refer to them.

use crate::models::Article;
use crate::utils::published_date;
use std::fmt::{self, Write};

/// Hint printed under the cards while more results remain.
pub const LOAD_MORE_HINT: &str = "Type :more to load more.";

/// Render the visible cards followed by a status line.
///
/// `total` is the size of the whole filtered result list. The load-more hint
/// appears only when `can_load_more` is set.
pub fn render_cards(visible: &[Article], total: usize, can_load_more: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_cards(&mut out, visible, total, can_load_more);
    out
}

fn write_cards(
    out: &mut String,
    visible: &[Article],
    total: usize,
    can_load_more: bool,
) -> fmt::Result {
    if visible.is_empty() {
        return writeln!(out, "No results.");
    }

    let width = visible.len().to_string().len();
    for (i, article) in visible.iter().enumerate() {
        let indent = " ".repeat(width + 3);
        writeln!(out, " {:>width$}. {}", i + 1, article.title)?;

        let date = published_date(&article.published_at);
        match article.source_name() {
            Some(name) if !date.is_empty() => writeln!(out, "{indent}{name} | {date}")?,
            Some(name) => writeln!(out, "{indent}{name}")?,
            None if !date.is_empty() => writeln!(out, "{indent}{date}")?,
            None => {}
        }
        if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "{indent}{description}")?;
        }
        if let Some(image) = &article.url_to_image {
            writeln!(out, "{indent}image: {image}")?;
        }
        writeln!(out, "{indent}{}", article.url)?;
        writeln!(out)?;
    }

    write!(out, "Showing {} of {}.", visible.len(), total)?;
    if can_load_more {
        write!(out, " {LOAD_MORE_HINT}")?;
    }
    writeln!(out)
}
