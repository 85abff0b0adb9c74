//! Client-side paging over an in-memory result list.
//!
//! [`PageWindow`] only tracks how many items are displayed; the results it
//! is applied to are passed in on every call, so the visible slice is never
//! cached and always reflects the current list.

/// Items shown after a new search, and added per "load more".
pub const PAGE_SIZE: usize = 10;

/// Growable prefix over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    displayed_count: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            displayed_count: PAGE_SIZE,
        }
    }
}

impl PageWindow {
    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    /// Back to the first page. Called once per completed search.
    pub fn reset(&mut self) {
        self.displayed_count = PAGE_SIZE;
    }

    /// Whether "load more" should be offered for a list of `len` items.
    pub fn can_extend(&self, len: usize) -> bool {
        self.displayed_count < len
    }

    /// Grow by one page if more items remain. Returns whether it grew.
    pub fn extend(&mut self, len: usize) -> bool {
        if !self.can_extend(len) {
            return false;
        }
        self.displayed_count += PAGE_SIZE;
        true
    }

    /// Number of items actually shown for a list of `len` items.
    pub fn shown(&self, len: usize) -> usize {
        self.displayed_count.min(len)
    }

    pub fn visible<'a, T>(&self, results: &'a [T]) -> &'a [T] {
        &results[..self.shown(results.len())]
    }
}
