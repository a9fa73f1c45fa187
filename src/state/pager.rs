//! Pagination state and page-indicator computation.
//!
//! Pure transitions: the pager owns `current_page` and `items_per_page`,
//! while `total_pages` always comes from the last fetched
//! [`PaginationMeta`](crate::model::PaginationMeta). Every change to page or
//! limit triggers a refetch in the shell layer, carrying both values so the
//! response can be matched to the state that issued it.

/// Items-per-page choices, cycled in order.
pub const LIMIT_CHOICES: [u32; 6] = [5, 10, 15, 20, 25, 50];

/// One element of the condensed page-indicator sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A navigable page number.
    Number(u32),
    /// A gap between non-adjacent page numbers.
    Ellipsis,
}

/// Pagination state owned by the client.
///
/// Invariants:
/// - `current_page >= 1`
/// - `items_per_page > 0`
/// - navigation past `[1, total_pages]` is a no-op; the matching prev/next
///   controls render disabled at the boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    current_page: u32,
    items_per_page: u32,
}

impl PagerState {
    /// Create a pager on page 1 with the given limit (clamped to at least 1).
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// The 1-based current page.
    pub fn current_page(self) -> u32 {
        self.current_page
    }

    /// Items requested per page.
    pub fn items_per_page(self) -> u32 {
        self.items_per_page
    }

    /// Change the items-per-page limit.
    ///
    /// Always resets `current_page` to 1 so the page cannot point past the
    /// new last page. Zero is clamped to 1.
    pub fn set_limit(&mut self, limit: u32) {
        self.items_per_page = limit.max(1);
        self.current_page = 1;
    }

    /// Advance to the next preset limit, wrapping around. A limit that is
    /// not one of the presets jumps to the first preset.
    pub fn cycle_limit(&mut self) {
        let next = match LIMIT_CHOICES.iter().position(|&c| c == self.items_per_page) {
            Some(i) => LIMIT_CHOICES[(i + 1) % LIMIT_CHOICES.len()],
            None => LIMIT_CHOICES[0],
        };
        self.set_limit(next);
    }

    /// Navigate to `page`. No-op when out of `[1, total_pages]`.
    pub fn goto(&mut self, page: u32, total_pages: u32) {
        if page >= 1 && page <= total_pages {
            self.current_page = page;
        }
    }

    /// Navigate to the previous page, if any.
    pub fn prev(&mut self, total_pages: u32) {
        if self.can_prev() {
            self.goto(self.current_page - 1, total_pages);
        }
    }

    /// Navigate to the next page, if any.
    pub fn next(&mut self, total_pages: u32) {
        self.goto(self.current_page + 1, total_pages);
    }

    /// Whether the "previous" control is enabled.
    pub fn can_prev(self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled.
    pub fn can_next(self, total_pages: u32) -> bool {
        self.current_page < total_pages
    }

    /// Clamp the current page to freshly loaded metadata.
    ///
    /// After a deletion shrinks the dataset the backend may report fewer
    /// pages than the page we asked for; snap back to the last real page so
    /// the `page <= total_pages` invariant holds once data is loaded.
    pub fn clamp_to(&mut self, total_pages: u32) {
        if total_pages > 0 && self.current_page > total_pages {
            self.current_page = total_pages;
        }
    }
}

/// Compute the condensed page-indicator sequence.
///
/// Policy:
/// - `total_pages <= 5`: all pages, no ellipsis.
/// - `current_page <= 3`: `[1, 2, 3, 4, …, total_pages]`.
/// - `current_page >= total_pages - 2`: `[1, …, last-3 ..= last]`.
/// - otherwise: `[1, …, cur-1, cur, cur+1, …, total_pages]`.
pub fn page_tokens(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Number};

    const MAX_VISIBLE: u32 = 5;

    let mut tokens = Vec::new();

    if total_pages <= MAX_VISIBLE {
        tokens.extend((1..=total_pages).map(Number));
    } else if current_page <= 3 {
        tokens.extend((1..=4).map(Number));
        tokens.push(Ellipsis);
        tokens.push(Number(total_pages));
    } else if current_page >= total_pages - 2 {
        tokens.push(Number(1));
        tokens.push(Ellipsis);
        tokens.extend((total_pages - 3..=total_pages).map(Number));
    } else {
        tokens.push(Number(1));
        tokens.push(Ellipsis);
        tokens.extend((current_page - 1..=current_page + 1).map(Number));
        tokens.push(Ellipsis);
        tokens.push(Number(total_pages));
    }

    tokens
}

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
