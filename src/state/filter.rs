//! Client-side filtering over the currently loaded page.
//!
//! Filtering never talks to the backend: the candidate pool is whatever the
//! last fetch returned, and [`apply`] is a pure function over it. Facets
//! (categories and tags offered as toggles) are likewise derived from the
//! loaded records and recomputed whenever the page changes.

use std::collections::BTreeSet;

use crate::model::QnaRecord;

/// Active filter selections. Derived state, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text term matched against question and answer.
    pub search_term: String,
    /// Selected category, if any. Exact match.
    pub category: Option<String>,
    /// Selected tags. A record matches when it carries at least one of them.
    pub tags: BTreeSet<String>,
}

impl FilterCriteria {
    /// Whether any filter is active.
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty() || self.category.is_some() || !self.tags.is_empty()
    }

    /// Whether `record` passes all active filters.
    ///
    /// A record matches iff the search term is a case-insensitive substring
    /// of its question or answer (empty term matches all), the selected
    /// category (if any) equals its category, and the selected tag set is
    /// empty or intersects its tags.
    pub fn matches(&self, record: &QnaRecord) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if !term.is_empty()
            && !record.question.to_lowercase().contains(&term)
            && !record.answer.to_lowercase().contains(&term)
        {
            return false;
        }

        if let Some(category) = &self.category {
            if *category != record.category {
                return false;
            }
        }

        if !self.tags.is_empty() && !record.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }

        true
    }

    /// Select `category`, or deselect it when already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_owned());
        }
    }

    /// Add `tag` to the selection, or remove it when already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_owned());
        }
    }

    /// Drop every active filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Filter `items` down to the records matching `criteria`, preserving order.
pub fn apply<'a>(items: &'a [QnaRecord], criteria: &FilterCriteria) -> Vec<&'a QnaRecord> {
    items.iter().filter(|r| criteria.matches(r)).collect()
}

/// Unique categories present in `items`, in first-seen order.
pub fn categories(items: &[QnaRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for record in items {
        if seen.insert(record.category.as_str()) {
            out.push(record.category.clone());
        }
    }
    out
}

/// Unique tags present in `items`, in first-seen order.
pub fn tags(items: &[QnaRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for record in items {
        for tag in &record.tags {
            if seen.insert(tag.as_str()) {
                out.push(tag.clone());
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
