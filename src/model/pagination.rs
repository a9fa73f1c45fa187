//! Pagination metadata from the backend.

use serde::{Deserialize, Serialize};

/// Pagination metadata accompanying a paged response.
///
/// Invariants the backend maintains and the UI relies on:
/// - `page >= 1`, `limit > 0`
/// - `total_pages == ceil(total / limit)`
/// - `page <= total_pages` once data is loaded (navigation past either bound
///   is disabled in the UI; see `state::pager`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// 1-based page index.
    pub page: u32,
    /// Items per page requested.
    pub limit: u32,
    /// Total matching records across all pages.
    pub total: u64,
    /// Total page count, `ceil(total / limit)`.
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Metadata for an empty, not-yet-loaded dataset.
    pub fn empty() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_total_pages_wire_name() {
        let json = r#"{"page":2,"limit":10,"total":45,"totalPages":5}"#;
        let meta: PaginationMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.total_pages, 5);
    }

    #[test]
    fn empty_meta_has_no_pages() {
        let meta = PaginationMeta::empty();
        assert_eq!(meta.total, 0);
        assert_eq!(meta.total_pages, 0);
    }
}
