use serde::{Deserialize, Serialize};

/// Number of items shown per page when the caller does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Pagination options applied to a list query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page number (1-based).
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

/// A single page of results together with paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items belonging to the current page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: usize,
    /// Total number of pages available.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wrap a page of items with its paging metadata.
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}
