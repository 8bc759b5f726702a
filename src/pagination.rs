//! Page requests and paged results shared by the repository and service layers.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of page links exposed around the current page.
const PAGE_WINDOW: usize = 10;

/// Offset/limit pair consumed by repository list queries. `page` is zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows to skip before the requested page, or `None` when it
    /// does not fit in an `i64` (SQLite's offset type).
    pub fn offset(&self) -> Option<usize> {
        self.page
            .checked_mul(self.per_page)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}

/// Caller-facing page selection. `page` is zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl From<PageRequest> for Pagination {
    fn from(value: PageRequest) -> Self {
        Self {
            page: value.page,
            per_page: value.size,
        }
    }
}

/// One page of items together with the metadata needed to render pagination
/// controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Total number of records across all pages.
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
    /// First page index of the navigation window.
    pub start: usize,
    /// Last page index of the navigation window.
    pub end: usize,
    /// Whether a window exists before `start`.
    pub prev: bool,
    /// Whether a window exists after `end`.
    pub next: bool,
    pub page_list: Vec<usize>,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: usize, request: PageRequest) -> Self {
        let PageRequest { page, size } = request;
        let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };

        let start = (page / PAGE_WINDOW) * PAGE_WINDOW;
        let (end, page_list) = if total_pages == 0 {
            (0, Vec::new())
        } else {
            let end = start.saturating_add(PAGE_WINDOW - 1).min(total_pages - 1);
            (end, (start..=end).collect())
        };

        Self {
            items,
            total,
            page,
            size,
            total_pages,
            start,
            end,
            prev: start > 0,
            next: total_pages > end + 1,
            page_list,
        }
    }

    /// Convert every item while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
            total_pages: self.total_pages,
            start: self.start,
            end: self.end,
            prev: self.prev,
            next: self.next,
            page_list: self.page_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages_and_first_window() {
        let result = PageResult::new(vec![1, 2], 25, PageRequest::new(0, 2));
        assert_eq!(result.total_pages, 13);
        assert_eq!(result.start, 0);
        assert_eq!(result.end, 9);
        assert!(!result.prev);
        assert!(result.next);
        assert_eq!(result.page_list, (0..=9).collect::<Vec<_>>());
    }

    #[test]
    fn clamps_last_window_to_total_pages() {
        let result = PageResult::new(vec![1], 25, PageRequest::new(12, 2));
        assert_eq!(result.start, 10);
        assert_eq!(result.end, 12);
        assert!(result.prev);
        assert!(!result.next);
        assert_eq!(result.page_list, vec![10, 11, 12]);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let result: PageResult<i32> = PageResult::new(vec![], 0, PageRequest::default());
        assert_eq!(result.total_pages, 0);
        assert!(result.page_list.is_empty());
        assert!(!result.prev);
        assert!(!result.next);
    }

    #[test]
    fn map_keeps_metadata() {
        let result = PageResult::new(vec![1, 2, 3], 7, PageRequest::new(1, 3));
        let mapped = result.clone().map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total, result.total);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total_pages, 3);
    }

    #[test]
    fn pagination_offset_is_page_times_size() {
        let pagination: Pagination = PageRequest::new(3, 20).into();
        assert_eq!(pagination.offset(), Some(60));
    }

    #[test]
    fn pagination_offset_overflow_is_none() {
        let pagination: Pagination = PageRequest::new(usize::MAX / 2 + 1, 2).into();
        assert_eq!(pagination.offset(), None);
    }

    #[test]
    fn window_near_usize_max_does_not_overflow() {
        let result: PageResult<i32> = PageResult::new(vec![], 3, PageRequest::new(usize::MAX, 2));
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.end, 1);
        assert!(result.page_list.is_empty());
        assert!(result.prev);
        assert!(!result.next);
    }
}
