//! Offset/limit pagination
//!
//! A [`PageRequest`] is what the caller asked for. Once the total number of
//! rows is known it resolves into a [`PageWindow`]: the page number clamped to
//! the pages that actually exist, and the offset to read from.

use serde::Serialize;

/// Requested page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

/// Error for page requests that violate the caller contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("page must be at least 1, got {0}")]
    PageOutOfRange(i64),

    #[error("limit must be at least 1, got {0}")]
    LimitOutOfRange(i64),
}

impl PageRequest {
    /// Default number of rows per page
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Create a page request. Page and limit must both be positive.
    pub fn new(page: i64, limit: i64) -> Result<Self, PageRequestError> {
        if page < 1 {
            return Err(PageRequestError::PageOutOfRange(page));
        }
        if limit < 1 {
            return Err(PageRequestError::LimitOutOfRange(limit));
        }
        Ok(Self { page, limit })
    }

    /// First page with the given limit
    pub fn first(limit: i64) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
        }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Offset of the requested (unclamped) page
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Resolve against the total number of rows.
    ///
    /// A page past the end clamps to the last page; it never drops below 1,
    /// so an empty result set still reports page 1.
    pub fn resolve(&self, total: i64) -> PageWindow {
        let total = total.max(0);
        let total_pages = total_pages(total, self.limit);
        let page = if self.page > total_pages {
            total_pages.max(1)
        } else {
            self.page
        };

        PageWindow {
            page,
            limit: self.limit,
            offset: (page - 1) * self.limit,
            total,
            total_pages,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(Self::DEFAULT_LIMIT)
    }
}

/// `ceil(total / limit)`
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    let full = total / limit;
    if total % limit > 0 {
        full + 1
    } else {
        full
    }
}

/// A page request resolved against a known row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// One page of results together with its position in the full listing
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow) -> Self {
        Self {
            items,
            page: window.page,
            limit: window.limit,
            total: window.total,
            total_pages: window.total_pages,
        }
    }

    /// Convert the items, keeping the page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}
