use serde::{Deserialize, Serialize};

/// A requested page window. Pages are zero-based.
///
/// Out-of-range inputs are normalized on construction: a negative page becomes
/// page 0 and a size below 1 becomes 1, so every request maps to a valid
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    pub fn of(page: i64, size: i64) -> Self {
        Self {
            page: page.max(0),
            size: size.max(1),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows to skip for this window
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

/// One page of results plus the pagination metadata the listing endpoint
/// returns alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Build a page envelope from one window of results and the store's total
    /// row count.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + request.size() - 1) / request.size()
        };

        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages,
        }
    }
}
