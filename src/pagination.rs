//! Page-count math and the bounds the pagination control enforces.

/// `max(1, ceil(total_count / page_size))`.
///
/// A zero total (or a zero page size) still yields one page, so the control
/// always has something to show.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 || total_count == 0 {
        return 1;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// State of the pagination control: the current page and how many exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages: total_pages.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Never less than 1.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Bound a requested page to `[1, total_pages]`.
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.clamp(1, self.total_pages.max(1))
    }

    pub fn next(&self) -> Option<u32> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    pub fn prev(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }
}
