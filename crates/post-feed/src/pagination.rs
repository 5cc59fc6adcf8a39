//! Pagination Controller
//!
//! 1-based page cursor over a fixed page size.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Start at page 1. A zero limit is bumped to 1.
    pub fn new(limit: u32) -> Self {
        Self { page: 1, limit: limit.max(1) }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Advance unconditionally; callers gate on `has_next`
    pub fn next(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Step back, never below page 1
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// A full last page is taken to mean more records may follow.
    /// Cannot tell "exactly `limit` left" from "more left".
    pub fn has_next(&self, last_page_len: usize) -> bool {
        last_page_len == self.limit as usize
    }
}
