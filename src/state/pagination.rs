//! Pagination bookkeeping for the artworks table
//!
//! Tracks which page is displayed and how many records the catalog
//! reports. Every page change hands out a `PageRequest` ticket; a fetch
//! result is only applied if its ticket still names the current page,
//! so a slow response for a page the user already left is dropped.

/// Rows shown per page
pub const PAGE_SIZE: usize = 5;

/// Ticket identifying which page a fetch was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_index: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Pagination {
    /// Zero-based index of the displayed page
    page_index: u32,
    /// Total record count from the last accepted response
    total_records: u64,
    /// A fetch for the current page is in flight
    loading: bool,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to page `page_index` and return the ticket for its fetch
    ///
    /// No bounds check: pages past the end simply come back empty.
    pub fn go_to_page(&mut self, page_index: u32) -> PageRequest {
        self.page_index = page_index;
        self.loading = true;
        PageRequest { page_index }
    }

    /// Check a completed fetch against the current page
    ///
    /// Returns true (and clears the loading flag) if the response belongs
    /// to the displayed page. Stale responses return false and change nothing.
    pub fn accept(&mut self, request: &PageRequest) -> bool {
        if request.page_index != self.page_index {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    /// Offset of the first record on the current page
    pub fn first(&self) -> u64 {
        self.page_index as u64 * PAGE_SIZE as u64
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn set_total_records(&mut self, total: u64) {
        self.total_records = total;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
