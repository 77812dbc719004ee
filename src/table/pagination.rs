//! Local and external pagination.

use std::fmt;
use std::ops::Range;

/// Callback receiving a requested page number or page size.
pub type PageHandler = Box<dyn FnMut(usize)>;

/// Pagination owned by the caller's data source.
///
/// The table never slices rows in this mode. Page and size requests are
/// relayed to the callbacks and the caller confirms the loaded page with
/// [`TableView::set_external_page`](super::TableView::set_external_page).
pub struct ExternalPagination {
    /// Current 1-based page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total number of rows across all pages.
    pub total: usize,
    on_page_change: PageHandler,
    on_page_size_change: PageHandler,
}

impl ExternalPagination {
    /// Create external pagination with the given callbacks.
    pub fn new<P, S>(
        page: usize,
        page_size: usize,
        total: usize,
        on_page_change: P,
        on_page_size_change: S,
    ) -> Self
    where
        P: FnMut(usize) + 'static,
        S: FnMut(usize) + 'static,
    {
        Self {
            page,
            page_size,
            total,
            on_page_change: Box::new(on_page_change),
            on_page_size_change: Box::new(on_page_size_change),
        }
    }

    pub(crate) fn request_page(&mut self, page: usize) {
        (self.on_page_change)(page);
    }

    pub(crate) fn request_page_size(&mut self, page_size: usize) {
        (self.on_page_size_change)(page_size);
    }

    /// Page information for the footer.
    pub fn info(&self) -> PageInfo {
        PageInfo::new(self.page, self.page_size, self.total)
    }
}

impl fmt::Debug for ExternalPagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalPagination")
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

/// Summary of the displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current 1-based page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total number of rows.
    pub total: usize,
    /// Number of pages (at least 1).
    pub page_count: usize,
    /// 1-based position of the first row shown (0 when there are none).
    pub first: usize,
    /// 1-based position of the last row shown (0 when there are none).
    pub last: usize,
}

impl PageInfo {
    /// Compute page information.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_count = page_count(total, page_size);
        let range = page_range(total, page, page_size);
        let (first, last) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        Self {
            page,
            page_size,
            total,
            page_count,
            first,
            last,
        }
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// "Showing X to Y of Z results".
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first, self.last, self.total
        )
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  Page {} of {}",
            self.summary(),
            self.page,
            self.page_count
        )
    }
}

/// Number of pages needed for `total` rows, never less than one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `1..=page_count`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// Index range `[(page-1)*size, page*size)` clamped to `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(3, 2), 2);
        assert_eq!(page_count(4, 2), 2);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3, 2), 1);
        assert_eq!(clamp_page(2, 3, 2), 2);
        assert_eq!(clamp_page(9, 3, 2), 2);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(3, 1, 2), 0..2);
        assert_eq!(page_range(3, 2, 2), 2..3);
        assert_eq!(page_range(3, 3, 2), 3..3);
        assert_eq!(page_range(0, 1, 10), 0..0);
    }

    #[test]
    fn test_page_info_text() {
        let info = PageInfo::new(2, 10, 25);
        assert_eq!(info.first, 11);
        assert_eq!(info.last, 20);
        assert_eq!(info.page_count, 3);
        assert_eq!(info.summary(), "Showing 11 to 20 of 25 results");
        assert_eq!(
            info.to_string(),
            "Showing 11 to 20 of 25 results  Page 2 of 3"
        );
        assert!(info.has_previous());
        assert!(info.has_next());
    }

    #[test]
    fn test_page_info_empty() {
        let info = PageInfo::new(1, 10, 0);
        assert_eq!((info.first, info.last), (0, 0));
        assert!(!info.has_previous());
        assert!(!info.has_next());
    }

    #[test]
    fn test_external_callbacks_receive_requests() {
        let pages = Rc::new(RefCell::new(Vec::new()));
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let (p, s) = (Rc::clone(&pages), Rc::clone(&sizes));

        let mut pagination = ExternalPagination::new(
            1,
            10,
            40,
            move |page| p.borrow_mut().push(page),
            move |size| s.borrow_mut().push(size),
        );
        pagination.request_page(3);
        pagination.request_page_size(20);

        assert_eq!(*pages.borrow(), vec![3]);
        assert_eq!(*sizes.borrow(), vec![20]);
        // Requests never move the page on their own.
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
    }
}
