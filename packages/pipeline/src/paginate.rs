//! Pagination deriver: slices the visible set into fixed-size pages.
//!
//! This is a pure slicing function. It does not clamp the requested page;
//! keeping `page` within `[1, total_pages]` is the session's job, and an
//! out-of-range page simply yields an empty slice.

/// One page of the visible set plus the metadata the pager renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    /// The records on this page.
    pub items: &'a [T],
    /// 0-based inclusive start index into the visible set.
    pub start_index: usize,
    /// 0-based exclusive end index into the visible set.
    pub end_index: usize,
    /// Total page count: `max(1, ceil(len / page_size))`. Never zero, so
    /// an empty visible set still renders as one empty page.
    pub total_pages: usize,
}

/// Slices `visible` into its `page`-th page (1-indexed) of `page_size`
/// records.
///
/// `items` is empty when `start_index` falls past the end of `visible`.
///
/// # Panics
///
/// Panics if `page` is zero or `page_size` is zero; both are positive by
/// contract.
#[must_use]
pub fn page_view<T>(visible: &[T], page: usize, page_size: usize) -> PageView<'_, T> {
    assert!(page > 0, "page is 1-indexed");
    assert!(page_size > 0, "page_size must be positive");

    let total_pages = visible.len().div_ceil(page_size).max(1);
    let start_index = (page - 1) * page_size;
    let end_index = (start_index + page_size).min(visible.len());

    let items = if start_index >= visible.len() {
        &visible[0..0]
    } else {
        &visible[start_index..end_index]
    };

    PageView {
        items,
        start_index,
        end_index,
        total_pages,
    }
}
