//! Paginator.

use core::num::NonZeroUsize;

/// Products per page in the storefront grid.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// One page of an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page (fewer than `page_size` on a short last page).
    pub items: &'a [T],
    /// 1-based page number after clamping.
    pub page: usize,
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page == self.total_pages
    }
}

/// Number of pages needed for `len` items: `max(1, ceil(len / page_size))`.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice `list` into the `requested_page`-th page of `page_size` items.
///
/// Out-of-range requests clamp into `[1, total_pages]` instead of failing.
pub fn paginate<T>(list: &[T], page_size: NonZeroUsize, requested_page: usize) -> Page<'_, T> {
    let total_pages = total_pages(list.len(), page_size);
    let page = requested_page.clamp(1, total_pages);

    let start = (page - 1) * page_size.get();
    let end = (start + page_size.get()).min(list.len());
    let items = list.get(start..end).unwrap_or(&[]);

    Page {
        items,
        page,
        total_pages,
        total_items: list.len(),
    }
}
