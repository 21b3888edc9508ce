//! Page window and slicing.
//!
//! Pages are 1-based. A page number past the last page yields an empty
//! slice; page 0 is read as page 1. An empty result still has one page.

use serde::Serialize;
use std::num::NonZeroUsize;

/// Current page and page size for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    page_size: NonZeroUsize,
    current_page: usize,
}

impl PageWindow {
    pub fn new(page_size: NonZeroUsize, current_page: usize) -> Self {
        Self {
            page_size,
            current_page: current_page.max(1),
        }
    }

    /// Window on page 1.
    pub fn first(page_size: NonZeroUsize) -> Self {
        Self::new(page_size, 1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Page count for `count` items at this window's size.
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

/// One page of an ordered result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// `ceil(count / page_size)`, at least 1.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Index range of `page` inside a list of `count` items (pure).
pub fn page_range(count: usize, window: &PageWindow) -> std::ops::Range<usize> {
    let start = (window.current_page() - 1).saturating_mul(window.page_size());
    let end = start.saturating_add(window.page_size()).min(count);
    if start >= count {
        count..count
    } else {
        start..end
    }
}

/// Slice `items` to the window's page.
pub fn paginate<'a, T>(items: &'a [T], window: &PageWindow) -> Page<'a, T> {
    let range = page_range(items.len(), window);
    Page {
        items: &items[range],
        page: window.current_page(),
        page_size: window.page_size(),
        total_pages: window.total_pages(items.len()),
        total_items: items.len(),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: concatenating pages 1..=total_pages rebuilds the input.
        #[test]
        fn pages_cover_input_exactly(count in 0usize..200, page_size in 1usize..30) {
            let items: Vec<usize> = (0..count).collect();
            let size = NonZeroUsize::new(page_size).unwrap();
            let pages = total_pages(count, size);

            let rebuilt: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&items, &PageWindow::new(size, p)).items.to_vec())
                .collect();

            prop_assert_eq!(rebuilt, items);
        }

        /// Property: no page is larger than the page size.
        #[test]
        fn page_never_exceeds_size(count in 0usize..200, page_size in 1usize..30, page in 0usize..20) {
            let items: Vec<usize> = (0..count).collect();
            let window = PageWindow::new(NonZeroUsize::new(page_size).unwrap(), page);
            prop_assert!(paginate(&items, &window).items.len() <= page_size);
        }

        /// Property: pages past the end are empty.
        #[test]
        fn past_end_is_empty(count in 0usize..100, page_size in 1usize..30, extra in 1usize..5) {
            let items: Vec<usize> = (0..count).collect();
            let size = NonZeroUsize::new(page_size).unwrap();
            let window = PageWindow::new(size, total_pages(count, size) + extra);
            prop_assert!(paginate(&items, &window).items.is_empty());
        }
    }
}
