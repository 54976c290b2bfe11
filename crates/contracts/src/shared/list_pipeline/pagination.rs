use std::ops::Range;

/// Current page of a list view (0-based index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(25)
    }
}

impl PageWindow {
    /// A zero page size is coerced to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1))
    }

    /// Pull the index back inside `[0, max(0, page_count - 1)]`
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
        }
    }

    pub fn clamped(mut self, total: usize) -> Self {
        self.clamp(total);
        self
    }

    /// Changing the page size always returns to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    pub fn go_to(&mut self, page_index: usize, total: usize) {
        self.page_index = page_index;
        self.clamp(total);
    }

    /// Half-open slice `[index * size, min((index + 1) * size, total))`
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }
}

pub fn paginate<R: Clone>(records: &[R], page_index: usize, page_size: usize) -> Vec<R> {
    let window = PageWindow {
        page_index,
        page_size: page_size.max(1),
    };
    records[window.range(records.len())].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let window = PageWindow::new(25);
        assert_eq!(window.page_count(0), 0);
        assert_eq!(window.page_count(25), 1);
        assert_eq!(window.page_count(26), 2);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (0..26).collect();
        assert_eq!(paginate(&items, 0, 25).len(), 25);
        assert_eq!(paginate(&items, 1, 25), vec![25]);
        assert!(paginate(&items, 2, 25).is_empty());
        assert!(paginate(&items, usize::MAX, 25).is_empty());
        assert_eq!(paginate(&items, 0, items.len()), items);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut window = PageWindow::new(10);
        window.go_to(3, 100);
        assert_eq!(window.page_index, 3);
        window.set_page_size(50);
        assert_eq!(window, PageWindow { page_index: 0, page_size: 50 });
        assert_eq!(window.with_page_size(0).page_size, 1);
    }

    #[test]
    fn test_clamp_when_collection_shrinks() {
        let mut window = PageWindow { page_index: 4, page_size: 10 };
        window.clamp(25);
        assert_eq!(window.page_index, 2);
        window.clamp(0);
        assert_eq!(window.page_index, 0);
    }

    #[test]
    fn test_navigation_flags() {
        let window = PageWindow { page_index: 1, page_size: 25 };
        assert!(window.has_previous());
        assert!(!window.has_next(26));
        assert!(PageWindow::new(25).has_next(26));
    }
}
