pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Window into a list for one page, with zero-based `start..end` indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageCursor {
    /// A zero page size is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Out-of-range requests clamp to the first or last page instead of failing.
    pub fn window(&self, total: usize, requested_page: i64) -> PageWindow {
        let total_pages = self.total_pages(total);
        let last = total_pages.max(1);

        let page = if requested_page < 1 {
            1
        } else {
            usize::try_from(requested_page).map_or(last, |p| p.min(last))
        };

        let start = ((page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);

        PageWindow {
            page,
            page_size: self.page_size,
            total,
            total_pages,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_a_middle_page() {
        let window = PageCursor::default().window(30, 2);
        assert_eq!((window.start, window.end), (12, 24));
        assert_eq!(window.total_pages, 3);
        assert!(window.has_previous());
        assert!(window.has_next());
    }

    #[test]
    fn last_page_is_partial() {
        let window = PageCursor::default().window(30, 3);
        assert_eq!(window.range(), 24..30);
        assert!(!window.has_next());
    }

    #[test]
    fn clamps_out_of_range_pages() {
        let cursor = PageCursor::default();
        assert_eq!(cursor.window(30, 99), cursor.window(30, 3));
        assert_eq!(cursor.window(30, 0), cursor.window(30, 1));
        assert_eq!(cursor.window(30, -5), cursor.window(30, 1));
        assert_eq!(cursor.window(30, i64::MAX), cursor.window(30, 3));
    }

    #[test]
    fn empty_list_has_single_empty_page() {
        let window = PageCursor::default().window(0, 4);
        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.range(), 0..0);
        assert!(!window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn zero_page_size_is_coerced() {
        let cursor = PageCursor::new(0);
        assert_eq!(cursor.page_size(), 1);
        assert_eq!(cursor.window(3, 2).range(), 1..2);
    }

    #[test]
    fn slices_items() {
        let items: Vec<u32> = (0..13).collect();
        let window = PageCursor::default().window(items.len(), 2);
        assert_eq!(window.slice(&items), &[12]);
    }
}
