//! Pagination over the filtered result set.
//!
//! The window is cumulative: "show more" extends the visible prefix of the
//! results instead of replacing it, so the slice always starts at index zero.
//! The cursor is deliberately dumb; resetting it on a new search is the
//! caller's job and the only invariant that matters.

/// Fallback page size when the configured value is zero.
pub const MIN_PAGE_SIZE: usize = 1;

/// Tracks how many cumulative items of the current result set are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: usize,
    current_page: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        PageCursor {
            page_size: page_size.max(MIN_PAGE_SIZE),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Back to the first page. Called exactly when the result set is replaced.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Widen the window by one page. Advancing past the end is harmless; it
    /// simply surfaces no additional items.
    pub fn advance(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    /// How many of `total` results fall inside the current window.
    pub fn visible_count(&self, total: usize) -> usize {
        total.min(self.current_page.saturating_mul(self.page_size))
    }

    /// Results beyond the window; floors at zero.
    pub fn remaining_count(&self, total: usize) -> usize {
        total.saturating_sub(self.current_page.saturating_mul(self.page_size))
    }
}

/// The visible prefix of `items` under `cursor`.
pub fn slice<'a, T>(items: &'a [T], cursor: &PageCursor) -> &'a [T] {
    &items[..cursor.visible_count(items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_grows_cumulatively() {
        let items: Vec<u32> = (0..5).collect();
        let mut cursor = PageCursor::new(2);

        assert_eq!(slice(&items, &cursor), &[0, 1]);
        assert_eq!(cursor.remaining_count(items.len()), 3);

        cursor.advance();
        assert_eq!(slice(&items, &cursor), &[0, 1, 2, 3]);
        assert_eq!(cursor.remaining_count(items.len()), 1);

        cursor.advance();
        assert_eq!(slice(&items, &cursor), &[0, 1, 2, 3, 4]);
        assert_eq!(cursor.remaining_count(items.len()), 0);
    }

    #[test]
    fn advancing_extends_previous_slice_as_prefix() {
        let items: Vec<u32> = (0..7).collect();
        let mut cursor = PageCursor::new(3);
        let before = slice(&items, &cursor).to_vec();
        cursor.advance();
        let after = slice(&items, &cursor);
        assert!(after.starts_with(&before));
        assert!(after.len() > before.len());
    }

    #[test]
    fn advancing_past_the_end_is_a_no_op_on_the_slice() {
        let items: Vec<u32> = (0..3).collect();
        let mut cursor = PageCursor::new(5);
        let before = slice(&items, &cursor).to_vec();
        cursor.advance();
        assert_eq!(slice(&items, &cursor), before.as_slice());
        assert_eq!(cursor.remaining_count(items.len()), 0);
    }

    #[test]
    fn remaining_count_floors_at_zero() {
        let mut cursor = PageCursor::new(10);
        assert_eq!(cursor.remaining_count(4), 0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.remaining_count(4), 0);
        assert_eq!(cursor.remaining_count(0), 0);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let cursor = PageCursor::new(0);
        assert_eq!(cursor.page_size(), MIN_PAGE_SIZE);
        assert_eq!(cursor.visible_count(3), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut cursor = PageCursor::new(2);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_page(), 3);
        cursor.reset();
        assert_eq!(cursor.current_page(), 1);
        assert_eq!(cursor.visible_count(10), 2);
    }
}
