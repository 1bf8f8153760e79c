//! Paginated View
//!
//! Client-side pagination over an in-memory collection. The collection is
//! replaced wholesale on every fetch; the view only derives the visible window.

use crate::error::{Error, Result};

/// A window over an ordered, fully resident collection.
///
/// `limit` is the page size and `offset` the index of the first visible
/// item. A default view has `limit == 0` until a page size is configured,
/// in which state nothing is visible and [`PaginatedView::total_pages`] fails.
#[derive(Clone, Debug)]
pub struct PaginatedView<T> {
    collection: Vec<T>,
    limit: usize,
    offset: usize,
}

impl<T> PaginatedView<T> {
    /// Create an empty view with the given page size
    pub fn with_limit(limit: usize) -> Result<Self> {
        let mut view = Self::default();
        view.set_limit(limit)?;
        Ok(view)
    }

    // ==================== Getters ====================

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of items in the backing collection
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// The whole backing collection, in display order
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    /// 1-based page the offset falls on, 0 while unconfigured
    pub fn current_page(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.offset / self.limit + 1
    }

    /// `(start, end)` bounds of the visible slice within the collection
    pub fn page_range(&self) -> (usize, usize) {
        let total = self.collection.len();
        let start = self.offset.min(total);
        let end = self.offset.saturating_add(self.limit).min(total);
        (start, end)
    }

    /// Items currently visible. Never fails; out-of-range windows are empty.
    pub fn visible_slice(&self) -> &[T] {
        let (start, end) = self.page_range();
        &self.collection[start..end]
    }

    /// `ceil(len / limit)`
    pub fn total_pages(&self) -> Result<usize> {
        if self.limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "page size must be greater than zero".to_string(),
            });
        }
        Ok(self.collection.len().div_ceil(self.limit))
    }

    // ==================== Setters ====================

    /// Replace the backing collection, keeping the current window
    pub fn set_collection(&mut self, items: Vec<T>) {
        self.collection = items;
    }

    /// Move to a 1-based page. Pages past the end yield an empty slice.
    pub fn go_to_page(&mut self, page_index: usize) -> Result<()> {
        if page_index == 0 {
            return Err(Error::InvalidPageIndex { index: page_index });
        }
        self.offset = (page_index - 1).saturating_mul(self.limit);
        Ok(())
    }

    /// Change the page size.
    ///
    /// The current offset is kept as-is rather than realigned to a page
    /// boundary under the new size, so on page N > 1 the window may start
    /// mid-page.
    pub fn set_limit(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "page size must be greater than zero".to_string(),
            });
        }
        self.limit = limit;
        Ok(())
    }
}

impl<T> Default for PaginatedView<T> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            limit: 0,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<char> {
        vec!['a', 'b', 'c', 'd', 'e']
    }

    fn view_of(items: Vec<char>, limit: usize) -> PaginatedView<char> {
        let mut view = PaginatedView::with_limit(limit).expect("valid limit");
        view.set_collection(items);
        view
    }

    #[test]
    fn pages_walk_through_collection() {
        let mut view = view_of(letters(), 2);

        view.go_to_page(1).expect("page 1");
        assert_eq!(view.visible_slice(), &['a', 'b']);
        view.go_to_page(2).expect("page 2");
        assert_eq!(view.visible_slice(), &['c', 'd']);
        view.go_to_page(3).expect("page 3");
        assert_eq!(view.visible_slice(), &['e']);
        view.go_to_page(4).expect("page 4");
        assert!(view.visible_slice().is_empty());

        assert_eq!(view.total_pages().expect("configured"), 3);
    }

    #[test]
    fn set_limit_keeps_stale_offset() {
        let mut view = view_of(letters(), 2);
        view.go_to_page(2).expect("page 2");
        assert_eq!(view.offset(), 2);

        view.set_limit(3).expect("limit 3");
        assert_eq!(view.offset(), 2);
        assert_eq!(view.visible_slice(), &['c', 'd', 'e']);
    }

    #[test]
    fn set_limit_slice_length_is_bounded_by_remaining_items() {
        let items: Vec<char> = ('a'..='j').collect();
        let mut view = view_of(items, 4);
        view.go_to_page(2).expect("page 2");

        view.set_limit(10).expect("limit 10");
        assert_eq!(view.visible_slice().len(), 10 - 4);
        assert_eq!(view.visible_slice()[0], 'e');
    }

    #[test]
    fn total_pages_matches_ceiling_division() {
        for n in 0..20usize {
            for limit in 1..7usize {
                let view = view_of(vec!['x'; n], limit);
                assert_eq!(view.total_pages().expect("configured"), n.div_ceil(limit));
            }
        }
    }

    #[test]
    fn visible_length_for_every_page() {
        let n = 11usize;
        let limit = 3usize;
        let mut view = view_of(vec!['x'; n], limit);

        for page in 1..8usize {
            view.go_to_page(page).expect("positive page");
            let expected = limit.min(n.saturating_sub((page - 1) * limit));
            assert_eq!(view.visible_slice().len(), expected, "page {page}");
        }
    }

    #[test]
    fn visible_slice_is_contiguous_subsequence() {
        let items: Vec<u32> = (0..17).collect();
        let mut view = PaginatedView::with_limit(5).expect("valid limit");
        view.set_collection(items.clone());
        view.go_to_page(3).expect("page 3");

        let (start, end) = view.page_range();
        assert_eq!(view.visible_slice(), &items[start..end]);
        assert!(view.visible_slice().windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn set_collection_recomputes_window() {
        let mut view = view_of(letters(), 2);
        view.go_to_page(2).expect("page 2");
        assert_eq!(view.visible_slice(), &['c', 'd']);

        view.set_collection(vec!['v', 'w', 'x']);
        assert_eq!(view.visible_slice(), &['x']);

        view.set_collection(Vec::new());
        assert!(view.visible_slice().is_empty());
        assert_eq!(view.total_pages().expect("configured"), 0);
    }

    #[test]
    fn page_zero_is_rejected() {
        let mut view = view_of(letters(), 2);
        view.go_to_page(2).expect("page 2");

        let err = view.go_to_page(0).expect_err("page 0");
        assert!(matches!(err, Error::InvalidPageIndex { index: 0 }));
        assert_eq!(view.offset(), 2);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut view = view_of(letters(), 2);
        assert!(matches!(
            view.set_limit(0),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert_eq!(view.limit(), 2);
        assert!(PaginatedView::<char>::with_limit(0).is_err());
    }

    #[test]
    fn unconfigured_view_shows_nothing() {
        let mut view = PaginatedView::default();
        view.set_collection(letters());

        assert!(view.visible_slice().is_empty());
        assert_eq!(view.current_page(), 0);
        assert!(matches!(
            view.total_pages(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn current_page_follows_offset() {
        let mut view = view_of(letters(), 2);
        view.go_to_page(3).expect("page 3");
        assert_eq!(view.current_page(), 3);

        view.set_limit(3).expect("limit 3");
        // offset 4 under a page size of 3 falls on page 2
        assert_eq!(view.current_page(), 2);
    }
}
