//! Paged menu cursor
//!
//! Tracks a selection (`item_pos`) and the first visible row (`view_pos`).
//! After every move the cursor is inside `[0, len - 1]` and on the visible
//! page; scrolling shifts the page by the minimum needed.

/// Cursor over a fixed list, shown a page at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuNavigator<'a, T> {
    items: &'a [T],
    items_per_screen: usize,
    view_pos: usize,
    item_pos: usize,
}

impl<'a, T> MenuNavigator<'a, T> {
    /// Start at the top of the list
    ///
    /// A page size of zero is treated as one.
    pub fn new(items: &'a [T], items_per_screen: usize) -> Self {
        Self {
            items,
            items_per_screen: items_per_screen.max(1),
            view_pos: 0,
            item_pos: 0,
        }
    }

    /// Move the cursor down one entry, scrolling if it leaves the page
    pub fn increment(&mut self) {
        if self.item_pos + 1 < self.items.len() {
            self.item_pos += 1;
        }
        if self.item_pos - self.view_pos > self.items_per_screen - 1 {
            self.view_pos += 1;
        }
    }

    /// Move the cursor up one entry, scrolling if it leaves the page
    pub fn decrement(&mut self) {
        if self.item_pos > 0 {
            self.item_pos -= 1;
        }
        if self.item_pos < self.view_pos {
            self.view_pos -= 1;
        }
    }

    /// Back to the first entry and first page
    pub fn reset(&mut self) {
        self.view_pos = 0;
        self.item_pos = 0;
    }

    /// Visible entries, each tagged with its absolute index
    pub fn visible_page(&self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        let start = self.view_pos.min(self.items.len());
        let end = (start + self.items_per_screen).min(self.items.len());
        let items: &'a [T] = self.items;
        items[start..end]
            .iter()
            .enumerate()
            .map(move |(i, item)| (start + i, item))
    }

    /// Entry under the cursor (None only for an empty list)
    pub fn selected(&self) -> Option<&'a T> {
        self.items.get(self.item_pos)
    }

    pub fn item_pos(&self) -> usize {
        self.item_pos
    }

    pub fn view_pos(&self) -> usize {
        self.view_pos
    }

    /// Cursor row relative to the top of the page
    pub fn cursor_row(&self) -> usize {
        self.item_pos - self.view_pos
    }

    pub fn items_per_screen(&self) -> usize {
        self.items_per_screen
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    const ITEMS: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "About"];

    #[test]
    fn test_scrolls_one_row_past_page() {
        let mut nav = MenuNavigator::new(&ITEMS, 6);
        for _ in 0..5 {
            nav.increment();
        }
        assert_eq!((nav.item_pos(), nav.view_pos()), (5, 0));

        nav.increment();
        assert_eq!((nav.item_pos(), nav.view_pos()), (6, 1));
        assert_eq!(nav.cursor_row(), 5);
    }

    #[test]
    fn test_clamped_at_both_ends() {
        let mut nav = MenuNavigator::new(&ITEMS, 6);
        nav.decrement();
        assert_eq!((nav.item_pos(), nav.view_pos()), (0, 0));

        for _ in 0..20 {
            nav.increment();
        }
        assert_eq!(nav.item_pos(), 9);
        assert_eq!(nav.view_pos(), 4);
        assert_eq!(nav.selected(), Some(&"About"));
    }

    #[test]
    fn test_scroll_back_up() {
        let mut nav = MenuNavigator::new(&ITEMS, 6);
        for _ in 0..9 {
            nav.increment();
        }
        for _ in 0..5 {
            nav.decrement();
        }
        assert_eq!((nav.item_pos(), nav.view_pos()), (4, 4));
        nav.decrement();
        assert_eq!((nav.item_pos(), nav.view_pos()), (3, 3));
    }

    #[test]
    fn test_visible_page_tags_absolute_index() {
        let mut nav = MenuNavigator::new(&ITEMS, 6);
        for _ in 0..7 {
            nav.increment();
        }
        let page: Vec<_> = nav.visible_page().collect();
        assert_eq!(page.len(), 6);
        assert_eq!(page[0], (2, &"c"));
        assert_eq!(page[5], (7, &"h"));
    }

    #[test]
    fn test_short_list_single_page() {
        let items = ["x", "y"];
        let mut nav = MenuNavigator::new(&items, 6);
        nav.increment();
        nav.increment();
        assert_eq!(nav.item_pos(), 1);
        assert_eq!(nav.visible_page().count(), 2);
    }

    #[test]
    fn test_reset() {
        let mut nav = MenuNavigator::new(&ITEMS, 3);
        for _ in 0..8 {
            nav.increment();
        }
        nav.reset();
        assert_eq!((nav.item_pos(), nav.view_pos()), (0, 0));
    }

    proptest! {
        #[test]
        fn cursor_stays_on_page(
            len in 1usize..24,
            per_screen in 1usize..8,
            moves in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let items: Vec<usize> = (0..len).collect();
            let mut nav = MenuNavigator::new(items.as_slice(), per_screen);
            for down in moves {
                if down {
                    nav.increment();
                } else {
                    nav.decrement();
                }
                prop_assert!(nav.item_pos() < len);
                prop_assert!(nav.view_pos() <= nav.item_pos());
                prop_assert!(nav.item_pos() <= nav.view_pos() + per_screen - 1);
                prop_assert!(nav.visible_page().any(|(i, _)| i == nav.item_pos()));
            }
        }
    }
}
