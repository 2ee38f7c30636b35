//! Snapshot of loaded pages used to pick a resume offset

use pokedex_model::Page;

/// Pages currently held by a consumer, plus the item it is looking at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingState {
    /// Loaded pages in list order
    pub pages: Vec<Page>,

    /// Index of the anchored item across all pages
    pub anchor_position: Option<usize>,
}

impl PagingState {
    pub fn new(pages: Vec<Page>, anchor_position: Option<usize>) -> Self {
        Self {
            pages,
            anchor_position,
        }
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Page holding `position`.
    ///
    /// Positions past the last item resolve to the last page. Returns `None`
    /// when no page holds any item.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&Page> {
        if self.pages.iter().all(Page::is_empty) {
            return None;
        }

        let last = self.pages.len() - 1;
        let mut index = 0;
        let mut remaining = position;
        while index < last {
            let len = self.pages.get(index).map_or(0, Page::len);
            if remaining < len {
                break;
            }
            remaining -= len;
            index += 1;
        }
        self.pages.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::page;

    fn three_pages() -> PagingState {
        PagingState::new(
            vec![
                page(0, 20, None, Some(20)),
                page(20, 20, Some(0), Some(40)),
                page(40, 5, Some(20), None),
            ],
            None,
        )
    }

    #[test]
    fn test_item_count() {
        assert_eq!(three_pages().item_count(), 45);
    }

    #[test]
    fn test_closest_page() {
        let state = three_pages();
        let first_id = |position| {
            state
                .closest_page_to_position(position)
                .map(|p| p.items[0].id)
        };

        assert_eq!(first_id(0), Some(1));
        assert_eq!(first_id(19), Some(1));
        assert_eq!(first_id(20), Some(21));
        assert_eq!(first_id(39), Some(21));
        assert_eq!(first_id(40), Some(41));
        assert_eq!(first_id(44), Some(41));
    }

    #[test]
    fn test_closest_page_past_the_end() {
        let state = three_pages();
        let page = state.closest_page_to_position(500).unwrap();
        assert_eq!(page.items[0].id, 41);
    }

    #[test]
    fn test_closest_page_skips_empty_pages() {
        let state = PagingState::new(
            vec![page(0, 0, None, Some(20)), page(20, 20, Some(0), None)],
            Some(0),
        );
        let page = state.closest_page_to_position(0).unwrap();
        assert_eq!(page.items[0].id, 21);
    }

    #[test]
    fn test_no_items_no_page() {
        assert!(PagingState::default().closest_page_to_position(0).is_none());

        let empty = PagingState::new(vec![page(0, 0, None, None)], Some(0));
        assert!(empty.closest_page_to_position(0).is_none());
    }
}
