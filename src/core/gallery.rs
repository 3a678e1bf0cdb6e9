use crate::core::index::{assert_in_range, check_index, wrap_next, wrap_prev};
use crate::domain::model::Displayable;
use crate::utils::error::Result;
use std::sync::Arc;

/// Lightbox state over a fixed, ordered sequence of displayable items.
///
/// `selected == None` means the lightbox is closed. The backing sequence is
/// shared read-only content and never changes for the cursor's lifetime.
#[derive(Debug, Clone)]
pub struct GalleryCursor<T> {
    items: Arc<[T]>,
    selected: Option<usize>,
}

impl<T: Displayable> GalleryCursor<T> {
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self {
            items: items.into(),
            selected: None,
        }
    }

    /// Opens the lightbox on item `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    #[track_caller]
    pub fn open(&mut self, index: usize) {
        assert_in_range(index, self.items.len(), "gallery open");
        self.selected = Some(index);
    }

    /// Like [`open`](Self::open) but leaves the state untouched on a bad index.
    pub fn try_open(&mut self, index: usize) -> Result<()> {
        check_index(index, self.items.len())?;
        self.selected = Some(index);
        Ok(())
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) {
        if let Some(current) = self.selected {
            if self.can_navigate() {
                self.selected = Some(wrap_next(current, self.items.len()));
            }
        }
    }

    pub fn prev(&mut self) {
        if let Some(current) = self.selected {
            if self.can_navigate() {
                self.selected = Some(wrap_prev(current, self.items.len()));
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn current(&self) -> Option<&T> {
        self.selected.map(|i| &self.items[i])
    }

    /// 1-based counter shown under the open image, as `(position, total)`.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.selected.map(|i| (i + 1, self.items.len()))
    }

    /// Arrows are only rendered when there is somewhere to go.
    pub fn can_navigate(&self) -> bool {
        self.items.len() > 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MediaItem;

    fn item(id: &str) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            image: format!("/images/{}.jpg", id),
            title: format!("Look {}", id),
            category: "Stitch Braids".to_string(),
        }
    }

    fn gallery(ids: &[&str]) -> GalleryCursor<MediaItem> {
        GalleryCursor::new(ids.iter().map(|id| item(id)).collect::<Vec<_>>())
    }

    #[test]
    fn test_starts_closed() {
        let cursor = gallery(&["a", "b"]);
        assert!(!cursor.is_open());
        assert_eq!(cursor.selected(), None);
        assert!(cursor.current().is_none());
        assert!(cursor.position().is_none());
    }

    #[test]
    fn test_next_walks_and_wraps() {
        let mut cursor = gallery(&["a", "b", "c"]);
        cursor.open(0);
        assert_eq!(cursor.selected(), Some(0));
        cursor.next();
        assert_eq!(cursor.selected(), Some(1));
        cursor.next();
        assert_eq!(cursor.selected(), Some(2));
        cursor.next();
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let mut cursor = gallery(&["a", "b", "c", "d"]);
        cursor.open(0);
        cursor.prev();
        assert_eq!(cursor.selected(), Some(3));
        assert_eq!(cursor.current().map(|i| i.id.as_str()), Some("d"));
    }

    #[test]
    fn test_cyclic_closure_for_every_start() {
        for len in 2..=6 {
            let ids: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            for start in 0..len {
                let mut cursor = gallery(&refs);
                cursor.open(start);
                for _ in 0..len {
                    cursor.next();
                }
                assert_eq!(cursor.selected(), Some(start), "len {} start {}", len, start);
                for _ in 0..len {
                    cursor.prev();
                }
                assert_eq!(cursor.selected(), Some(start), "len {} start {}", len, start);
            }
        }
    }

    #[test]
    fn test_navigation_is_noop_when_closed() {
        let mut cursor = gallery(&["a", "b", "c"]);
        cursor.next();
        cursor.prev();
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn test_single_item_does_not_move() {
        let mut cursor = gallery(&["only"]);
        cursor.open(0);
        assert!(!cursor.can_navigate());
        cursor.next();
        assert_eq!(cursor.selected(), Some(0));
        cursor.prev();
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn test_close_is_unconditional() {
        let mut cursor = gallery(&["a", "b"]);
        cursor.close();
        assert!(!cursor.is_open());
        cursor.open(1);
        cursor.close();
        assert!(!cursor.is_open());
    }

    #[test]
    fn test_position_counter() {
        let mut cursor = gallery(&["a", "b", "c"]);
        cursor.open(2);
        assert_eq!(cursor.position(), Some((3, 3)));
        cursor.next();
        assert_eq!(cursor.position(), Some((1, 3)));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_open_out_of_range_panics() {
        let mut cursor = gallery(&["a", "b"]);
        cursor.open(2);
    }

    #[test]
    fn test_try_open_rejects_without_changing_state() {
        let mut cursor = gallery(&["a", "b"]);
        cursor.open(1);
        assert!(cursor.try_open(5).is_err());
        assert_eq!(cursor.selected(), Some(1));

        let mut empty = gallery(&[]);
        assert!(empty.is_empty());
        assert!(empty.try_open(0).is_err());
        assert!(!empty.is_open());
    }
}
