use crate::core::index::{assert_in_range, check_index};
use crate::domain::model::Category;
use crate::utils::error::Result;
use std::sync::Arc;

/// Single-open selection over the pricing categories.
///
/// Opening a category implicitly collapses the previous one; the only way
/// back to "nothing open" is toggling the open category again.
#[derive(Debug, Clone)]
pub struct AccordionSelector {
    categories: Arc<[Category]>,
    open: Option<usize>,
}

impl AccordionSelector {
    pub fn new(categories: impl Into<Arc<[Category]>>) -> Self {
        Self {
            categories: categories.into(),
            open: None,
        }
    }

    /// Starts with `initial` expanded. An out-of-range initial index is
    /// dropped, so an empty catalog still yields a valid selector.
    pub fn with_initial(categories: impl Into<Arc<[Category]>>, initial: Option<usize>) -> Self {
        let categories = categories.into();
        let open = initial.filter(|&i| i < categories.len());
        Self { categories, open }
    }

    /// # Panics
    /// If `index >= categories().len()`.
    #[track_caller]
    pub fn toggle(&mut self, index: usize) {
        assert_in_range(index, self.categories.len(), "accordion toggle");
        self.apply_toggle(index);
    }

    pub fn try_toggle(&mut self, index: usize) -> Result<()> {
        check_index(index, self.categories.len())?;
        self.apply_toggle(index);
        Ok(())
    }

    fn apply_toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        tracing::debug!("Accordion open index: {:?}", self.open);
    }

    /// Image for the side-panel preview; always follows the open category.
    pub fn current_preview_image(&self) -> Option<&str> {
        self.current().map(|c| c.image.as_str())
    }

    pub fn current(&self) -> Option<&Category> {
        self.open.map(|i| &self.categories[i])
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Shared handle to the catalog, e.g. for a preview lightbox over it.
    pub fn catalog(&self) -> Arc<[Category]> {
        Arc::clone(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Service;

    fn catalog() -> Vec<Category> {
        ["Stitch", "Cornrows", "Weave"]
            .iter()
            .map(|title| Category {
                title: title.to_string(),
                image: format!("/images/{}.jpg", title.to_lowercase()),
                items: vec![Service {
                    name: format!("{} basic", title),
                    price: "€ 60,-".to_string(),
                    description: None,
                }],
            })
            .collect()
    }

    #[test]
    fn test_toggle_scenario() {
        let mut accordion = AccordionSelector::new(catalog());
        accordion.toggle(1);
        assert_eq!(accordion.open_index(), Some(1));
        accordion.toggle(1);
        assert_eq!(accordion.open_index(), None);
        accordion.toggle(0);
        assert_eq!(accordion.open_index(), Some(0));
    }

    #[test]
    fn test_toggle_other_index_switches_exclusively() {
        let mut accordion = AccordionSelector::new(catalog());
        accordion.toggle(0);
        accordion.toggle(2);
        assert_eq!(accordion.open_index(), Some(2));
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn test_at_most_one_open_over_any_sequence() {
        let mut accordion = AccordionSelector::new(catalog());
        for index in [0, 1, 1, 2, 0, 0, 2, 1] {
            accordion.toggle(index);
            let open_count = (0..3).filter(|&i| accordion.is_open(i)).count();
            assert!(open_count <= 1);
        }
    }

    #[test]
    fn test_preview_follows_open_category() {
        let mut accordion = AccordionSelector::new(catalog());
        assert_eq!(accordion.current_preview_image(), None);
        accordion.toggle(1);
        assert_eq!(accordion.current_preview_image(), Some("/images/cornrows.jpg"));
        accordion.toggle(2);
        assert_eq!(accordion.current_preview_image(), Some("/images/weave.jpg"));
        accordion.toggle(2);
        assert_eq!(accordion.current_preview_image(), None);
    }

    #[test]
    fn test_with_initial() {
        let accordion = AccordionSelector::with_initial(catalog(), Some(0));
        assert_eq!(accordion.current().map(|c| c.title.as_str()), Some("Stitch"));

        let empty = AccordionSelector::with_initial(Vec::<Category>::new(), Some(0));
        assert_eq!(empty.open_index(), None);
    }

    #[test]
    #[should_panic(expected = "accordion toggle")]
    fn test_toggle_out_of_range_panics() {
        let mut accordion = AccordionSelector::new(catalog());
        accordion.toggle(3);
    }

    #[test]
    fn test_try_toggle_out_of_range_keeps_state() {
        let mut accordion = AccordionSelector::with_initial(catalog(), Some(1));
        assert!(accordion.try_toggle(9).is_err());
        assert_eq!(accordion.open_index(), Some(1));
    }
}
