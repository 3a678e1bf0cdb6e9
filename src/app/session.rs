use crate::config::SiteConfig;
use crate::core::accordion::AccordionSelector;
use crate::core::advisory::AdvisoryPipeline;
use crate::core::gallery::GalleryCursor;
use crate::core::{AdvisoryService, Category, MediaItem};
use std::sync::Arc;

/// All interactive state of one page visit.
///
/// The components never talk to each other; the session only puts them side
/// by side and answers the few questions that span them.
pub struct SiteSession {
    pub portfolio: GalleryCursor<MediaItem>,
    pub prices: AccordionSelector,
    /// Lightbox over the price categories' example images.
    pub preview: GalleryCursor<Category>,
    pub advisor: AdvisoryPipeline,
}

impl SiteSession {
    /// The price list starts with its first category expanded.
    pub fn new(
        portfolio: Vec<MediaItem>,
        prices: Vec<Category>,
        service: Arc<dyn AdvisoryService>,
    ) -> Self {
        let prices = AccordionSelector::with_initial(prices, Some(0));
        let preview = GalleryCursor::new(prices.catalog());

        Self {
            portfolio: GalleryCursor::new(portfolio),
            prices,
            preview,
            advisor: AdvisoryPipeline::new(service),
        }
    }

    pub fn from_config(config: &SiteConfig, service: Arc<dyn AdvisoryService>) -> Self {
        Self::new(config.portfolio.clone(), config.prices.clone(), service)
    }

    /// Opens the preview lightbox on the expanded price category.
    /// Returns `false` when no category is expanded.
    pub fn open_preview(&mut self) -> bool {
        match self.prices.open_index() {
            Some(index) => {
                self.preview.open(index);
                true
            }
            None => false,
        }
    }

    /// Background scrolling is suppressed while any lightbox is showing.
    pub fn scroll_locked(&self) -> bool {
        self.portfolio.is_open() || self.preview.is_open()
    }
}
