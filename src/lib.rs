pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::GeminiAdvisor;
pub use crate::app::SiteSession;
pub use crate::config::SiteConfig;
pub use crate::core::{
    accordion::AccordionSelector,
    advisory::{AdvisoryPipeline, AdvisoryStatus, FALLBACK_MESSAGE},
    gallery::GalleryCursor,
};
pub use crate::utils::error::{Result, SalonError};
