pub mod accordion;
pub mod advisory;
pub mod gallery;
pub mod index;

pub use crate::domain::model::{Category, Displayable, MediaItem, Service, SocialLink};
pub use crate::domain::ports::{AdvisorSettings, AdvisoryService};
pub use crate::utils::error::Result;
