use serde::{Deserialize, Serialize};

/// Anything a lightbox can show: one image with a caption.
pub trait Displayable {
    fn image(&self) -> &str;
    fn title(&self) -> &str;

    /// Small label rendered above the title, e.g. the portfolio category.
    fn label(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub image: String,
    pub title: String,
    pub category: String,
}

impl Displayable for MediaItem {
    fn image(&self) -> &str {
        &self.image
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn label(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    /// Display string, e.g. "€ 85,-" or "vanaf € 120".
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub items: Vec<Service>,
}

impl Displayable for Category {
    fn image(&self) -> &str {
        &self.image
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}
