use crate::core::{AdvisorSettings, Category, MediaItem, SocialLink};
use crate::utils::error::{Result, SalonError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ADVISOR_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ADVISOR_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Read-only site content plus advisor settings, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub portfolio: Vec<MediaItem>,
    #[serde(default)]
    pub prices: Vec<Category>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub brand_name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub policy_rules: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub temperature: Option<f32>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SalonError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SalonError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SalonError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.brand_name", &self.site.brand_name)?;
        validation::validate_url("advisor.endpoint", self.endpoint())?;
        validation::validate_non_empty_string("advisor.model", self.model())?;

        let api_key = validation::validate_required_field("advisor.api_key", &self.advisor.api_key)?;
        validation::validate_non_empty_string("advisor.api_key", api_key)?;
        if api_key.contains("${") {
            return Err(SalonError::InvalidConfigValueError {
                field: "advisor.api_key".to_string(),
                value: api_key.clone(),
                reason: "Environment placeholder was not resolved".to_string(),
            });
        }

        if let Some(timeout) = self.advisor.timeout_seconds {
            validation::validate_positive_number("advisor.timeout_seconds", timeout, 1)?;
        }
        if let Some(temperature) = self.advisor.temperature {
            validation::validate_range("advisor.temperature", temperature, 0.0, 2.0)?;
        }

        validation::validate_unique("portfolio.id", self.portfolio.iter().map(|m| m.id.as_str()))?;
        for (i, item) in self.portfolio.iter().enumerate() {
            validation::validate_non_empty_string(&format!("portfolio[{}].image", i), &item.image)?;
        }
        for (i, category) in self.prices.iter().enumerate() {
            validation::validate_non_empty_string(&format!("prices[{}].title", i), &category.title)?;
            validation::validate_non_empty_string(&format!("prices[{}].image", i), &category.image)?;
        }
        for (i, link) in self.social_links.iter().enumerate() {
            validation::validate_url(&format!("social_links[{}].url", i), &link.url)?;
        }

        Ok(())
    }

    pub fn brand_name(&self) -> &str {
        &self.site.brand_name
    }
}

impl AdvisorSettings for SiteConfig {
    fn endpoint(&self) -> &str {
        self.advisor
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ADVISOR_ENDPOINT)
    }

    fn model(&self) -> &str {
        self.advisor.model.as_deref().unwrap_or(DEFAULT_ADVISOR_MODEL)
    }

    fn api_key(&self) -> &str {
        self.advisor.api_key.as_deref().unwrap_or_default()
    }

    fn timeout_seconds(&self) -> u64 {
        self.advisor.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn temperature(&self) -> Option<f32> {
        self.advisor.temperature
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
