use crate::config::site_config::SiteConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "salon")]
#[command(about = "Console front-end for the studio site: portfolio lightbox, price list and style advisor")]
pub struct CliConfig {
    /// Path to the site TOML configuration
    #[arg(short, long, default_value = "site.toml")]
    pub config: String,

    /// Advisor API key, overrides `advisor.api_key` from the config file
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the advisor model from the config file
    #[arg(long)]
    pub model: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    pub check: bool,
}

impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(api_key) = &self.api_key {
            config.advisor.api_key = Some(api_key.clone());
            tracing::info!("🔧 Advisor API key overridden from command line");
        }
        if let Some(model) = &self.model {
            config.advisor.model = Some(model.clone());
            tracing::info!("🔧 Advisor model overridden to: {}", model);
        }
    }
}
