use clap::Parser;
use salon_core::app::shell;
use salon_core::utils::{logger, validation::Validate};
use salon_core::{CliConfig, GeminiAdvisor, SiteConfig, SiteSession};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting salon console");
    tracing::info!("📁 Loading configuration from: {}", cli.config);

    let mut config = match SiteConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if cli.check {
        return Ok(());
    }

    let advisor = GeminiAdvisor::new(&config, config.brand_name(), &config.prices)?;
    let mut session = SiteSession::from_config(&config, Arc::new(advisor));

    match &config.site.tagline {
        Some(tagline) => println!("{} - {}", config.brand_name(), tagline),
        None => println!("{}", config.brand_name()),
    }
    println!("{}", shell::HELP);

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    if let Err(e) = shell::run(&mut session, input, &mut output).await {
        tracing::error!("❌ Console stopped: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("👋 Session ended");
    Ok(())
}

fn display_config_summary(config: &SiteConfig) {
    use salon_core::core::AdvisorSettings;

    tracing::info!("📋 Site: {}", config.brand_name());
    tracing::info!("🖼  Portfolio items: {}", config.portfolio.len());
    tracing::info!(
        "💶 Price categories: {} ({} services)",
        config.prices.len(),
        config.prices.iter().map(|c| c.items.len()).sum::<usize>()
    );
    tracing::info!("🔗 Social links: {}", config.social_links.len());
    tracing::info!(
        "🤖 Advisor: {} via {} (timeout {}s)",
        config.model(),
        config.endpoint(),
        config.timeout_seconds()
    );
}
