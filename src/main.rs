//! Uni Advisor Bot entry point.

use std::sync::Arc;

use anyhow::Result;
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::EnvFilter;

use uni_advisor_bot::config::Config;
use uni_advisor_bot::services::bot::{run, BotContext};
use uni_advisor_bot::services::images::ImageResolver;
use uni_advisor_llm::{GeminiProvider, ProviderConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let model = Arc::new(GeminiProvider::new(ProviderConfig::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    )));
    let images = ImageResolver::new(
        config.google_api_key.clone(),
        config.search_engine_id.clone(),
    );
    let bot = Bot::new(&config.telegram_token);

    info!(model = %config.gemini_model, "starting uni-advisor bot");
    run(bot, Arc::new(BotContext::new(model, images))).await;
    Ok(())
}
