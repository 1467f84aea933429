//! Process entry: load settings, wire the LLM gateway to the bot, start polling.

mod bot;
mod config;
mod llm;

use std::sync::Arc;

use teloxide::Bot;

#[tokio::main]
async fn main() {
    // `.env` overlay is optional; a missing file is not an error.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = config::Settings::from_env().expect("configuration failed");

    let gateway = Arc::new(llm::LlmGateway::new(&settings));
    let bot = Bot::new(settings.telegram_bot_token.clone());

    tracing::info!(model = %settings.groq_model, "bot started, waiting for messages");
    bot::run(bot, gateway).await;
}
