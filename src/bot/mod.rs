//! Telegram-side handlers and dispatcher wiring.
//!
//! DESIGN
//! ======
//! One dispatcher over long polling; teloxide runs each update in its own
//! task. Handlers share nothing but the gateway behind an `Arc`, so no
//! locking is needed. Replies go out as plain text: the model is free to
//! emit stray `*` or `_`, and an unescaped Markdown entity would otherwise
//! make the send fail.

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, KeyboardRemove};
use teloxide::utils::command::BotCommands;
use tracing::info;

use crate::llm::LlmGateway;

/// Fallback address for updates that carry no sender identity.
const ANONYMOUS_NAME: &str = "friend";

pub(crate) const HELP_TEXT: &str = "Just write a message and I will forward it to the Groq LLM.\n\n\
     /start - a short greeting\n\
     /help - this message";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Help,
}

/// Dispatch tree: commands first, then plain text that did not arrive
/// through another bot.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.text().is_some() && msg.via_bot.is_none())
                .endpoint(handle_text),
        )
}

/// Poll for updates until shutdown, dispatching each to its handler.
pub async fn run(bot: Bot, gateway: Arc<LlmGateway>) {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![gateway])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let name = msg.from.as_ref().map(|user| user.full_name());
            bot.send_message(msg.chat.id, greeting(name.as_deref()))
                .reply_markup(KeyboardRemove::new())
                .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, HELP_TEXT).await?;
        }
    }
    Ok(())
}

async fn handle_text(bot: Bot, gateway: Arc<LlmGateway>, msg: Message) -> ResponseResult<()> {
    let user_text = msg.text().unwrap_or_default();
    info!(chat_id = %msg.chat.id, text = %user_text, "message received");

    bot.send_chat_action(msg.chat.id, ChatAction::Typing).await?;

    let reply = gateway.complete(user_text).await;
    bot.send_message(msg.chat.id, reply.into_text()).await?;
    Ok(())
}

/// Greeting for `/start`, addressed by name when the sender is known.
pub(crate) fn greeting(name: Option<&str>) -> String {
    let name = name.unwrap_or(ANONYMOUS_NAME);
    format!(
        "Hi, {name}!\n\nI am an AI-integrator bot (Groq + teloxide).\n\
         Send me any question about AI or code and I will forward it to the LLM \
         with a fixed system instruction and return the answer."
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
