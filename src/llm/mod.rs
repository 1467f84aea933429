//! LLM gateway — one chat completion per inbound message.
//!
//! DESIGN
//! ======
//! `complete` sends a two-message conversation (system instruction, then
//! the user's text verbatim) to the configured Groq endpoint and maps the
//! result to a [`Completion`]. Every failure path is logged here and turned
//! into a user-presentable string; no error escapes the call. One HTTP
//! request per call: no retries, no backoff, no pooling.

pub mod groq;
pub mod types;

use tracing::{error, warn};

use crate::config::Settings;
pub use types::Completion;
use types::LlmError;

/// Instruction sent ahead of every user message.
const SYSTEM_PROMPT: &str = "You are an AI integrator helping a candidate work through \
     AI-integration test assignments. Answer briefly and to the point. \
     When useful, suggest architecture options, code, and comments.";

const TEMPERATURE: f64 = 0.3;

/// Reply used when the API key is configured empty. Fixed text, no network
/// activity behind it.
const MISSING_KEY_REPLY: &str = "Configuration error: the Groq API key is not set. \
     Set the GROQ_API_KEY environment variable or fill in `.env`.";

/// Stateless relay to the completion API. Holds configuration only; every
/// call is an independent round trip.
pub struct LlmGateway {
    api_key: String,
    model: String,
    api_url: String,
}

impl LlmGateway {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            api_key: settings.groq_api_key.clone(),
            model: settings.groq_model.clone(),
            api_url: settings.groq_api_url.clone(),
        }
    }

    /// Run one completion round trip for `user_message`.
    pub async fn complete(&self, user_message: &str) -> Completion {
        if self.api_key.is_empty() {
            warn!("completion requested with an empty API key");
            return Completion::Failure(MISSING_KEY_REPLY.to_string());
        }

        let body = groq::ApiRequest {
            model: &self.model,
            messages: [
                groq::ApiMessage { role: "system", content: SYSTEM_PROMPT },
                groq::ApiMessage { role: "user", content: user_message },
            ],
            temperature: TEMPERATURE,
        };

        let text = match groq::send(&self.api_url, &self.api_key, &body).await {
            Ok(text) => text,
            Err(e) => return failure(&e),
        };
        match groq::parse_completion(&text) {
            Ok(reply) => Completion::Reply(reply),
            Err(e) => failure(&e),
        }
    }
}

/// Log the error and render the string the user sees. The non-200 body is
/// logged but never forwarded to the chat.
fn failure(error: &LlmError) -> Completion {
    let reply = match error {
        LlmError::Status { status, body } => {
            error!(status = *status, body = %body, "completion request rejected");
            format!("The model request failed (HTTP {status}).")
        }
        LlmError::Parse(cause) => {
            error!(%cause, "unexpected completion response shape");
            format!("Could not parse the model response: {cause}.")
        }
        LlmError::Request(cause) | LlmError::HttpClientBuild(cause) => {
            error!(%cause, "completion request failed");
            format!("Network error while contacting the model: {cause}.")
        }
    };
    Completion::Failure(reply)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
