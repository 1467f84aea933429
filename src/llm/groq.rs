//! Groq chat-completions HTTP client.
//!
//! Thin wrapper over the OpenAI-compatible `/chat/completions` endpoint.
//! Pure parsing in `parse_completion` for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::LlmError;

pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
pub(crate) struct ApiRequest<'a> {
    pub model: &'a str,
    /// System instruction first, then the user message verbatim.
    pub messages: [ApiMessage<'a>; 2],
    pub temperature: f64,
}

#[derive(Serialize)]
pub(crate) struct ApiMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

// =============================================================================
// REQUEST
// =============================================================================

/// POST `body` to `url` and return the raw 200 response body.
///
/// A fresh client is built per call: each message is its own HTTP session,
/// nothing is pooled or reused across calls.
pub(crate) async fn send(url: &str, api_key: &str, body: &ApiRequest<'_>) -> Result<String, LlmError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;

    let response = http
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| LlmError::Request(e.to_string()))?;

    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| LlmError::Request(e.to_string()))?;
    if status != 200 {
        return Err(LlmError::Status { status, body: text });
    }
    Ok(text)
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract `choices[0].message.content` from a chat-completions body,
/// trimmed of surrounding whitespace.
pub(crate) fn parse_completion(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::Parse(e.to_string()))?;
    let Some(choice) = api.choices.into_iter().next() else {
        return Err(LlmError::Parse("missing choices[0]".to_string()));
    };
    Ok(choice.message.content.trim().to_string())
}

#[cfg(test)]
#[path = "groq_test.rs"]
mod tests;
