//! Bot configuration loaded from the process environment.
//!
//! DESIGN
//! ======
//! One immutable `Settings` value is built at startup and handed to the
//! pieces that need it; nothing reads the environment after that. Lookups
//! are case-insensitive (`GROQ_MODEL` and `groq_model` both match), so a
//! `.env` written in either convention loads the same way.

pub const DEFAULT_GROQ_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Errors raised while building [`Settings`]. All are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingVar(&'static str),
    #[error("env var {0} is empty")]
    EmptyVar(&'static str),
}

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub telegram_bot_token: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_api_url: String,
}

impl Settings {
    /// Build settings from environment variables.
    ///
    /// Required:
    /// - `TELEGRAM_BOT_TOKEN` (must be non-empty)
    /// - `GROQ_API_KEY` (must be set; an empty value is accepted and makes
    ///   every message answer with a configuration-error reply instead)
    ///
    /// Optional:
    /// - `GROQ_MODEL`: default [`DEFAULT_GROQ_MODEL`]
    /// - `GROQ_API_URL`: default [`DEFAULT_GROQ_API_URL`]
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when a required value is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_bot_token = require("TELEGRAM_BOT_TOKEN")?;
        if telegram_bot_token.is_empty() {
            return Err(ConfigError::EmptyVar("TELEGRAM_BOT_TOKEN"));
        }

        let groq_api_key = require("GROQ_API_KEY")?;

        let groq_model = env_ci("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string());
        let groq_api_url = env_ci("GROQ_API_URL").unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string());

        Ok(Self { telegram_bot_token, groq_api_key, groq_model, groq_api_url })
    }
}

/// Case-insensitive environment lookup.
fn env_ci(name: &str) -> Option<String> {
    std::env::vars()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env_ci(name).ok_or(ConfigError::MissingVar(name))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
