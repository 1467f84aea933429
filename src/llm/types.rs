//! Gateway outcome and error types.

/// Errors produced while calling the completion API.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request could not be completed (connect, DNS, TLS, timeout)
    /// or the response body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-200 status.
    #[error("API returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected chat-completions shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The per-call HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Outcome of one gateway call. Both arms carry text ready to send back
/// to the chat; callers never see an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The model's reply, trimmed of surrounding whitespace.
    Reply(String),
    /// A human-readable description of what went wrong.
    Failure(String),
}

impl Completion {
    /// The text to send to the user, whichever arm this is.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Reply(text) | Self::Failure(text) => text,
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
