use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by a [`JudgeBackend`](super::JudgeBackend).
pub enum JudgeError {
    /// Request never produced an HTTP response (DNS, connect, TLS, body read).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// Chat request could not be built.
    #[error("failed to encode judge request: {0}")]
    Encode(String),

    /// Upstream body was not a chat-completion response.
    #[error("failed to decode judge response: {0}")]
    Decode(String),

    /// Response had no assistant text in its first choice.
    #[error("judge response contained no message content")]
    EmptyCompletion,
}
