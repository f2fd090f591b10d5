//! Upstream LLM judge.
//!
//! The judge receives the original prompt, the baseline answer and the compressed (MRE)
//! answer, and replies with free text that should hold a JSON verdict. One call per
//! evaluation: no retries, no streaming.
//!
//! [`JudgeBackend`] is the seam the gateway depends on. [`OpenAiJudge`] talks to a
//! chat-completion API; [`MockJudge`] is a scripted double for tests.

/// Judge backend trait.
pub mod backend;
/// HTTP chat-completion client.
pub mod client;
/// Judge errors.
pub mod error;
/// Scripted judge for tests.
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Prompt construction.
pub mod prompt;
/// Request record.
pub mod types;


pub use backend::JudgeBackend;
pub use client::OpenAiJudge;
pub use error::JudgeError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockJudge;
pub use prompt::{build_chat_request, build_system_prompt, build_user_prompt};
pub use types::EvaluationRequest;
