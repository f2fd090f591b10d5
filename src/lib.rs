//! MRE oracle library crate (used by the server binary and integration tests).
//!
//! Scores a compressed ("MRE") answer against a baseline answer for the same prompt by
//! asking an upstream LLM judge for five sub-scores and folding them into one weighted
//! oracle score.
//!
//! ## Modules
//! - [`config`] - Environment-backed [`Config`]
//! - [`judge`] - [`JudgeBackend`] seam, [`OpenAiJudge`] client, prompt construction
//! - [`scoring`] - Lenient JSON extraction, sub-score validation, [`compute_oracle_score`]
//! - [`gateway`] - Axum router and request handler
//!
//! ## Test/Mock Support
//! [`MockJudge`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod gateway;
pub mod judge;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use gateway::{GatewayError, HandlerState, create_router_with_state};
#[cfg(any(test, feature = "mock"))]
pub use judge::MockJudge;
pub use judge::{EvaluationRequest, JudgeBackend, JudgeError, OpenAiJudge};
pub use scoring::{
    OracleScoreResult, ScoreField, ScoreSheet, ScoringError, SubScores, compute_oracle_score,
    evaluate_reply, extract_json,
};
