//! Cross-cutting, shared constants.
//!
//! The aggregation weights are fixed. They intentionally do not sum to `1.0`, so the raw
//! weighted sum can leave `[0, 1]` before [`clamp`](f64::clamp) brings it back.

/// Judge model identifier sent upstream.
pub const JUDGE_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature for the judge (fully deterministic).
pub const JUDGE_TEMPERATURE: f32 = 0.0;

/// Output-token ceiling for the judge reply.
pub const JUDGE_MAX_TOKENS: u32 = 500;

/// Default upstream chat-completion API root.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Path appended to the upstream base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

pub const WEIGHT_SEMANTIC_SIMILARITY: f64 = 0.40;
pub const WEIGHT_INSTRUCTION_FIDELITY: f64 = 0.25;
pub const WEIGHT_FACTUAL_CONSISTENCY: f64 = 0.20;
pub const WEIGHT_STYLE_PRESERVATION: f64 = 0.15;
/// Negative: hallucinations pull the score down.
pub const WEIGHT_HALLUCINATION_RISK: f64 = -0.30;

/// Explanation used when the judge omits one.
pub const FALLBACK_EXPLANATION: &str = "No explanation provided";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;
