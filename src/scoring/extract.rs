use serde_json::Value;
use tracing::debug;

use super::error::ScoringError;

const TAGGED_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Ways of locating a JSON value inside free text, tried in [`ORDER`](Self::ORDER).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// The whole reply is JSON.
    Direct,
    /// Interior of the first ```` ```json ```` fence.
    TaggedFence,
    /// Interior of the first ```` ``` ```` fence.
    Fence,
    /// From the first `{` to the last `}` inclusive.
    BraceScan,
}

impl ExtractionStrategy {
    pub const ORDER: [ExtractionStrategy; 4] = [
        ExtractionStrategy::Direct,
        ExtractionStrategy::TaggedFence,
        ExtractionStrategy::Fence,
        ExtractionStrategy::BraceScan,
    ];

    /// Returns the parsed value, or `None` if the delimiters are absent or the
    /// candidate text does not parse.
    pub fn apply(&self, text: &str) -> Option<Value> {
        let candidate = match self {
            ExtractionStrategy::Direct => text,
            ExtractionStrategy::TaggedFence => fenced(text, TAGGED_FENCE)?.trim(),
            ExtractionStrategy::Fence => fenced(text, FENCE)?.trim(),
            ExtractionStrategy::BraceScan => braced(text)?,
        };
        serde_json::from_str(candidate).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::Direct => "direct",
            ExtractionStrategy::TaggedFence => "tagged_fence",
            ExtractionStrategy::Fence => "fence",
            ExtractionStrategy::BraceScan => "brace_scan",
        }
    }
}

/// Text between `open` and the next closing fence. An unterminated fence runs to the end.
fn fenced<'a>(text: &'a str, open: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let rest = &text[start..];
    let end = rest.find(FENCE).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn braced(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Pulls the first JSON value out of a judge reply.
///
/// Strategies run in order and the first one that parses wins. Fails with
/// [`ScoringError::NoJson`] when none does.
pub fn extract_json(text: &str) -> Result<Value, ScoringError> {
    for strategy in ExtractionStrategy::ORDER {
        if let Some(value) = strategy.apply(text) {
            debug!(strategy = strategy.as_str(), "Extracted JSON from judge reply");
            return Ok(value);
        }
    }
    Err(ScoringError::NoJson)
}
