use crate::constants::{
    WEIGHT_FACTUAL_CONSISTENCY, WEIGHT_HALLUCINATION_RISK, WEIGHT_INSTRUCTION_FIDELITY,
    WEIGHT_SEMANTIC_SIMILARITY, WEIGHT_STYLE_PRESERVATION,
};

use super::types::SubScores;

/// Weighted sum of the sub-scores, clamped to `[0, 1]`.
///
/// ```text
/// raw = 0.40·semantic + 0.25·instruction + 0.20·factual + 0.15·style − 0.30·hallucination
/// ```
///
/// The weights sum to `0.7`; `raw` spans `[-0.3, 1.0]` for valid inputs and the clamp is
/// applied after the sum, not by renormalizing.
#[inline]
pub fn compute_oracle_score(scores: &SubScores) -> f64 {
    let raw = WEIGHT_SEMANTIC_SIMILARITY * scores.semantic_similarity
        + WEIGHT_INSTRUCTION_FIDELITY * scores.instruction_fidelity
        + WEIGHT_FACTUAL_CONSISTENCY * scores.factual_consistency
        + WEIGHT_STYLE_PRESERVATION * scores.style_preservation
        + WEIGHT_HALLUCINATION_RISK * scores.hallucination_risk;

    raw.clamp(0.0, 1.0)
}
