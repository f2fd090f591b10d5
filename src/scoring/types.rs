use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::aggregate::compute_oracle_score;
use super::error::ScoringError;
use crate::constants::FALLBACK_EXPLANATION;

/// One of the five judged dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    SemanticSimilarity,
    InstructionFidelity,
    FactualConsistency,
    StylePreservation,
    HallucinationRisk,
}

impl ScoreField {
    /// All fields, in the order they are read.
    pub const ALL: [ScoreField; 5] = [
        ScoreField::SemanticSimilarity,
        ScoreField::InstructionFidelity,
        ScoreField::FactualConsistency,
        ScoreField::StylePreservation,
        ScoreField::HallucinationRisk,
    ];

    /// JSON key the judge is asked to emit.
    pub fn key(&self) -> &'static str {
        match self {
            ScoreField::SemanticSimilarity => "semantic_similarity",
            ScoreField::InstructionFidelity => "instruction_fidelity",
            ScoreField::FactualConsistency => "factual_consistency",
            ScoreField::StylePreservation => "style_preservation",
            ScoreField::HallucinationRisk => "hallucination_risk",
        }
    }
}

impl std::fmt::Display for ScoreField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The five judged sub-scores, each in `[0, 1]` once validated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub semantic_similarity: f64,
    pub instruction_fidelity: f64,
    pub factual_consistency: f64,
    pub style_preservation: f64,
    pub hallucination_risk: f64,
}

impl SubScores {
    pub fn get(&self, field: ScoreField) -> f64 {
        match field {
            ScoreField::SemanticSimilarity => self.semantic_similarity,
            ScoreField::InstructionFidelity => self.instruction_fidelity,
            ScoreField::FactualConsistency => self.factual_consistency,
            ScoreField::StylePreservation => self.style_preservation,
            ScoreField::HallucinationRisk => self.hallucination_risk,
        }
    }

    fn set(&mut self, field: ScoreField, value: f64) {
        let slot = match field {
            ScoreField::SemanticSimilarity => &mut self.semantic_similarity,
            ScoreField::InstructionFidelity => &mut self.instruction_fidelity,
            ScoreField::FactualConsistency => &mut self.factual_consistency,
            ScoreField::StylePreservation => &mut self.style_preservation,
            ScoreField::HallucinationRisk => &mut self.hallucination_risk,
        };
        *slot = value;
    }

    /// Fails on the first sub-score outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for field in ScoreField::ALL {
            let value = self.get(field);
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoringError::OutOfRange {
                    field: field.key(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Parsed judge verdict: validated sub-scores plus the judge's explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheet {
    pub scores: SubScores,
    pub explanation: String,
    /// Fields the judge omitted (or sent as `null`, `false` or `""`) that were read as `0.0`.
    pub defaulted: Vec<ScoreField>,
}

impl ScoreSheet {
    /// Coerces and range-checks the judge's JSON object.
    ///
    /// Absent, `null`, `false` and `""` sub-scores read as `0.0` and are listed in
    /// [`defaulted`](Self::defaulted). Numbers and numeric strings are accepted; anything
    /// else is [`ScoringError::NonNumeric`]. Out-of-range values are rejected, never clamped.
    pub fn from_value(value: &Value) -> Result<Self, ScoringError> {
        let object = value.as_object().ok_or(ScoringError::NotAnObject)?;

        let mut scores = SubScores::default();
        let mut defaulted = Vec::new();

        for field in ScoreField::ALL {
            match coerce_score(object.get(field.key()), field)? {
                Some(v) => scores.set(field, v),
                None => defaulted.push(field),
            }
        }

        if !defaulted.is_empty() {
            let keys: Vec<&str> = defaulted.iter().map(ScoreField::key).collect();
            warn!(fields = ?keys, "Judge omitted sub-scores; reading them as 0");
        }

        scores.validate()?;

        Ok(Self {
            scores,
            explanation: coerce_explanation(object.get("explanation")),
            defaulted,
        })
    }
}

fn coerce_score(raw: Option<&Value>, field: ScoreField) -> Result<Option<f64>, ScoringError> {
    let non_numeric = || ScoringError::NonNumeric { field: field.key() };

    let parsed = match raw {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(None),
        Some(Value::String(s)) if s.is_empty() => return Ok(None),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(non_numeric)?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| non_numeric())?,
        Some(_) => return Err(non_numeric()),
    };

    if !parsed.is_finite() {
        return Err(non_numeric());
    }

    Ok(Some(parsed))
}

fn coerce_explanation(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => FALLBACK_EXPLANATION.to_string(),
        Some(Value::String(s)) if s.is_empty() => FALLBACK_EXPLANATION.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Response body for a successful evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleScoreResult {
    pub semantic_similarity: f64,
    pub instruction_fidelity: f64,
    pub factual_consistency: f64,
    pub style_preservation: f64,
    pub hallucination_risk: f64,
    pub oracle_score: f64,
    pub raw_model_explanation: String,
}

impl OracleScoreResult {
    pub fn from_sheet(sheet: ScoreSheet) -> Self {
        let s = sheet.scores;
        Self {
            semantic_similarity: s.semantic_similarity,
            instruction_fidelity: s.instruction_fidelity,
            factual_consistency: s.factual_consistency,
            style_preservation: s.style_preservation,
            hallucination_risk: s.hallucination_risk,
            oracle_score: compute_oracle_score(&s),
            raw_model_explanation: sheet.explanation,
        }
    }

    /// The sub-scores this result was computed from.
    pub fn sub_scores(&self) -> SubScores {
        SubScores {
            semantic_similarity: self.semantic_similarity,
            instruction_fidelity: self.instruction_fidelity,
            factual_consistency: self.factual_consistency,
            style_preservation: self.style_preservation,
            hallucination_risk: self.hallucination_risk,
        }
    }
}
