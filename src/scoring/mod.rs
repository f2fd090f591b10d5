//! Judge reply parsing and oracle score aggregation.
//!
//! A judge reply is free text that should contain one JSON object. [`extract_json`] digs the
//! object out, [`ScoreSheet::from_value`] coerces and range-checks the five sub-scores, and
//! [`compute_oracle_score`] folds them into the single weighted metric.
//!
//! [`evaluate_reply`] chains the three steps.

/// Weighted aggregation.
pub mod aggregate;
/// Scoring errors.
pub mod error;
/// Lenient JSON extraction.
pub mod extract;
/// Score records.
pub mod types;


pub use aggregate::compute_oracle_score;
pub use error::ScoringError;
pub use extract::{ExtractionStrategy, extract_json};
pub use types::{OracleScoreResult, ScoreField, ScoreSheet, SubScores};

/// Parses a raw judge reply into a validated, aggregated result.
pub fn evaluate_reply(text: &str) -> Result<OracleScoreResult, ScoringError> {
    let value = extract_json(text)?;
    let sheet = ScoreSheet::from_value(&value)?;
    Ok(OracleScoreResult::from_sheet(sheet))
}
