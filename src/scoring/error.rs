use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
/// Errors returned while turning a judge reply into scores.
pub enum ScoringError {
    /// No extraction strategy produced a JSON value.
    #[error("No JSON found in response")]
    NoJson,

    /// The extracted JSON is not an object.
    #[error("judge reply is not a JSON object")]
    NotAnObject,

    /// A sub-score is present but is not a finite number.
    #[error("score '{field}' is not numeric")]
    NonNumeric {
        /// Offending key.
        field: &'static str,
    },

    /// A sub-score lies outside `[0, 1]`.
    #[error("score '{field}' out of range 0-1: {value}")]
    OutOfRange {
        /// Offending key.
        field: &'static str,
        /// Value the judge returned.
        value: f64,
    },
}

impl ScoringError {
    /// `true` for failures that indicate the judge returned unusable scores
    /// (as opposed to no parseable structure at all).
    pub fn is_invalid_scores(&self) -> bool {
        matches!(
            self,
            ScoringError::NonNumeric { .. } | ScoringError::OutOfRange { .. }
        )
    }
}
