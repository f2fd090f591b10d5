use serde::{Deserialize, Serialize};

/// One evaluation: the prompt and the two answers to compare.
///
/// All three fields are non-empty once the gateway has accepted a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub prompt: String,
    pub baseline_answer: String,
    pub mre_answer: String,
}

impl EvaluationRequest {
    pub fn new(
        prompt: impl Into<String>,
        baseline_answer: impl Into<String>,
        mre_answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            baseline_answer: baseline_answer.into(),
            mre_answer: mre_answer.into(),
        }
    }
}
