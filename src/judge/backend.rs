use super::client::OpenAiJudge;
use super::error::JudgeError;
use super::types::EvaluationRequest;

#[cfg(any(test, feature = "mock"))]
use super::mock::MockJudge;

/// Anything that can produce a judge reply for an evaluation.
pub trait JudgeBackend: Send + Sync {
    /// Asks the judge once and returns its raw reply text.
    fn judge(
        &self,
        request: &EvaluationRequest,
    ) -> impl std::future::Future<Output = Result<String, JudgeError>> + Send;
}

impl JudgeBackend for OpenAiJudge {
    async fn judge(&self, request: &EvaluationRequest) -> Result<String, JudgeError> {
        self.complete(request).await
    }
}

#[cfg(any(test, feature = "mock"))]
impl JudgeBackend for MockJudge {
    async fn judge(&self, request: &EvaluationRequest) -> Result<String, JudgeError> {
        self.respond(request)
    }
}
