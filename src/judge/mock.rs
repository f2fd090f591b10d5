use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::error::JudgeError;
use super::types::EvaluationRequest;

#[derive(Clone)]
enum Script {
    Reply(String),
    Upstream { status: u16, body: String },
    Empty,
}

#[derive(Clone)]
/// Scripted judge that records how often, and with what, it was called.
pub struct MockJudge {
    script: Script,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<EvaluationRequest>>>,
}

impl Default for MockJudge {
    fn default() -> Self {
        Self::replying(
            r#"{"semantic_similarity":0.9,"instruction_fidelity":0.8,"factual_consistency":0.7,"style_preservation":0.6,"hallucination_risk":0.1,"explanation":"Mock verdict."}"#,
        )
    }
}

impl MockJudge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always replies with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(text.into()))
    }

    /// Always fails as if upstream returned `status` with `body`.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self::with_script(Script::Upstream {
            status,
            body: body.into(),
        })
    }

    /// Always fails with [`JudgeError::EmptyCompletion`].
    pub fn empty() -> Self {
        Self::with_script(Script::Empty)
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of judge invocations so far (shared across clones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent request passed to the judge.
    pub fn last_request(&self) -> Option<EvaluationRequest> {
        self.last_request.lock().ok()?.clone()
    }

    pub(crate) fn respond(&self, request: &EvaluationRequest) -> Result<String, JudgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Upstream { status, body } => Err(JudgeError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            Script::Empty => Err(JudgeError::EmptyCompletion),
        }
    }
}
