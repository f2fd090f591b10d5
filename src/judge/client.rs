use serde::Deserialize;
use tracing::{debug, error, instrument};

use super::error::JudgeError;
use super::prompt::build_chat_request;
use super::types::EvaluationRequest;
use crate::config::Config;
use crate::constants::{CHAT_COMPLETIONS_PATH, JUDGE_MODEL};

/// Chat-completion client for the judge model.
///
/// Uses the transport's default timeouts. Cloning shares the connection pool.
#[derive(Clone)]
pub struct OpenAiJudge {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

/// The slice of a chat completion the judge needs. Compatible providers often omit the
/// bookkeeping fields (`id`, `created`, `choices[].index`), so only the content path is read.
#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl std::fmt::Debug for OpenAiJudge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiJudge")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenAiJudge {
    /// `base_url` is the API root, e.g. `https://api.openai.com/v1`.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                CHAT_COMPLETIONS_PATH
            ),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.openai_api_key.clone(), &config.openai_base_url)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one chat completion and returns the first choice's text.
    #[instrument(skip(self, request), fields(model = JUDGE_MODEL))]
    pub async fn complete(&self, request: &EvaluationRequest) -> Result<String, JudgeError> {
        let chat_request = build_chat_request(request)?;

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Judge API error");
            return Err(JudgeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionBody =
            serde_json::from_str(&body).map_err(|e| JudgeError::Decode(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(JudgeError::EmptyCompletion)?;

        debug!(reply_len = content.len(), "Judge replied");
        Ok(content)
    }
}
