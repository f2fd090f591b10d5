use async_openai::types::chat::CreateChatCompletionRequest;

use super::error::JudgeError;
use super::types::EvaluationRequest;
use crate::constants::{JUDGE_MAX_TOKENS, JUDGE_MODEL, JUDGE_TEMPERATURE};

const SYSTEM_PROMPT: &str = r#"You are an evaluation model. Your task is to compare two answers to the same user prompt.

You must output strict JSON, no prose, with numeric scores between 0 and 1.

Definitions:
- semantic_similarity: how close the two answers are in meaning (0 = completely different, 1 = identical meaning).
- instruction_fidelity: how well the MRE answer follows the original user instructions compared to baseline (0 = ignores instructions, 1 = perfectly follows).
- factual_consistency: does the MRE answer preserve the same factual claims as the baseline (0 = totally different/wrong facts, 1 = same correct facts).
- style_preservation: how similar the style, tone, and structure are (0 = totally different style, 1 = very similar style).
- hallucination_risk: if the MRE answer introduces unsupported claims or fabrications relative to the baseline and prompt (0 = no hallucinations, 1 = severe hallucinations).

Return strict JSON with this exact structure (no additional text):
{
  "semantic_similarity": <0-1>,
  "instruction_fidelity": <0-1>,
  "factual_consistency": <0-1>,
  "style_preservation": <0-1>,
  "hallucination_risk": <0-1>,
  "explanation": "<short justification>"
}"#;

/// Fixed instruction block describing the five dimensions and the reply format.
pub fn build_system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Interpolates the request verbatim into the user turn.
pub fn build_user_prompt(request: &EvaluationRequest) -> String {
    format!(
        "Original User Prompt:\n{}\n\nBaseline Answer:\n{}\n\nMRE Answer:\n{}\n\n\
         Evaluate the MRE answer compared to the baseline answer. Output strict JSON only.",
        request.prompt, request.baseline_answer, request.mre_answer
    )
}

/// Builds the single chat-completion request sent to the judge.
///
/// Deterministic sampling (`temperature = 0`), capped output, no streaming.
pub fn build_chat_request(
    request: &EvaluationRequest,
) -> Result<CreateChatCompletionRequest, JudgeError> {
    serde_json::from_value(serde_json::json!({
        "model": JUDGE_MODEL,
        "messages": [
            { "role": "system", "content": build_system_prompt() },
            { "role": "user", "content": build_user_prompt(request) }
        ],
        "temperature": JUDGE_TEMPERATURE,
        "max_tokens": JUDGE_MAX_TOKENS,
    }))
    .map_err(|e| JudgeError::Encode(e.to_string()))
}
