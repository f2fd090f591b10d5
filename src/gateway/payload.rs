use serde_json::Value;

use crate::gateway::error::GatewayError;
use crate::judge::EvaluationRequest;

/// Parses and validates an evaluation request body.
///
/// Malformed JSON is an internal error. A body that parses but lacks any of the three
/// fields as a non-empty string is [`GatewayError::MissingFields`].
pub fn parse_evaluation_request(body: &[u8]) -> Result<EvaluationRequest, GatewayError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| GatewayError::internal(format!("Invalid JSON body: {}", e)))?;

    match (
        required_field(&value, "prompt"),
        required_field(&value, "baseline_answer"),
        required_field(&value, "mre_answer"),
    ) {
        (Some(prompt), Some(baseline_answer), Some(mre_answer)) => Ok(EvaluationRequest {
            prompt,
            baseline_answer,
            mre_answer,
        }),
        _ => Err(GatewayError::MissingFields),
    }
}

fn required_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
