use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};

use crate::gateway::auth::authorize;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::parse_evaluation_request;
use crate::gateway::state::HandlerState;
use crate::judge::JudgeBackend;
use crate::scoring::evaluate_reply;

/// Scores an MRE answer against its baseline.
///
/// Order matters: preflight, method, auth, body validation, then the single upstream call.
/// Nothing reaches the judge unless every earlier gate passed.
#[instrument(
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4(), method = %method)
)]
pub async fn oracle_eval_handler<J>(
    State(state): State<HandlerState<J>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, GatewayError>
where
    J: JudgeBackend + Clone + Send + Sync + 'static,
{
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        return Err(GatewayError::MethodNotAllowed);
    }

    authorize(&state.api_key, &headers)?;

    // Buffering failures (e.g. over the body limit) surface only after auth.
    let body = body.map_err(|e| GatewayError::internal(e.body_text()))?;
    let request = parse_evaluation_request(&body)?;
    debug!(
        prompt_len = request.prompt.len(),
        baseline_len = request.baseline_answer.len(),
        mre_len = request.mre_answer.len(),
        "Calling judge"
    );

    let reply = state.judge.judge(&request).await?;
    let result = evaluate_reply(&reply)?;

    info!(
        oracle_score = result.oracle_score,
        semantic_similarity = result.semantic_similarity,
        hallucination_risk = result.hallucination_risk,
        "Evaluation complete"
    );

    Ok((StatusCode::OK, Json(result)).into_response())
}
