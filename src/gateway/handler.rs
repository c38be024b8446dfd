use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{GradeRequest, GradeResponse};
use crate::gateway::state::AppState;
use crate::grading::grade;

/// `POST /grade`: similarity(reference_answer, student_answer) → grade.
///
/// Encoding is CPU-bound, so it runs on the blocking pool.
#[instrument(skip(state, payload), fields(mode = tracing::field::Empty))]
pub async fn grade_handler(
    State(state): State<AppState>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<Json<GradeResponse>, GatewayError> {
    let Json(request) = payload.inspect_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected grade request");
    })?;

    let provider = Arc::clone(&state.provider);
    tracing::Span::current().record("mode", tracing::field::display(provider.mode()));

    debug!(
        question_len = request.question.len(),
        reference_len = request.reference_answer.len(),
        student_len = request.student_answer.len(),
        "Grading answer"
    );

    let similarity = tokio::task::spawn_blocking(move || {
        provider.similarity(&request.reference_answer, &request.student_answer)
    })
    .await
    .map_err(|e| GatewayError::InternalError(format!("grading task failed: {}", e)))??;

    let outcome = grade(similarity);

    info!(
        similarity,
        score = outcome.score,
        category = %outcome.category,
        "Answer graded"
    );

    Ok(Json(GradeResponse::new(similarity, outcome)))
}
