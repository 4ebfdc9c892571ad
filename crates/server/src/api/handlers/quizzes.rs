use axum::{extract::State, Json};

use crate::api::extract::AppJson;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{QuizRequest, QuizResponse};
use crate::state::AppState;

/// Get a random question the player has not seen yet
///
/// `quiz_category.type == "click"` draws from every category. The response
/// question is null once the pool is exhausted.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or null when finished", body = QuizResponse),
        (status = 406, description = "quiz_category missing", body = ErrorResponse),
        (status = 422, description = "Unreadable body, unusable category or query failure", body = ErrorResponse)
    )
)]
pub async fn next_quiz_question(
    State(state): State<AppState>,
    payload: Result<AppJson<QuizRequest>, AppError>,
) -> AppResult<Json<QuizResponse>> {
    // Every failure in a quiz turn is reported as 422, body errors included
    let AppJson(payload) = payload.map_err(|e| AppError::unprocessable(e.to_string()))?;

    let question = state.quiz.next_question(payload).await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
