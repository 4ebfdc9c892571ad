use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionListResponse,
    QuestionPageResponse, SearchQuestionsRequest,
};
use crate::services::QuestionError;
use crate::state::AppState;
use crate::utils::parse_page;

/// Query parameters for the question listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number (default 1, 10 questions per page)
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponse),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 404, description = "Requested page is empty", body = ErrorResponse)
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PageQuery>,
) -> AppResult<Json<QuestionPageResponse>> {
    let page = parse_page(query.page.as_deref());

    let page = state.questions.page(page).await.map_err(|e| match e {
        QuestionError::Database(e) => AppError::Database(e),
        other => AppError::not_found(other.to_string()),
    })?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories: page.categories,
        current_category: None,
    }))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 406, description = "A required field is missing or empty", body = ErrorResponse),
        (status = 422, description = "Non-numeric id field or insert failure", body = ErrorResponse)
    )
)]
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> AppResult<Json<CreatedResponse>> {
    let question = state.questions.create(payload).await.map_err(|e| match e {
        QuestionError::Input(e) => AppError::from(e),
        other => {
            tracing::error!("Failed to create question: {}", other);
            AppError::unprocessable(other.to_string())
        }
    })?;

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 422, description = "Malformed id or no question with this id", body = ErrorResponse)
    )
)]
pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<AppPath<String>, AppError>,
) -> AppResult<Json<DeletedResponse>> {
    let AppPath(id) = path.map_err(|e| AppError::unprocessable(e.to_string()))?;

    let deleted = state.questions.delete(&id).await.map_err(|e| {
        if let QuestionError::Database(ref db) = e {
            tracing::error!("Failed to delete question {}: {}", id, db);
        }
        AppError::unprocessable(e.to_string())
    })?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

/// Search questions by a case-insensitive substring
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Matching questions", body = QuestionListResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Search term absent or blank", body = ErrorResponse)
    )
)]
pub async fn search_questions(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SearchQuestionsRequest>,
) -> AppResult<Json<QuestionListResponse>> {
    let questions = state.questions.search(&payload).await.map_err(|e| match e {
        QuestionError::Database(e) => AppError::Database(e),
        other => AppError::not_found(other.to_string()),
    })?;

    Ok(Json(QuestionListResponse::new(questions, None)))
}
