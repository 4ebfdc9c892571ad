use axum::{extract::State, Json};

use crate::api::extract::AppPath;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{category_map, CategoriesResponse, QuestionListResponse};
use crate::repositories::CategoryRepository;
use crate::state::AppState;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category id to name map", body = CategoriesResponse),
        (status = 404, description = "No categories", body = ErrorResponse)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = CategoryRepository::get_all(&state.db).await?;
    if categories.is_empty() {
        return Err(AppError::not_found("no categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// Get the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionListResponse),
        (status = 404, description = "Non-integer id or query failure", body = ErrorResponse)
    )
)]
pub async fn list_category_questions(
    State(state): State<AppState>,
    path: Result<AppPath<String>, AppError>,
) -> AppResult<Json<QuestionListResponse>> {
    let AppPath(id) = path.map_err(|e| AppError::not_found(e.to_string()))?;
    let category: i64 = id
        .parse()
        .map_err(|_| AppError::not_found(format!("category id '{}' is not an integer", id)))?;

    let questions = state.questions.by_category(category).await.map_err(|e| {
        tracing::error!("Failed to get questions for category {}: {}", category, e);
        AppError::not_found(e.to_string())
    })?;

    Ok(Json(QuestionListResponse::new(questions, Some(category))))
}
