use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    error::{method_not_allowed_fallback, not_found_fallback},
    openapi::ApiDoc,
    state::AppState,
};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::list_categories))
        .routes(routes!(handlers::list_category_questions))
        .routes(routes!(handlers::list_questions, handlers::create_question))
        .routes(routes!(handlers::delete_question))
        .routes(routes!(handlers::search_questions))
        .routes(routes!(handlers::next_quiz_question))
        .with_state(state)
        .split_for_parts();

    let router = router
        .method_not_allowed_fallback(method_not_allowed_fallback)
        .fallback(not_found_fallback)
        .layer(TraceLayer::new_for_http());

    (router, api)
}
