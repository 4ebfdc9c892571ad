use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    CategoriesResponse, Category, CreateQuestionRequest, CreatedResponse, DeletedResponse,
    Question, QuestionListResponse, QuestionPageResponse, QuizCategory, QuizRequest,
    QuizResponse, SearchQuestionsRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "1.0.0"
    ),
    tags(
        (name = "categories", description = "Category listing endpoints"),
        (name = "questions", description = "Question management and search endpoints"),
        (name = "quizzes", description = "Quiz play endpoints")
    ),
    components(schemas(
        Category,
        Question,
        CategoriesResponse,
        QuestionPageResponse,
        QuestionListResponse,
        CreateQuestionRequest,
        CreatedResponse,
        DeletedResponse,
        SearchQuestionsRequest,
        QuizCategory,
        QuizRequest,
        QuizResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;
