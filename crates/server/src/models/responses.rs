use serde::Serialize;
use utoipa::ToSchema;

use super::{CategoryMap, Question};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// One page of the question listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count before pagination
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null for the unfiltered listing
    pub current_category: Option<i64>,
}

/// Search results or questions of one category
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, current_category: Option<i64>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}
