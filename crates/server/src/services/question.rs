use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{
    category_map, CategoryMap, CreateQuestionRequest, InputError, Question,
    SearchQuestionsRequest,
};
use crate::repositories::{CategoryRepository, QuestionRepository};
use crate::utils::{paginate, QUESTIONS_PER_PAGE};

#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("Invalid question input: {0}")]
    Input(#[from] InputError),
    #[error("Question not found")]
    NotFound,
    #[error("Page {0} is empty")]
    EmptyPage(i64),
    #[error("Search term is empty")]
    EmptySearchTerm,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One page of questions plus the data the listing view renders beside it
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// Question operations exposed by the API
pub struct QuestionService {
    db: SqlitePool,
}

impl QuestionService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// The `page`-th page (1-based) of all questions ordered by id.
    ///
    /// An empty page is an error even when earlier pages have questions.
    pub async fn page(&self, page: i64) -> Result<QuestionPage, QuestionError> {
        let all = QuestionRepository::get_all(&self.db).await?;
        let questions = paginate(&all, page, QUESTIONS_PER_PAGE).to_vec();
        if questions.is_empty() {
            return Err(QuestionError::EmptyPage(page));
        }

        let categories = category_map(CategoryRepository::get_all(&self.db).await?);

        Ok(QuestionPage {
            questions,
            total_questions: all.len(),
            categories,
        })
    }

    /// Validate and insert a new question
    pub async fn create(&self, request: CreateQuestionRequest) -> Result<Question, QuestionError> {
        let data = request.validate()?;
        let question = QuestionRepository::create(&self.db, data).await?;
        tracing::info!(
            "Created question {} in category {}",
            question.id,
            question.category
        );
        Ok(question)
    }

    /// Delete a question addressed by a raw path segment, returning its id
    pub async fn delete(&self, raw_id: &str) -> Result<i64, QuestionError> {
        let id: i64 = raw_id
            .trim()
            .parse()
            .map_err(|_| QuestionError::Input(InputError::Invalid("id")))?;

        if !QuestionRepository::delete(&self.db, id).await? {
            return Err(QuestionError::NotFound);
        }

        tracing::info!("Deleted question {}", id);
        Ok(id)
    }

    /// Questions whose text contains the trimmed search term, any case
    pub async fn search(
        &self,
        request: &SearchQuestionsRequest,
    ) -> Result<Vec<Question>, QuestionError> {
        let term = request.term().ok_or(QuestionError::EmptySearchTerm)?;
        Ok(QuestionRepository::search(&self.db, term).await?)
    }

    /// Questions of one category; an unknown category yields an empty list
    pub async fn by_category(&self, category: i64) -> Result<Vec<Question>, QuestionError> {
        Ok(QuestionRepository::get_by_category(&self.db, category).await?)
    }
}
