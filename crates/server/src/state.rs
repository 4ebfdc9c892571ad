use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::{QuestionService, QuizService};

/// Shared handler state, created once per process and cloned into each request
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub questions: Arc<QuestionService>,
    pub quiz: Arc<QuizService>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let questions = Arc::new(QuestionService::new(db.clone()));
        let quiz = Arc::new(QuizService::new(db.clone()));

        Self {
            db,
            questions,
            quiz,
        }
    }
}
