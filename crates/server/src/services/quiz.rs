use rand::Rng;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{InputError, Question, QuizRequest};
use crate::repositories::QuestionRepository;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Invalid quiz request: {0}")]
    Input(#[from] InputError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Picks quiz questions. Holds no per-quiz state: the client sends the ids
/// it has already seen with every turn.
pub struct QuizService {
    db: SqlitePool,
}

impl QuizService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Next question for a quiz turn, or `None` once every question in the
    /// selected scope has been asked
    pub async fn next_question(&self, request: QuizRequest) -> Result<Option<Question>, QuizError> {
        let turn = request.validate()?;

        let candidates = QuestionRepository::get_quiz_candidates(
            &self.db,
            turn.scope,
            &turn.previous_questions,
        )
        .await?;

        tracing::debug!(
            "Quiz turn {:?}: {} candidates after excluding {} previous",
            turn.scope,
            candidates.len(),
            turn.previous_questions.len()
        );

        Ok(pick_random(candidates, &mut rand::thread_rng()))
    }
}

/// Uniformly random element of `candidates`
pub fn pick_random<T, R: Rng + ?Sized>(mut candidates: Vec<T>, rng: &mut R) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::models::{CreateQuestion, QuizCategory};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    async fn service_with_questions() -> (QuizService, Vec<Question>) {
        let pool = create_memory_pool().await.unwrap();
        let mut questions = Vec::new();
        for (i, category) in [1, 1, 2, 2, 2, 3].into_iter().enumerate() {
            let q = QuestionRepository::create(
                &pool,
                CreateQuestion {
                    question: format!("Question {}", i),
                    answer: format!("Answer {}", i),
                    category,
                    difficulty: 1,
                },
            )
            .await
            .unwrap();
            questions.push(q);
        }
        (QuizService::new(pool), questions)
    }

    fn request(kind: &str, id: i64, previous: Option<Vec<i64>>) -> QuizRequest {
        QuizRequest {
            quiz_category: Some(QuizCategory {
                id: Some(id.into()),
                kind: Some(kind.to_string()),
            }),
            previous_questions: previous,
        }
    }

    #[test]
    fn test_pick_random_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random(Vec::<i32>::new(), &mut rng), None);
    }

    #[test]
    fn test_pick_random_covers_all_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_random(vec![1, 2, 3], &mut rng).unwrap());
        }
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_category_quiz_runs_until_exhausted() {
        let (service, _) = service_with_questions().await;
        let mut previous = Vec::new();

        for _ in 0..3 {
            let question = service
                .next_question(request("Art", 2, Some(previous.clone())))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(question.category, 2);
            assert!(!previous.contains(&question.id));
            previous.push(question.id);
        }

        let done = service
            .next_question(request("Art", 2, Some(previous)))
            .await
            .unwrap();
        assert!(done.is_none());
    }

    #[tokio::test]
    async fn test_click_spans_all_categories() {
        let (service, questions) = service_with_questions().await;
        let mut previous = Vec::new();
        let mut categories = HashSet::new();

        for _ in 0..questions.len() {
            let question = service
                .next_question(request("click", 0, Some(previous.clone())))
                .await
                .unwrap()
                .unwrap();
            categories.insert(question.category);
            previous.push(question.id);
        }

        assert_eq!(categories, HashSet::from([1, 2, 3]));
        assert!(service
            .next_question(request("click", 0, Some(previous)))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_null_previous_questions() {
        let (service, _) = service_with_questions().await;
        let question = service
            .next_question(request("Geography", 3, None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(question.category, 3);
    }

    #[tokio::test]
    async fn test_missing_category_rejected() {
        let (service, _) = service_with_questions().await;
        let err = service
            .next_question(QuizRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::Input(InputError::Missing("quiz_category"))
        ));
    }
}
