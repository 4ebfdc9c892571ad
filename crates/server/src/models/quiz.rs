use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{InputError, LooseInt, Question};

/// Category type the web client sends when the player picks "All"
pub const ALL_CATEGORIES: &str = "click";

/// Category selection for a quiz turn
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[schema(value_type = Option<i64>)]
    pub id: Option<LooseInt>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Request body for the next quiz question
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    /// Ids already asked in this quiz; null is treated as empty
    pub previous_questions: Option<Vec<i64>>,
}

/// Which questions a quiz turn draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

/// Validated quiz turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizTurn {
    pub scope: QuizScope,
    pub previous_questions: Vec<i64>,
}

impl QuizRequest {
    pub fn validate(self) -> Result<QuizTurn, InputError> {
        let category = self
            .quiz_category
            .filter(|c| c.id.is_some() || c.kind.is_some())
            .ok_or(InputError::Missing("quiz_category"))?;

        // A missing or null type is simply not "click"
        let scope = if category.kind.as_deref() == Some(ALL_CATEGORIES) {
            QuizScope::All
        } else {
            let id = category
                .id
                .as_ref()
                .and_then(LooseInt::as_i64)
                .ok_or(InputError::Invalid("quiz_category.id"))?;
            QuizScope::Category(id)
        };

        Ok(QuizTurn {
            scope,
            previous_questions: self.previous_questions.unwrap_or_default(),
        })
    }
}

/// Quiz response; `question` is null once the pool is exhausted
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(json: serde_json::Value) -> Result<QuizTurn, InputError> {
        serde_json::from_value::<QuizRequest>(json).unwrap().validate()
    }

    #[test]
    fn test_click_means_all_categories() {
        let turn = turn(serde_json::json!({
            "quiz_category": { "type": "click", "id": 0 },
            "previous_questions": [1, 2]
        }))
        .unwrap();

        assert_eq!(turn.scope, QuizScope::All);
        assert_eq!(turn.previous_questions, vec![1, 2]);
    }

    #[test]
    fn test_category_id_as_string() {
        let turn = turn(serde_json::json!({
            "quiz_category": { "type": "Science", "id": "1" },
            "previous_questions": null
        }))
        .unwrap();

        assert_eq!(turn.scope, QuizScope::Category(1));
        assert!(turn.previous_questions.is_empty());
    }

    #[test]
    fn test_missing_quiz_category() {
        assert_eq!(
            turn(serde_json::json!({ "previous_questions": [] })),
            Err(InputError::Missing("quiz_category"))
        );
        assert_eq!(
            turn(serde_json::json!({ "quiz_category": null })),
            Err(InputError::Missing("quiz_category"))
        );
        assert_eq!(
            turn(serde_json::json!({ "quiz_category": {} })),
            Err(InputError::Missing("quiz_category"))
        );
    }

    #[test]
    fn test_unusable_category_id() {
        assert_eq!(
            turn(serde_json::json!({ "quiz_category": { "type": "Art", "id": "art" } })),
            Err(InputError::Invalid("quiz_category.id"))
        );
        assert_eq!(
            turn(serde_json::json!({ "quiz_category": { "type": null, "id": null } })),
            Err(InputError::Missing("quiz_category"))
        );
    }

    #[test]
    fn test_untyped_category_uses_id() {
        let with_null = turn(serde_json::json!({
            "quiz_category": { "type": null, "id": 1 },
            "previous_questions": []
        }))
        .unwrap();
        assert_eq!(with_null.scope, QuizScope::Category(1));

        let without_type = turn(serde_json::json!({ "quiz_category": { "id": "4" } })).unwrap();
        assert_eq!(without_type.scope, QuizScope::Category(4));
    }
}
