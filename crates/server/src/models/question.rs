use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require_int, require_text, InputError, LooseInt};

/// Trivia question entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category id, not checked against the categories table
    pub category: i64,
    pub difficulty: i32,
}

/// Validated data for inserting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Request body for creating a question.
///
/// All four fields are required and must be truthy; `category` and
/// `difficulty` may be sent as numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub difficulty: Option<LooseInt>,
    #[schema(value_type = Option<i64>)]
    pub category: Option<LooseInt>,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<CreateQuestion, InputError> {
        let question = require_text(self.question, "question")?;
        let answer = require_text(self.answer, "answer")?;
        let difficulty = require_int(self.difficulty.as_ref(), "difficulty")?;
        let category = require_int(self.category.as_ref(), "category")?;

        let difficulty =
            i32::try_from(difficulty).map_err(|_| InputError::Invalid("difficulty"))?;

        Ok(CreateQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Request body for question search
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchQuestionsRequest {
    /// The trimmed search term, or `None` when absent or blank
    pub fn term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> CreateQuestionRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_validate_accepts_string_category() {
        let data = request(serde_json::json!({
            "question": "How many legs does a cow have?",
            "answer": "Four",
            "difficulty": 2,
            "category": "1"
        }))
        .validate()
        .unwrap();

        assert_eq!(data.category, 1);
        assert_eq!(data.difficulty, 2);
        assert_eq!(data.answer, "Four");
    }

    #[test]
    fn test_validate_missing_field() {
        let err = request(serde_json::json!({
            "question": "What is Python?",
            "category": "1",
            "answer": "Python is a programming language"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err, InputError::Missing("difficulty"));
    }

    #[test]
    fn test_validate_falsy_fields() {
        let err = request(serde_json::json!({
            "question": "What is Python?",
            "category": "",
            "answer": "Python is a programming language",
            "difficulty": 1
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err, InputError::Missing("category"));

        let err = request(serde_json::json!({
            "question": "",
            "category": 1,
            "answer": "x",
            "difficulty": 1
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err, InputError::Missing("question"));

        let err = request(serde_json::json!({
            "question": "q",
            "category": 1,
            "answer": "x",
            "difficulty": null
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err, InputError::Missing("difficulty"));
    }

    #[test]
    fn test_validate_non_numeric_category() {
        let err = request(serde_json::json!({
            "question": "q",
            "category": "science",
            "answer": "a",
            "difficulty": 1
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err, InputError::Invalid("category"));
    }

    #[test]
    fn test_search_term_trimmed() {
        let req: SearchQuestionsRequest =
            serde_json::from_value(serde_json::json!({ "searchTerm": "  title " })).unwrap();
        assert_eq!(req.term(), Some("title"));

        let req: SearchQuestionsRequest =
            serde_json::from_value(serde_json::json!({ "searchTerm": "   " })).unwrap();
        assert_eq!(req.term(), None);

        let req: SearchQuestionsRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(req.term(), None);
    }
}
