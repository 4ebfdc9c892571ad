use sqlx::SqlitePool;
use std::collections::HashSet;

use crate::models::{CreateQuestion, Question, QuizScope};

/// Common SELECT fields for question queries
const SELECT_QUESTION: &str = r#"
    SELECT id, question, answer, category, difficulty
    FROM questions
"#;

/// Largest exclusion list pushed into SQL as bind parameters; longer lists
/// are filtered after the fetch to stay under SQLite's variable limit.
const MAX_EXCLUDE_BINDS: usize = 900;

pub struct QuestionRepository;

impl QuestionRepository {
    /// Create a new question
    pub async fn create(pool: &SqlitePool, data: CreateQuestion) -> Result<Question, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.category)
        .bind(data.difficulty)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a question by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_QUESTION);
        let row = sqlx::query_as::<_, QuestionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all questions ordered by ID
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("{} ORDER BY id ASC", SELECT_QUESTION);
        let rows = sqlx::query_as::<_, QuestionRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get all questions of a category ordered by ID
    pub async fn get_by_category(
        pool: &SqlitePool,
        category: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("{} WHERE category = $1 ORDER BY id ASC", SELECT_QUESTION);
        let rows = sqlx::query_as::<_, QuestionRow>(&query)
            .bind(category)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Case-insensitive substring search over question text.
    ///
    /// Wildcards in `term` match literally. SQLite folds case for ASCII only.
    pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "{} WHERE question LIKE $1 ESCAPE '\\' ORDER BY id ASC",
            SELECT_QUESTION
        );
        let pattern = format!("%{}%", escape_like(term));
        let rows = sqlx::query_as::<_, QuestionRow>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Questions a quiz turn may draw from: those in `scope` whose id is not
    /// in `exclude`, ordered by ID
    pub async fn get_quiz_candidates(
        pool: &SqlitePool,
        scope: QuizScope,
        exclude: &[i64],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let exclude: HashSet<i64> = exclude.iter().copied().collect();

        let mut conditions = Vec::new();
        let mut next_param = 1;
        if let QuizScope::Category(_) = scope {
            conditions.push(format!("category = ${}", next_param));
            next_param += 1;
        }

        let bind_excludes = !exclude.is_empty() && exclude.len() <= MAX_EXCLUDE_BINDS;
        let exclude_ids: Vec<i64> = if bind_excludes {
            exclude.iter().copied().collect()
        } else {
            Vec::new()
        };
        if bind_excludes {
            let placeholders = (next_param..next_param + exclude_ids.len())
                .map(|i| format!("${}", i))
                .collect::<Vec<_>>()
                .join(", ");
            conditions.push(format!("id NOT IN ({})", placeholders));
        }

        let query = if conditions.is_empty() {
            format!("{} ORDER BY id ASC", SELECT_QUESTION)
        } else {
            format!(
                "{} WHERE {} ORDER BY id ASC",
                SELECT_QUESTION,
                conditions.join(" AND ")
            )
        };

        let mut q = sqlx::query_as::<_, QuestionRow>(&query);
        if let QuizScope::Category(category) = scope {
            q = q.bind(category);
        }
        for id in &exclude_ids {
            q = q.bind(id);
        }

        let rows = q.fetch_all(pool).await?;

        Ok(rows
            .into_iter()
            .filter(|row| bind_excludes || !exclude.contains(&row.id))
            .map(Into::into)
            .collect())
    }

    /// Delete a question by ID, returning whether a row was removed
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }
}

/// Escape `\`, `%` and `_` for a LIKE pattern using `\` as the escape char
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}
