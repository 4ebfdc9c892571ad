use sqlx::SqlitePool;

use crate::models::Category;

pub struct CategoryRepository;

impl CategoryRepository {
    /// Create a new category
    pub async fn create(pool: &SqlitePool, kind: &str) -> Result<Category, sqlx::Error> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (type) VALUES ($1) RETURNING id, type",
        )
        .bind(kind)
        .fetch_one(pool)
        .await?;

        Ok(row.into())
    }

    /// Get all categories ordered by display name
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, type FROM categories ORDER BY type ASC, id ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
        }
    }
}
