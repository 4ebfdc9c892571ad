use sqlx::SqlitePool;

use crate::models::CreateQuestion;
use crate::repositories::{CategoryRepository, QuestionRepository};

/// Categories the web client ships icons for
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category id, difficulty)
const SAMPLE_QUESTIONS: &[(&str, &str, i64, i32)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
];

/// Seed an empty database with the default categories and sample questions.
///
/// Each table is seeded only when it has no rows.
pub async fn seed_trivia(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if CategoryRepository::count(pool).await? == 0 {
        tracing::info!("Seeding database with default categories...");
        for name in DEFAULT_CATEGORIES {
            CategoryRepository::create(pool, name).await?;
        }
    }

    if QuestionRepository::count(pool).await? > 0 {
        return Ok(());
    }

    tracing::info!("Seeding database with sample questions...");

    for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
        let data = CreateQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category: *category,
            difficulty: *difficulty,
        };
        match QuestionRepository::create(pool, data).await {
            Ok(q) => tracing::debug!("Created seed question {}", q.id),
            Err(e) => tracing::warn!("Failed to create seed question '{}': {}", question, e),
        }
    }

    tracing::info!("Seed data created successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = create_memory_pool().await.unwrap();

        seed_trivia(&pool).await.unwrap();
        seed_trivia(&pool).await.unwrap();

        assert_eq!(
            CategoryRepository::count(&pool).await.unwrap(),
            DEFAULT_CATEGORIES.len() as i64
        );
        assert_eq!(
            QuestionRepository::count(&pool).await.unwrap(),
            SAMPLE_QUESTIONS.len() as i64
        );
    }

    #[tokio::test]
    async fn test_seed_keeps_existing_questions() {
        let pool = create_memory_pool().await.unwrap();
        QuestionRepository::create(
            &pool,
            CreateQuestion {
                question: "2+2?".to_string(),
                answer: "4".to_string(),
                category: 1,
                difficulty: 1,
            },
        )
        .await
        .unwrap();

        seed_trivia(&pool).await.unwrap();

        assert_eq!(QuestionRepository::count(&pool).await.unwrap(), 1);
        assert_eq!(CategoryRepository::count(&pool).await.unwrap(), 6);
    }
}
