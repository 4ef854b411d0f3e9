//! PostgreSQL implementation of the topic repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::TopicList;
use crate::domain::repositories::TopicRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct TopicListRow {
    course_id: String,
    topics: Vec<String>,
}

impl From<TopicListRow> for TopicList {
    fn from(row: TopicListRow) -> Self {
        TopicList::new(row.course_id, row.topics)
    }
}

/// PostgreSQL repository for per-course topic lists.
pub struct PgTopicRepository {
    pool: Arc<PgPool>,
}

impl PgTopicRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    async fn list(&self) -> Result<Vec<TopicList>, AppError> {
        let rows = sqlx::query_as::<_, TopicListRow>(
            "SELECT course_id, topics FROM topic_lists ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TopicList::from).collect())
    }

    async fn find_by_course(&self, course_id: &str) -> Result<Option<TopicList>, AppError> {
        let row = sqlx::query_as::<_, TopicListRow>(
            "SELECT course_id, topics FROM topic_lists WHERE course_id = $1",
        )
        .bind(course_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(TopicList::from))
    }

    async fn upsert(&self, topics: TopicList) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO topic_lists (course_id, topics)
            VALUES ($1, $2)
            ON CONFLICT (course_id) DO UPDATE SET topics = EXCLUDED.topics
            "#,
        )
        .bind(&topics.course_id)
        .bind(&topics.topics)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
