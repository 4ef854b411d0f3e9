//! PostgreSQL implementation of the feedback repository.
//!
//! Counter updates are single `INSERT ... ON CONFLICT DO UPDATE` statements,
//! so the increment happens inside PostgreSQL and concurrent requests never
//! overwrite each other.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{FeedbackKey, FeedbackTotals, LinkFeedback};
use crate::domain::repositories::FeedbackRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct FeedbackRow {
    topic: String,
    url: String,
    description: String,
    likes: i64,
    dislikes: i64,
}

impl From<FeedbackRow> for LinkFeedback {
    fn from(row: FeedbackRow) -> Self {
        LinkFeedback {
            topic: row.topic,
            url: row.url,
            description: row.description,
            likes: row.likes,
            dislikes: row.dislikes,
        }
    }
}

#[derive(FromRow)]
struct TotalsRow {
    row_count: i64,
    likes: i64,
    dislikes: i64,
}

/// PostgreSQL repository for link feedback.
pub struct PgFeedbackRepository {
    pool: Arc<PgPool>,
}

impl PgFeedbackRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn find_for_topic(
        &self,
        topic: &str,
        urls: &[String],
    ) -> Result<Vec<LinkFeedback>, AppError> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, FeedbackRow>(
            r#"
            SELECT topic, url, description, likes, dislikes
            FROM link_feedback
            WHERE topic = $1 AND url = ANY($2)
            "#,
        )
        .bind(topic)
        .bind(urls)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(LinkFeedback::from).collect())
    }

    async fn increment_likes(&self, key: &FeedbackKey) -> Result<i64, AppError> {
        let likes = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO link_feedback (topic, url, likes)
            VALUES ($1, $2, 1)
            ON CONFLICT (topic, url) DO UPDATE SET likes = link_feedback.likes + 1
            RETURNING likes
            "#,
        )
        .bind(&key.topic)
        .bind(&key.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(likes)
    }

    async fn increment_dislikes(&self, key: &FeedbackKey) -> Result<i64, AppError> {
        let dislikes = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO link_feedback (topic, url, dislikes)
            VALUES ($1, $2, 1)
            ON CONFLICT (topic, url) DO UPDATE SET dislikes = link_feedback.dislikes + 1
            RETURNING dislikes
            "#,
        )
        .bind(&key.topic)
        .bind(&key.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(dislikes)
    }

    async fn set_description(
        &self,
        key: &FeedbackKey,
        description: &str,
    ) -> Result<String, AppError> {
        let description = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO link_feedback (topic, url, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (topic, url) DO UPDATE SET description = EXCLUDED.description
            RETURNING description
            "#,
        )
        .bind(&key.topic)
        .bind(&key.url)
        .bind(description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(description)
    }

    async fn upsert(&self, feedback: LinkFeedback) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO link_feedback (topic, url, description, likes, dislikes)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (topic, url) DO UPDATE
            SET description = EXCLUDED.description,
                likes = EXCLUDED.likes,
                dislikes = EXCLUDED.dislikes
            "#,
        )
        .bind(&feedback.topic)
        .bind(&feedback.url)
        .bind(&feedback.description)
        .bind(feedback.likes)
        .bind(feedback.dislikes)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn totals(&self) -> Result<FeedbackTotals, AppError> {
        let row = sqlx::query_as::<_, TotalsRow>(
            r#"
            SELECT COUNT(*) AS row_count,
                   COALESCE(SUM(likes), 0)::BIGINT AS likes,
                   COALESCE(SUM(dislikes), 0)::BIGINT AS dislikes
            FROM link_feedback
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(FeedbackTotals {
            rows: row.row_count,
            likes: row.likes,
            dislikes: row.dislikes,
        })
    }
}
