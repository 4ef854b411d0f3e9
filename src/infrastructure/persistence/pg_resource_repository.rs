//! PostgreSQL implementation of the resource repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::ResourceList;
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ResourceListRow {
    course_id: String,
    topic: String,
    links: Vec<String>,
}

impl From<ResourceListRow> for ResourceList {
    fn from(row: ResourceListRow) -> Self {
        ResourceList::new(row.course_id, row.topic, row.links)
    }
}

/// PostgreSQL repository for resource lists.
///
/// The `(course_id, topic)` pair is unique, so a lookup never has to pick
/// between duplicate lists.
pub struct PgResourceRepository {
    pool: Arc<PgPool>,
}

impl PgResourceRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    async fn list(&self) -> Result<Vec<ResourceList>, AppError> {
        let rows = sqlx::query_as::<_, ResourceListRow>(
            "SELECT course_id, topic, links FROM resource_lists ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ResourceList::from).collect())
    }

    async fn find(&self, course_id: &str, topic: &str) -> Result<Option<ResourceList>, AppError> {
        let row = sqlx::query_as::<_, ResourceListRow>(
            r#"
            SELECT course_id, topic, links
            FROM resource_lists
            WHERE course_id = $1 AND topic = $2
            "#,
        )
        .bind(course_id)
        .bind(topic)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ResourceList::from))
    }

    async fn upsert(&self, resources: ResourceList) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO resource_lists (course_id, topic, links)
            VALUES ($1, $2, $3)
            ON CONFLICT (course_id, topic) DO UPDATE SET links = EXCLUDED.links
            "#,
        )
        .bind(&resources.course_id)
        .bind(&resources.topic)
        .bind(&resources.links)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
