//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Course;
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct CourseRow {
    course_id: String,
    course_name: String,
    number_of_topics: i32,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course::new(row.course_id, row.course_name, row.number_of_topics)
    }
}

/// PostgreSQL repository for course records.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT course_id, course_name, number_of_topics
            FROM courses
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_by_id(&self, course_id: &str) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT course_id, course_name, number_of_topics
            FROM courses
            WHERE course_id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn upsert(&self, course: Course) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO courses (course_id, course_name, number_of_topics)
            VALUES ($1, $2, $3)
            ON CONFLICT (course_id) DO UPDATE
            SET course_name = EXCLUDED.course_name,
                number_of_topics = EXCLUDED.number_of_topics
            "#,
        )
        .bind(&course.id)
        .bind(&course.name)
        .bind(course.topic_count)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
