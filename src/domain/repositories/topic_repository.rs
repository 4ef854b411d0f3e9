//! Repository trait for the topic store.

use crate::domain::entities::TopicList;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for per-course topic lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Lists every topic list in insertion order.
    async fn list(&self) -> Result<Vec<TopicList>, AppError>;

    /// Finds the topic list of a course.
    async fn find_by_course(&self, course_id: &str) -> Result<Option<TopicList>, AppError>;

    /// Inserts or replaces the topic list of a course.
    async fn upsert(&self, topics: TopicList) -> Result<(), AppError>;
}
