//! Repository trait for the resource store.

use crate::domain::entities::ResourceList;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for per-(course, topic) resource lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Lists every resource list in insertion order.
    async fn list(&self) -> Result<Vec<ResourceList>, AppError>;

    /// Finds the resource list of a (course, topic) pair.
    ///
    /// A missing list is `Ok(None)`; callers treat it as an empty result.
    async fn find(&self, course_id: &str, topic: &str) -> Result<Option<ResourceList>, AppError>;

    /// Inserts or replaces the resource list of a (course, topic) pair.
    async fn upsert(&self, resources: ResourceList) -> Result<(), AppError>;
}
