//! Repository trait for the course store.

use crate::domain::entities::Course;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for course records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-memory implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Lists all courses in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<Course>, AppError>;

    /// Finds a course by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Course))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, course_id: &str) -> Result<Option<Course>, AppError>;

    /// Counts stored courses. Also serves as the store health probe.
    async fn count(&self) -> Result<i64, AppError>;

    /// Inserts a course or replaces the name and stored topic count of an
    /// existing one.
    async fn upsert(&self, course: Course) -> Result<(), AppError>;
}
