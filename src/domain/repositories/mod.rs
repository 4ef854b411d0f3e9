//! Repository trait definitions for the domain layer.
//!
//! Each of the four catalog stores is abstracted behind a trait so the
//! services can run against PostgreSQL or the in-memory store.
//!
//! # Available Repositories
//!
//! - [`CourseRepository`] - Course records
//! - [`TopicRepository`] - Per-course topic lists
//! - [`ResourceRepository`] - Per-(course, topic) resource lists
//! - [`FeedbackRepository`] - Per-(topic, url) feedback with atomic counters
//!
//! Implementations live in `crate::infrastructure`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod course_repository;
pub mod feedback_repository;
pub mod resource_repository;
pub mod topic_repository;

use std::sync::Arc;

pub use course_repository::CourseRepository;
pub use feedback_repository::FeedbackRepository;
pub use resource_repository::ResourceRepository;
pub use topic_repository::TopicRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
#[cfg(test)]
pub use resource_repository::MockResourceRepository;
#[cfg(test)]
pub use topic_repository::MockTopicRepository;

/// Handles to all four stores, shared by the application services.
///
/// Built once at startup by the infrastructure layer and cloned cheaply.
#[derive(Clone)]
pub struct Repositories {
    pub courses: Arc<dyn CourseRepository>,
    pub topics: Arc<dyn TopicRepository>,
    pub resources: Arc<dyn ResourceRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}
