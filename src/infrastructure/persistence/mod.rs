//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Ordered lists are stored as `TEXT[]` columns.
//!
//! # Repositories
//!
//! - [`PgCourseRepository`] - `courses` table
//! - [`PgTopicRepository`] - `topic_lists` table
//! - [`PgResourceRepository`] - `resource_lists` table
//! - [`PgFeedbackRepository`] - `link_feedback` table with atomic counters

pub mod pg_course_repository;
pub mod pg_feedback_repository;
pub mod pg_resource_repository;
pub mod pg_topic_repository;

pub use pg_course_repository::PgCourseRepository;
pub use pg_feedback_repository::PgFeedbackRepository;
pub use pg_resource_repository::PgResourceRepository;
pub use pg_topic_repository::PgTopicRepository;
