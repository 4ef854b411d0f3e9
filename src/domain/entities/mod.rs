//! Core domain entities representing the catalog data model.
//!
//! Each entity is owned by exactly one store. There is no foreign-key
//! enforcement between stores; joins happen at read time in
//! [`crate::application::services::CatalogService`].
//!
//! # Stored Entities
//!
//! - [`Course`] - One record per course
//! - [`TopicList`] - Ordered topic names of one course
//! - [`ResourceList`] - Ordered resource URLs of one (course, topic) pair
//! - [`LinkFeedback`] - Likes, dislikes and description of one [`FeedbackKey`]
//!
//! # Read Models
//!
//! The [`catalog`] module holds the joined shapes returned by the
//! aggregation service.

pub mod catalog;
pub mod course;
pub mod link_feedback;
pub mod resource_list;
pub mod topic_list;

pub use catalog::{
    CatalogStats, CourseDetail, CourseSummary, LinkWithFeedback, ResourceEntry, StaleTopicCount,
    TopicResources,
};
pub use course::Course;
pub use link_feedback::{FeedbackKey, FeedbackTotals, LinkFeedback};
pub use resource_list::ResourceList;
pub use topic_list::TopicList;
