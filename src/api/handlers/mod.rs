//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod courses;
pub mod feedback;
pub mod health;
pub mod resources;

pub use courses::{course_detail_handler, list_all_topics_handler, list_courses_handler};
pub use feedback::{description_handler, dislike_handler, like_handler};
pub use health::health_handler;
pub use resources::{list_all_resources_handler, topic_resources_handler};
