//! Application layer services implementing business logic.
//!
//! Services consume the repository traits and provide a clean API for HTTP
//! handlers and the admin tool.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Read-time joins over the four stores
//! - [`services::feedback_service::FeedbackService`] - Likes, dislikes and descriptions
//! - [`services::import_service::ImportService`] - Out-of-band catalog import

pub mod services;
