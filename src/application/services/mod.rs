//! Business logic services for the application layer.

pub mod catalog_service;
pub mod feedback_service;
pub mod import_service;

pub use catalog_service::CatalogService;
pub use feedback_service::FeedbackService;
pub use import_service::{ImportReport, ImportService};
