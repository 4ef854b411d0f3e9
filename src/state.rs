//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CatalogService, FeedbackService};
use crate::domain::repositories::Repositories;

/// Application state cloned into each request.
///
/// Holds the services built over one set of store handles. The store itself
/// is created at startup by [`crate::server::run`] and released there on
/// shutdown.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    /// Builds the services over the given store handles.
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(repositories)),
            feedback_service: Arc::new(FeedbackService::new(repositories.feedback.clone())),
        }
    }
}
