//! Link feedback service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{FeedbackKey, FeedbackTotals};
use crate::domain::repositories::FeedbackRepository;
use crate::error::AppError;

/// Service for rating and describing links.
///
/// Every write is an upsert keyed by `(topic, url)` and a single call to the
/// store: no retries and no partial-failure recovery.
pub struct FeedbackService {
    feedback: Arc<dyn FeedbackRepository>,
}

impl FeedbackService {
    /// Creates a new feedback service.
    pub fn new(feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback }
    }

    /// Adds one like and returns the new like count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `topic` or `url` is blank.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn increment_likes(&self, topic: &str, url: &str) -> Result<i64, AppError> {
        let key = feedback_key(topic, url)?;
        self.feedback.increment_likes(&key).await
    }

    /// Adds one dislike and returns the new dislike count.
    ///
    /// # Errors
    ///
    /// See [`Self::increment_likes`].
    pub async fn increment_dislikes(&self, topic: &str, url: &str) -> Result<i64, AppError> {
        let key = feedback_key(topic, url)?;
        self.feedback.increment_dislikes(&key).await
    }

    /// Replaces the description of a link. An empty description is allowed.
    ///
    /// # Errors
    ///
    /// See [`Self::increment_likes`].
    pub async fn set_description(
        &self,
        topic: &str,
        url: &str,
        description: &str,
    ) -> Result<String, AppError> {
        let key = feedback_key(topic, url)?;
        self.feedback.set_description(&key, description).await
    }

    /// Row count and counter sums over the whole feedback store.
    pub async fn totals(&self) -> Result<FeedbackTotals, AppError> {
        self.feedback.totals().await
    }
}

/// Builds the lookup key, rejecting blank topics and URLs.
fn feedback_key(topic: &str, url: &str) -> Result<FeedbackKey, AppError> {
    if topic.trim().is_empty() {
        return Err(AppError::bad_request(
            "topic must not be empty",
            json!({ "field": "topic" }),
        ));
    }
    if url.trim().is_empty() {
        return Err(AppError::bad_request(
            "url must not be empty",
            json!({ "field": "url" }),
        ));
    }

    Ok(FeedbackKey::new(topic, url))
}
