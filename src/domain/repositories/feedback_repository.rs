//! Repository trait for the feedback store.

use crate::domain::entities::{FeedbackKey, FeedbackTotals, LinkFeedback};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for link feedback, keyed by [`FeedbackKey`].
///
/// All writes are upserts: a missing row is created with an empty
/// description and zero counters before the write is applied.
///
/// # Concurrency
///
/// [`Self::increment_likes`] and [`Self::increment_dislikes`] must be atomic
/// at the store level. Concurrent increments on the same key never lose
/// updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Finds the feedback rows of `topic` for the given URLs.
    ///
    /// URLs without a row are simply absent from the result.
    async fn find_for_topic(
        &self,
        topic: &str,
        urls: &[String],
    ) -> Result<Vec<LinkFeedback>, AppError>;

    /// Atomically adds one like and returns the new like count.
    async fn increment_likes(&self, key: &FeedbackKey) -> Result<i64, AppError>;

    /// Atomically adds one dislike and returns the new dislike count.
    async fn increment_dislikes(&self, key: &FeedbackKey) -> Result<i64, AppError>;

    /// Sets the description, leaving counters untouched, and returns it.
    async fn set_description(
        &self,
        key: &FeedbackKey,
        description: &str,
    ) -> Result<String, AppError>;

    /// Inserts or fully replaces a feedback row. Used by catalog import.
    async fn upsert(&self, feedback: LinkFeedback) -> Result<(), AppError>;

    /// Row count and counter sums over the whole store.
    async fn totals(&self) -> Result<FeedbackTotals, AppError>;
}
