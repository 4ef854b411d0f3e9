//! Link feedback entity and its lookup key.

/// Lookup key of the feedback store.
///
/// Feedback is keyed by topic name and URL only. The course id is not part
/// of the key, so the same URL listed under the same topic name in two
/// different courses shares one feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackKey {
    pub topic: String,
    pub url: String,
}

impl FeedbackKey {
    pub fn new(topic: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            url: url.into(),
        }
    }
}

/// Community feedback attached to a link.
///
/// Rows are created lazily by the first like, dislike or description write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFeedback {
    pub topic: String,
    pub url: String,
    pub description: String,
    pub likes: i64,
    pub dislikes: i64,
}

impl LinkFeedback {
    /// Feedback for a link nobody has rated or described yet.
    pub fn empty(topic: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            url: url.into(),
            description: String::new(),
            likes: 0,
            dislikes: 0,
        }
    }

    pub fn key(&self) -> FeedbackKey {
        FeedbackKey::new(self.topic.clone(), self.url.clone())
    }
}

/// Aggregate counters over the whole feedback store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackTotals {
    pub rows: i64,
    pub likes: i64,
    pub dislikes: i64,
}
