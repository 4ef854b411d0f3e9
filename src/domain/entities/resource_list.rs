//! Resource list entity.

/// Ordered resource URLs for one (course, topic) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceList {
    pub course_id: String,
    pub topic: String,
    pub links: Vec<String>,
}

impl ResourceList {
    pub fn new(course_id: impl Into<String>, topic: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            course_id: course_id.into(),
            topic: topic.into(),
            links,
        }
    }

    /// Returns true if this list belongs to the given (course, topic) pair.
    pub fn is_for(&self, course_id: &str, topic: &str) -> bool {
        self.course_id == course_id && self.topic == topic
    }
}
