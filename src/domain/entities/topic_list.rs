//! Topic list entity.

/// Ordered topic names belonging to one course. One record per course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicList {
    pub course_id: String,
    pub topics: Vec<String>,
}

impl TopicList {
    pub fn new(course_id: impl Into<String>, topics: Vec<String>) -> Self {
        Self {
            course_id: course_id.into(),
            topics,
        }
    }
}
