//! Course entity.

/// A course in the catalog.
///
/// `topic_count` is a denormalized value written at import time. It is not
/// kept in sync with the course's [`super::TopicList`] and the API never
/// reads it; course detail recomputes the count from the topic list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub topic_count: i32,
}

impl Course {
    /// Creates a new Course instance.
    pub fn new(id: impl Into<String>, name: impl Into<String>, topic_count: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            topic_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("cs101", "Intro", 3);

        assert_eq!(course.id, "cs101");
        assert_eq!(course.name, "Intro");
        assert_eq!(course.topic_count, 3);
    }
}
