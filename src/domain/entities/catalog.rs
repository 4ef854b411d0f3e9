//! Read models produced by joining the catalog stores.

/// Course id and name, as listed on the course index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
}

/// A course with its topics. `topic_count` always equals `topics.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub id: String,
    pub name: String,
    pub topic_count: usize,
    pub topics: Vec<String>,
}

/// One link of one topic of one course, flattened out of a resource list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub course_id: String,
    pub topic: String,
    pub link: String,
}

/// A resource URL merged with its feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWithFeedback {
    pub url: String,
    pub description: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// Resources of one topic. `links` is empty when no resource list exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicResources {
    pub course_id: String,
    pub topic: String,
    pub links: Vec<LinkWithFeedback>,
}

/// A course whose stored topic count disagrees with its topic list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleTopicCount {
    pub course_id: String,
    pub stored: i32,
    pub actual: usize,
}

/// Catalog-wide counters reported by the admin tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub courses: usize,
    pub topic_names: usize,
    pub resource_entries: usize,
    pub stale_topic_counts: Vec<StaleTopicCount>,
}
