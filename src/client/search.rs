//! Client-side substring search over prefetched catalog data.
//!
//! Matching is case-insensitive and never re-queries the server. An empty
//! query matches everything.

use crate::api::dto::course::CourseSummaryDto;
use crate::api::dto::resource::ResourceEntryDto;

/// Items matching a search query, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub courses: Vec<CourseSummaryDto>,
    pub topics: Vec<String>,
    pub resources: Vec<ResourceEntryDto>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.topics.is_empty() && self.resources.is_empty()
    }
}

/// Filters courses by name or id, topics by name, and resource entries by
/// topic or link.
pub fn search(
    query: &str,
    courses: &[CourseSummaryDto],
    topics: &[String],
    resources: &[ResourceEntryDto],
) -> SearchResults {
    let needle = query.to_lowercase();
    let matches = |haystack: &str| haystack.to_lowercase().contains(&needle);

    SearchResults {
        courses: courses
            .iter()
            .filter(|c| matches(&c.coursename) || matches(&c.courseid))
            .cloned()
            .collect(),
        topics: topics.iter().filter(|t| matches(t)).cloned().collect(),
        resources: resources
            .iter()
            .filter(|r| matches(&r.topic) || matches(&r.link))
            .cloned()
            .collect(),
    }
}
