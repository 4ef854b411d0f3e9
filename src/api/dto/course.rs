//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CourseDetail, CourseSummary};

/// Entry of `GET /api/topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummaryDto {
    pub courseid: String,
    pub coursename: String,
}

impl From<CourseSummary> for CourseSummaryDto {
    fn from(course: CourseSummary) -> Self {
        Self {
            courseid: course.id,
            coursename: course.name,
        }
    }
}

/// Response of `GET /api/topics/{courseid}`.
///
/// `number_of_topics` is the length of `topics`, never the stored count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetailResponse {
    pub courseid: String,
    pub coursename: String,
    #[serde(rename = "numberOfTopics")]
    pub number_of_topics: usize,
    pub topics: Vec<String>,
}

impl From<CourseDetail> for CourseDetailResponse {
    fn from(detail: CourseDetail) -> Self {
        Self {
            courseid: detail.id,
            coursename: detail.name,
            number_of_topics: detail.topic_count,
            topics: detail.topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_wire_names() {
        let response = CourseDetailResponse::from(CourseDetail {
            id: "cs101".to_string(),
            name: "Intro".to_string(),
            topic_count: 2,
            topics: vec!["Recursion".to_string(), "Graphs".to_string()],
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "courseid": "cs101",
                "coursename": "Intro",
                "numberOfTopics": 2,
                "topics": ["Recursion", "Graphs"]
            })
        );
    }
}
