//! Catalog import document.
//!
//! Courses, topic lists and resource lists have no creation endpoints; they
//! are loaded out-of-band from a JSON document shaped like the stored
//! records:
//!
//! ```json
//! {
//!   "courses":   [{ "courseid": "cs101", "coursename": "Intro", "numberOfTopics": 1 }],
//!   "topics":    [{ "courseid": "cs101", "topics": ["Recursion"] }],
//!   "resources": [{ "courseid": "cs101", "topic": "Recursion", "links": ["http://a"] }],
//!   "feedback":  [{ "topic": "Recursion", "url": "http://a", "likes": 2 }]
//! }
//! ```
//!
//! Every section is optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Course, LinkFeedback, ResourceList, TopicList};

/// Full import document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub courses: Vec<SeedCourse>,
    #[serde(default)]
    pub topics: Vec<SeedTopicList>,
    #[serde(default)]
    pub resources: Vec<SeedResourceList>,
    #[serde(default)]
    pub feedback: Vec<SeedFeedback>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedCourse {
    #[serde(rename = "courseid")]
    pub course_id: String,
    #[serde(rename = "coursename")]
    pub course_name: String,
    #[serde(rename = "numberOfTopics", default)]
    pub number_of_topics: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedTopicList {
    #[serde(rename = "courseid")]
    pub course_id: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedResourceList {
    #[serde(rename = "courseid")]
    pub course_id: String,
    pub topic: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedFeedback {
    pub topic: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
}

impl CatalogSeed {
    /// Parses a seed document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid catalog seed document")
    }

    /// Reads and parses a seed document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&json)
    }
}

impl From<SeedCourse> for Course {
    fn from(seed: SeedCourse) -> Self {
        Course::new(seed.course_id, seed.course_name, seed.number_of_topics)
    }
}

impl From<SeedTopicList> for TopicList {
    fn from(seed: SeedTopicList) -> Self {
        TopicList::new(seed.course_id, seed.topics)
    }
}

impl From<SeedResourceList> for ResourceList {
    fn from(seed: SeedResourceList) -> Self {
        ResourceList::new(seed.course_id, seed.topic, seed.links)
    }
}

impl From<SeedFeedback> for LinkFeedback {
    fn from(seed: SeedFeedback) -> Self {
        LinkFeedback {
            topic: seed.topic,
            url: seed.url,
            description: seed.description,
            likes: seed.likes.max(0),
            dislikes: seed.dislikes.max(0),
        }
    }
}
