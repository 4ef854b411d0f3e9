//! DTOs for resource endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{LinkWithFeedback, ResourceEntry, TopicResources};

/// Entry of `GET /api/allresources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntryDto {
    pub courseid: String,
    pub topic: String,
    pub link: String,
}

impl From<ResourceEntry> for ResourceEntryDto {
    fn from(entry: ResourceEntry) -> Self {
        Self {
            courseid: entry.course_id,
            topic: entry.topic,
            link: entry.link,
        }
    }
}

/// A link together with its feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfoDto {
    pub url: String,
    pub description: String,
    pub likes: i64,
    pub dislikes: i64,
}

impl From<LinkWithFeedback> for LinkInfoDto {
    fn from(link: LinkWithFeedback) -> Self {
        Self {
            url: link.url,
            description: link.description,
            likes: link.likes,
            dislikes: link.dislikes,
        }
    }
}

/// Response of `GET /api/resources/{courseid}/{topic}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResourcesResponse {
    pub courseid: String,
    pub topic: String,
    pub links: Vec<LinkInfoDto>,
}

impl From<TopicResources> for TopicResourcesResponse {
    fn from(resources: TopicResources) -> Self {
        Self {
            courseid: resources.course_id,
            topic: resources.topic,
            links: resources.links.into_iter().map(Into::into).collect(),
        }
    }
}
