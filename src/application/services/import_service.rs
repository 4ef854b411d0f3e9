//! Catalog import service.

use crate::domain::entities::{Course, LinkFeedback, ResourceList, TopicList};
use crate::domain::repositories::Repositories;
use crate::domain::seed::CatalogSeed;
use crate::error::AppError;

/// Number of records written by one import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub courses: usize,
    pub topic_lists: usize,
    pub resource_lists: usize,
    pub feedback: usize,
}

/// Loads a [`CatalogSeed`] into the stores.
///
/// Every record is upserted, so importing the same document twice leaves
/// the stores unchanged. Records are written one by one without a
/// transaction; a failure stops the import and leaves earlier records in
/// place.
pub struct ImportService {
    repositories: Repositories,
}

impl ImportService {
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    pub async fn import(&self, seed: CatalogSeed) -> Result<ImportReport, AppError> {
        let mut report = ImportReport::default();

        for course in seed.courses {
            self.repositories.courses.upsert(Course::from(course)).await?;
            report.courses += 1;
        }

        for topics in seed.topics {
            self.repositories.topics.upsert(TopicList::from(topics)).await?;
            report.topic_lists += 1;
        }

        for resources in seed.resources {
            self.repositories
                .resources
                .upsert(ResourceList::from(resources))
                .await?;
            report.resource_lists += 1;
        }

        for feedback in seed.feedback {
            self.repositories
                .feedback
                .upsert(LinkFeedback::from(feedback))
                .await?;
            report.feedback += 1;
        }

        tracing::info!(
            courses = report.courses,
            topic_lists = report.topic_lists,
            resource_lists = report.resource_lists,
            feedback = report.feedback,
            "Catalog import finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryStore;
    use crate::infrastructure::memory_repositories;
    use std::sync::Arc;

    const SEED: &str = r#"{
        "courses": [
            { "courseid": "cs101", "coursename": "Intro", "numberOfTopics": 1 },
            { "courseid": "cs102", "coursename": "Data Structures" }
        ],
        "topics": [{ "courseid": "cs101", "topics": ["Recursion"] }],
        "resources": [{ "courseid": "cs101", "topic": "Recursion", "links": ["http://a"] }],
        "feedback": [{ "topic": "Recursion", "url": "http://a", "likes": 2 }]
    }"#;

    #[tokio::test]
    async fn test_import_writes_every_section() {
        let repositories = memory_repositories(Arc::new(MemoryStore::new()));
        let service = ImportService::new(repositories.clone());

        let report = service
            .import(CatalogSeed::from_json(SEED).unwrap())
            .await
            .unwrap();

        assert_eq!(
            report,
            ImportReport {
                courses: 2,
                topic_lists: 1,
                resource_lists: 1,
                feedback: 1,
            }
        );
        assert_eq!(repositories.courses.count().await.unwrap(), 2);
        assert_eq!(repositories.feedback.totals().await.unwrap().likes, 2);
    }

    #[tokio::test]
    async fn test_import_is_idempotent() {
        let repositories = memory_repositories(Arc::new(MemoryStore::new()));
        let service = ImportService::new(repositories.clone());

        service.import(CatalogSeed::from_json(SEED).unwrap()).await.unwrap();
        service.import(CatalogSeed::from_json(SEED).unwrap()).await.unwrap();

        assert_eq!(repositories.courses.count().await.unwrap(), 2);
        assert_eq!(repositories.topics.list().await.unwrap().len(), 1);
        assert_eq!(repositories.resources.list().await.unwrap().len(), 1);
        assert_eq!(repositories.feedback.totals().await.unwrap().rows, 1);
    }
}
