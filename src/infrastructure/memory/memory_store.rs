//! A single-process store implementing all four repository traits.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{
    Course, FeedbackKey, FeedbackTotals, LinkFeedback, ResourceList, TopicList,
};
use crate::domain::repositories::{
    CourseRepository, FeedbackRepository, ResourceRepository, TopicRepository,
};
use crate::error::AppError;

#[derive(Default)]
struct Catalog {
    courses: Vec<Course>,
    topic_lists: Vec<TopicList>,
    resource_lists: Vec<ResourceList>,
    feedback: HashMap<FeedbackKey, LinkFeedback>,
}

/// In-memory store behind one read-write lock.
///
/// Every write, including counter increments, happens while holding the
/// write lock, so increments are atomic with respect to each other.
/// Listings keep insertion order.
#[derive(Default)]
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory catalog store");
        Self::default()
    }

    /// Runs `apply` on the feedback row for `key`, creating the row first if
    /// it does not exist.
    async fn with_feedback<T>(
        &self,
        key: &FeedbackKey,
        apply: impl FnOnce(&mut LinkFeedback) -> T,
    ) -> T {
        let mut catalog = self.catalog.write().await;
        let row = catalog
            .feedback
            .entry(key.clone())
            .or_insert_with(|| LinkFeedback::empty(key.topic.clone(), key.url.clone()));
        apply(row)
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.catalog.read().await.courses.clone())
    }

    async fn find_by_id(&self, course_id: &str) -> Result<Option<Course>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.courses.iter().find(|c| c.id == course_id).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.catalog.read().await.courses.len() as i64)
    }

    async fn upsert(&self, course: Course) -> Result<(), AppError> {
        let mut catalog = self.catalog.write().await;
        match catalog.courses.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => *existing = course,
            None => catalog.courses.push(course),
        }
        Ok(())
    }
}

#[async_trait]
impl TopicRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<TopicList>, AppError> {
        Ok(self.catalog.read().await.topic_lists.clone())
    }

    async fn find_by_course(&self, course_id: &str) -> Result<Option<TopicList>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .topic_lists
            .iter()
            .find(|t| t.course_id == course_id)
            .cloned())
    }

    async fn upsert(&self, topics: TopicList) -> Result<(), AppError> {
        let mut catalog = self.catalog.write().await;
        match catalog
            .topic_lists
            .iter_mut()
            .find(|t| t.course_id == topics.course_id)
        {
            Some(existing) => *existing = topics,
            None => catalog.topic_lists.push(topics),
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<ResourceList>, AppError> {
        Ok(self.catalog.read().await.resource_lists.clone())
    }

    async fn find(&self, course_id: &str, topic: &str) -> Result<Option<ResourceList>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .resource_lists
            .iter()
            .find(|r| r.is_for(course_id, topic))
            .cloned())
    }

    async fn upsert(&self, resources: ResourceList) -> Result<(), AppError> {
        let mut catalog = self.catalog.write().await;
        match catalog
            .resource_lists
            .iter_mut()
            .find(|r| r.is_for(&resources.course_id, &resources.topic))
        {
            Some(existing) => *existing = resources,
            None => catalog.resource_lists.push(resources),
        }
        Ok(())
    }
}

#[async_trait]
impl FeedbackRepository for MemoryStore {
    async fn find_for_topic(
        &self,
        topic: &str,
        urls: &[String],
    ) -> Result<Vec<LinkFeedback>, AppError> {
        let catalog = self.catalog.read().await;
        Ok(urls
            .iter()
            .filter_map(|url| catalog.feedback.get(&FeedbackKey::new(topic, url.as_str())))
            .cloned()
            .collect())
    }

    async fn increment_likes(&self, key: &FeedbackKey) -> Result<i64, AppError> {
        Ok(self
            .with_feedback(key, |row| {
                row.likes += 1;
                row.likes
            })
            .await)
    }

    async fn increment_dislikes(&self, key: &FeedbackKey) -> Result<i64, AppError> {
        Ok(self
            .with_feedback(key, |row| {
                row.dislikes += 1;
                row.dislikes
            })
            .await)
    }

    async fn set_description(
        &self,
        key: &FeedbackKey,
        description: &str,
    ) -> Result<String, AppError> {
        Ok(self
            .with_feedback(key, |row| {
                row.description = description.to_string();
                row.description.clone()
            })
            .await)
    }

    async fn upsert(&self, feedback: LinkFeedback) -> Result<(), AppError> {
        let mut catalog = self.catalog.write().await;
        catalog.feedback.insert(feedback.key(), feedback);
        Ok(())
    }

    async fn totals(&self) -> Result<FeedbackTotals, AppError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .feedback
            .values()
            .fold(FeedbackTotals::default(), |mut totals, row| {
                totals.rows += 1;
                totals.likes += row.likes;
                totals.dislikes += row.dislikes;
                totals
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_upsert_course_replaces_in_place() {
        let store = MemoryStore::new();
        CourseRepository::upsert(&store, Course::new("a", "First", 1)).await.unwrap();
        CourseRepository::upsert(&store, Course::new("b", "Second", 1)).await.unwrap();
        CourseRepository::upsert(&store, Course::new("a", "Renamed", 2)).await.unwrap();

        let courses = CourseRepository::list(&store).await.unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].name, "Renamed");
        assert_eq!(courses[1].id, "b");
    }

    #[tokio::test]
    async fn test_find_resource_list_by_pair() {
        let store = MemoryStore::new();
        ResourceRepository::upsert(
            &store,
            ResourceList::new("cs101", "Recursion", vec!["http://a".into()]),
        )
        .await
        .unwrap();

        assert!(store.find("cs101", "Recursion").await.unwrap().is_some());
        assert!(store.find("cs101", "Graphs").await.unwrap().is_none());
        assert!(store.find("cs102", "Recursion").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_creates_row() {
        let store = MemoryStore::new();
        let key = FeedbackKey::new("Recursion", "http://a");

        assert_eq!(store.increment_likes(&key).await.unwrap(), 1);
        assert_eq!(store.increment_dislikes(&key).await.unwrap(), 1);
        assert_eq!(store.increment_likes(&key).await.unwrap(), 2);

        let rows = store
            .find_for_topic("Recursion", &["http://a".to_string()])
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].likes, 2);
        assert_eq!(rows[0].dislikes, 1);
        assert_eq!(rows[0].description, "");
    }

    #[tokio::test]
    async fn test_set_description_keeps_counters() {
        let store = MemoryStore::new();
        let key = FeedbackKey::new("Recursion", "http://a");

        store.increment_likes(&key).await.unwrap();
        let description = store.set_description(&key, "great intro").await.unwrap();

        assert_eq!(description, "great intro");
        let rows = store
            .find_for_topic("Recursion", &["http://a".to_string()])
            .await
            .unwrap();
        assert_eq!(rows[0].likes, 1);
        assert_eq!(rows[0].description, "great intro");
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(MemoryStore::new());
        let key = FeedbackKey::new("Recursion", "http://a");

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                let key = key.clone();
                tokio::spawn(async move { store.increment_likes(&key).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let totals = store.totals().await.unwrap();
        assert_eq!(totals.rows, 1);
        assert_eq!(totals.likes, 50);
    }

    #[tokio::test]
    async fn test_find_for_topic_skips_unknown_urls() {
        let store = MemoryStore::new();
        store
            .increment_likes(&FeedbackKey::new("Graphs", "http://x"))
            .await
            .unwrap();

        let rows = store
            .find_for_topic("Graphs", &["http://x".to_string(), "http://y".to_string()])
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].url, "http://x");
    }
}
