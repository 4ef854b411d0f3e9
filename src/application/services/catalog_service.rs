//! Catalog aggregation service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    CatalogStats, CourseDetail, CourseSummary, LinkWithFeedback, ResourceEntry, StaleTopicCount,
    TopicResources,
};
use crate::domain::repositories::{
    CourseRepository, FeedbackRepository, Repositories, ResourceRepository, TopicRepository,
};
use crate::error::AppError;

/// Read-only joins over the course, topic, resource and feedback stores.
///
/// Every operation is a pure projection; nothing here writes to a store.
/// Reads across stores are not transactional.
pub struct CatalogService {
    courses: Arc<dyn CourseRepository>,
    topics: Arc<dyn TopicRepository>,
    resources: Arc<dyn ResourceRepository>,
    feedback: Arc<dyn FeedbackRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            courses: repositories.courses.clone(),
            topics: repositories.topics.clone(),
            resources: repositories.resources.clone(),
            feedback: repositories.feedback.clone(),
        }
    }

    /// Lists course ids and names. The stored topic count is omitted.
    pub async fn list_courses(&self) -> Result<Vec<CourseSummary>, AppError> {
        let courses = self.courses.list().await?;

        Ok(courses
            .into_iter()
            .map(|c| CourseSummary {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// Flattens every course's topic list into one sequence.
    ///
    /// Topics keep store order. Names shared by several courses appear once
    /// per course; no deduplication is performed.
    pub async fn list_all_topic_names(&self) -> Result<Vec<String>, AppError> {
        let lists = self.topics.list().await?;

        Ok(lists.into_iter().flat_map(|l| l.topics).collect())
    }

    /// Flattens every resource list into one entry per link.
    pub async fn list_all_resource_entries(&self) -> Result<Vec<ResourceEntry>, AppError> {
        let lists = self.resources.list().await?;

        Ok(lists
            .into_iter()
            .flat_map(|list| {
                let course_id = list.course_id;
                let topic = list.topic;
                list.links.into_iter().map(move |link| ResourceEntry {
                    course_id: course_id.clone(),
                    topic: topic.clone(),
                    link,
                })
            })
            .collect())
    }

    /// Returns a course together with its topics.
    ///
    /// `topic_count` is recomputed from the topic list; the count stored on
    /// the course record is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course or its topic list does
    /// not exist.
    pub async fn get_course_detail(&self, course_id: &str) -> Result<CourseDetail, AppError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        let topics = self
            .topics
            .find_by_course(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Topics not found"))?;

        Ok(CourseDetail {
            id: course.id,
            name: course.name,
            topic_count: topics.topics.len(),
            topics: topics.topics,
        })
    }

    /// Returns the links of a topic merged with their feedback.
    ///
    /// A missing resource list is not an error: the result simply has no
    /// links. Feedback is looked up by `(topic, url)` only, so the course id
    /// plays no part in the join. Links without feedback get an empty
    /// description and zero counters.
    pub async fn get_resources_for_topic(
        &self,
        course_id: &str,
        topic: &str,
    ) -> Result<TopicResources, AppError> {
        let Some(list) = self.resources.find(course_id, topic).await? else {
            tracing::debug!(course_id, topic, "No resource list; returning empty links");
            return Ok(TopicResources {
                course_id: course_id.to_string(),
                topic: topic.to_string(),
                links: Vec::new(),
            });
        };

        let feedback: HashMap<String, _> = self
            .feedback
            .find_for_topic(topic, &list.links)
            .await?
            .into_iter()
            .map(|row| (row.url.clone(), row))
            .collect();

        let links = list
            .links
            .into_iter()
            .map(|url| {
                let row = feedback.get(&url);
                LinkWithFeedback {
                    description: row.map(|r| r.description.clone()).unwrap_or_default(),
                    likes: row.map_or(0, |r| r.likes),
                    dislikes: row.map_or(0, |r| r.dislikes),
                    url,
                }
            })
            .collect();

        Ok(TopicResources {
            course_id: list.course_id,
            topic: list.topic,
            links,
        })
    }

    /// Probes the store. Returns the number of courses.
    pub async fn check_store(&self) -> Result<i64, AppError> {
        self.courses.count().await
    }

    /// Collects catalog-wide counters, including courses whose stored topic
    /// count no longer matches their topic list.
    pub async fn catalog_stats(&self) -> Result<CatalogStats, AppError> {
        let courses = self.courses.list().await?;
        let topic_lists = self.topics.list().await?;
        let resource_lists = self.resources.list().await?;

        let actual_counts: HashMap<&str, usize> = topic_lists
            .iter()
            .map(|l| (l.course_id.as_str(), l.topics.len()))
            .collect();

        let stale_topic_counts = courses
            .iter()
            .filter_map(|course| {
                let actual = actual_counts.get(course.id.as_str()).copied().unwrap_or(0);
                (course.topic_count as i64 != actual as i64).then(|| StaleTopicCount {
                    course_id: course.id.clone(),
                    stored: course.topic_count,
                    actual,
                })
            })
            .collect();

        Ok(CatalogStats {
            courses: courses.len(),
            topic_names: topic_lists.iter().map(|l| l.topics.len()).sum(),
            resource_entries: resource_lists.iter().map(|l| l.links.len()).sum(),
            stale_topic_counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Course, LinkFeedback, ResourceList, TopicList};
    use crate::domain::repositories::{
        MockCourseRepository, MockFeedbackRepository, MockResourceRepository, MockTopicRepository,
    };

    fn service(
        courses: MockCourseRepository,
        topics: MockTopicRepository,
        resources: MockResourceRepository,
        feedback: MockFeedbackRepository,
    ) -> CatalogService {
        CatalogService::new(&Repositories {
            courses: Arc::new(courses),
            topics: Arc::new(topics),
            resources: Arc::new(resources),
            feedback: Arc::new(feedback),
        })
    }

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_list_courses_projects_id_and_name() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![Course::new("cs101", "Intro", 7)]));

        let service = service(
            courses,
            MockTopicRepository::new(),
            MockResourceRepository::new(),
            MockFeedbackRepository::new(),
        );

        let result = service.list_courses().await.unwrap();
        assert_eq!(
            result,
            vec![CourseSummary {
                id: "cs101".to_string(),
                name: "Intro".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_all_topic_names_flattens_without_dedup() {
        let mut topic_repo = MockTopicRepository::new();
        topic_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                TopicList::new("one", topics(&["A", "B"])),
                TopicList::new("two", topics(&["B", "C"])),
            ])
        });

        let service = service(
            MockCourseRepository::new(),
            topic_repo,
            MockResourceRepository::new(),
            MockFeedbackRepository::new(),
        );

        let result = service.list_all_topic_names().await.unwrap();
        assert_eq!(result, vec!["A", "B", "B", "C"]);
    }

    #[tokio::test]
    async fn test_list_all_resource_entries_one_per_link() {
        let mut resources = MockResourceRepository::new();
        resources.expect_list().times(1).returning(|| {
            Ok(vec![
                ResourceList::new("cs101", "Recursion", topics(&["http://a", "http://b"])),
                ResourceList::new("cs102", "Graphs", topics(&["http://c"])),
            ])
        });

        let service = service(
            MockCourseRepository::new(),
            MockTopicRepository::new(),
            resources,
            MockFeedbackRepository::new(),
        );

        let result = service.list_all_resource_entries().await.unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].course_id, "cs101");
        assert_eq!(result[1].topic, "Recursion");
        assert_eq!(result[1].link, "http://b");
        assert_eq!(result[2].course_id, "cs102");
    }

    #[tokio::test]
    async fn test_course_detail_recomputes_topic_count() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .withf(|id| id == "cs101")
            .times(1)
            .returning(|_| Ok(Some(Course::new("cs101", "Intro", 42))));

        let mut topic_repo = MockTopicRepository::new();
        topic_repo
            .expect_find_by_course()
            .times(1)
            .returning(|_| Ok(Some(TopicList::new("cs101", topics(&["Recursion"])))));

        let service = service(
            courses,
            topic_repo,
            MockResourceRepository::new(),
            MockFeedbackRepository::new(),
        );

        let detail = service.get_course_detail("cs101").await.unwrap();
        assert_eq!(
            detail,
            CourseDetail {
                id: "cs101".to_string(),
                name: "Intro".to_string(),
                topic_count: 1,
                topics: topics(&["Recursion"]),
            }
        );
    }

    #[tokio::test]
    async fn test_course_detail_unknown_course_is_not_found() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let mut topic_repo = MockTopicRepository::new();
        topic_repo.expect_find_by_course().times(0);

        let service = service(
            courses,
            topic_repo,
            MockResourceRepository::new(),
            MockFeedbackRepository::new(),
        );

        let err = service.get_course_detail("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Course not found");
    }

    #[tokio::test]
    async fn test_course_detail_missing_topic_list_is_not_found() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|_| Ok(Some(Course::new("cs101", "Intro", 0))));

        let mut topic_repo = MockTopicRepository::new();
        topic_repo.expect_find_by_course().returning(|_| Ok(None));

        let service = service(
            courses,
            topic_repo,
            MockResourceRepository::new(),
            MockFeedbackRepository::new(),
        );

        let err = service.get_course_detail("cs101").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Topics not found");
    }

    #[tokio::test]
    async fn test_resources_soft_miss_returns_empty_links() {
        let mut resources = MockResourceRepository::new();
        resources.expect_find().returning(|_, _| Ok(None));

        let mut feedback = MockFeedbackRepository::new();
        feedback.expect_find_for_topic().times(0);

        let service = service(
            MockCourseRepository::new(),
            MockTopicRepository::new(),
            resources,
            feedback,
        );

        let result = service
            .get_resources_for_topic("cs101", "Unknown")
            .await
            .unwrap();
        assert_eq!(result.course_id, "cs101");
        assert_eq!(result.topic, "Unknown");
        assert!(result.links.is_empty());
    }

    #[tokio::test]
    async fn test_resources_merge_feedback_by_topic_and_url() {
        let mut resources = MockResourceRepository::new();
        resources.expect_find().returning(|_, _| {
            Ok(Some(ResourceList::new(
                "cs101",
                "Recursion",
                topics(&["http://a", "http://b"]),
            )))
        });

        let mut feedback = MockFeedbackRepository::new();
        feedback
            .expect_find_for_topic()
            .withf(|topic, urls| topic == "Recursion" && urls.len() == 2)
            .times(1)
            .returning(|_, _| {
                Ok(vec![LinkFeedback {
                    topic: "Recursion".to_string(),
                    url: "http://b".to_string(),
                    description: "visual".to_string(),
                    likes: 3,
                    dislikes: 1,
                }])
            });

        let service = service(
            MockCourseRepository::new(),
            MockTopicRepository::new(),
            resources,
            feedback,
        );

        let result = service
            .get_resources_for_topic("cs101", "Recursion")
            .await
            .unwrap();

        assert_eq!(
            result.links,
            vec![
                LinkWithFeedback {
                    url: "http://a".to_string(),
                    description: String::new(),
                    likes: 0,
                    dislikes: 0,
                },
                LinkWithFeedback {
                    url: "http://b".to_string(),
                    description: "visual".to_string(),
                    likes: 3,
                    dislikes: 1,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_store_error_propagates_as_internal() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_list()
            .returning(|| Err(AppError::internal("Database error: connection refused")));

        let service = service(
            courses,
            MockTopicRepository::new(),
            MockResourceRepository::new(),
            MockFeedbackRepository::new(),
        );

        let err = service.list_courses().await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_catalog_stats_reports_stale_topic_counts() {
        let mut courses = MockCourseRepository::new();
        courses.expect_list().returning(|| {
            Ok(vec![
                Course::new("fresh", "Fresh", 2),
                Course::new("stale", "Stale", 5),
                Course::new("bare", "Bare", 0),
            ])
        });

        let mut topic_repo = MockTopicRepository::new();
        topic_repo.expect_list().returning(|| {
            Ok(vec![
                TopicList::new("fresh", topics(&["A", "B"])),
                TopicList::new("stale", topics(&["C"])),
            ])
        });

        let mut resources = MockResourceRepository::new();
        resources.expect_list().returning(|| {
            Ok(vec![ResourceList::new("fresh", "A", topics(&["http://a"]))])
        });

        let service = service(courses, topic_repo, resources, MockFeedbackRepository::new());

        let stats = service.catalog_stats().await.unwrap();
        assert_eq!(stats.courses, 3);
        assert_eq!(stats.topic_names, 3);
        assert_eq!(stats.resource_entries, 1);
        assert_eq!(
            stats.stale_topic_counts,
            vec![StaleTopicCount {
                course_id: "stale".to_string(),
                stored: 5,
                actual: 1,
            }]
        );
    }
}
