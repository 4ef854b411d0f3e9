//! Drill-down browsing over the catalog API.
//!
//! The browser walks `CourseList → CourseDetail → TopicResources →
//! ResourceFeedback`. Each view carries the data it was entered with, so a
//! topic can never be selected without a course.
//!
//! Every fetch completes before the view changes. Dropping an in-flight call
//! (on timeout or Ctrl+C) therefore leaves the browser where it was.

use thiserror::Error;

use crate::api::dto::course::{CourseDetailResponse, CourseSummaryDto};
use crate::api::dto::resource::{LinkInfoDto, ResourceEntryDto, TopicResourcesResponse};
use crate::client::api_client::CatalogApi;
use crate::client::error::ClientError;
use crate::client::search::{SearchResults, search};

/// Current browser screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    CourseList,
    CourseDetail {
        course: CourseDetailResponse,
    },
    /// `resources.links` may be empty: a topic without resources.
    TopicResources {
        course: CourseDetailResponse,
        resources: TopicResourcesResponse,
    },
    /// `selected` indexes `resources.links`.
    ResourceFeedback {
        course: CourseDetailResponse,
        resources: TopicResourcesResponse,
        selected: usize,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::CourseList => "course list",
            View::CourseDetail { .. } => "course detail",
            View::TopicResources { .. } => "topic resources",
            View::ResourceFeedback { .. } => "resource feedback",
        }
    }
}

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Cannot {action} from the {view} view")]
    InvalidTransition {
        action: &'static str,
        view: &'static str,
    },

    #[error("No link at position {0}")]
    NoSuchLink(usize),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Browsing session state over a [`CatalogApi`].
pub struct Browser<A> {
    api: A,
    view: View,
    courses: Vec<CourseSummaryDto>,
    all_topics: Vec<String>,
    all_resources: Vec<ResourceEntryDto>,
    error: Option<String>,
}

impl<A: CatalogApi> Browser<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: View::CourseList,
            courses: Vec::new(),
            all_topics: Vec::new(),
            all_resources: Vec::new(),
            error: None,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn courses(&self) -> &[CourseSummaryDto] {
        &self.courses
    }

    /// Message of the last failed call, cleared by the next successful one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The link selected in the resource feedback view.
    pub fn selected_link(&self) -> Option<&LinkInfoDto> {
        match &self.view {
            View::ResourceFeedback {
                resources,
                selected,
                ..
            } => resources.links.get(*selected),
            _ => None,
        }
    }

    /// Loads the course list and prefetches topic names and resource entries
    /// for search.
    ///
    /// A failed prefetch only narrows search. A failed course list leaves
    /// the list empty with the error recorded.
    pub async fn load(&mut self) -> Result<(), BrowserError> {
        let (courses, topics, resources) = tokio::join!(
            self.api.list_courses(),
            self.api.list_all_topics(),
            self.api.list_all_resources(),
        );

        self.all_topics = topics.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to prefetch topics for search");
            Vec::new()
        });
        self.all_resources = resources.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to prefetch resources for search");
            Vec::new()
        });

        self.view = View::CourseList;
        match self.record(courses) {
            Ok(list) => {
                self.courses = list;
                Ok(())
            }
            Err(e) => {
                self.courses.clear();
                Err(e)
            }
        }
    }

    /// Opens a course from the course list.
    ///
    /// On failure the browser stays on the course list with the error
    /// recorded.
    pub async fn select_course(&mut self, course_id: &str) -> Result<(), BrowserError> {
        if !matches!(self.view, View::CourseList) {
            return Err(self.invalid("select a course"));
        }

        let result = self.api.course_detail(course_id).await;
        let course = self.record(result)?;
        self.view = View::CourseDetail { course };
        Ok(())
    }

    /// Opens a topic of the current course.
    ///
    /// A topic without resources opens with an empty link list.
    pub async fn select_topic(&mut self, topic: &str) -> Result<(), BrowserError> {
        let View::CourseDetail { course } = &self.view else {
            return Err(self.invalid("select a topic"));
        };
        let course = course.clone();

        let result = self.api.topic_resources(&course.courseid, topic).await;
        let resources = self.record(result)?;
        self.view = View::TopicResources { course, resources };
        Ok(())
    }

    /// Selects a link of the current topic by position.
    pub fn select_link(&mut self, index: usize) -> Result<(), BrowserError> {
        let (course, resources) = match &self.view {
            View::TopicResources { course, resources }
            | View::ResourceFeedback {
                course, resources, ..
            } => (course.clone(), resources.clone()),
            _ => return Err(self.invalid("select a link")),
        };

        if index >= resources.links.len() {
            return Err(BrowserError::NoSuchLink(index));
        }

        self.view = View::ResourceFeedback {
            course,
            resources,
            selected: index,
        };
        Ok(())
    }

    /// Likes the selected link and returns the new like count.
    pub async fn like(&mut self) -> Result<i64, BrowserError> {
        let (course_id, topic, url) = self.selected_target("like")?;

        let result = self.api.like(&course_id, &topic, &url).await;
        let likes = self.record(result)?;
        self.update_links(&url, |link| link.likes = likes);
        Ok(likes)
    }

    /// Dislikes the selected link and returns the new dislike count.
    pub async fn dislike(&mut self) -> Result<i64, BrowserError> {
        let (course_id, topic, url) = self.selected_target("dislike")?;

        let result = self.api.dislike(&course_id, &topic, &url).await;
        let dislikes = self.record(result)?;
        self.update_links(&url, |link| link.dislikes = dislikes);
        Ok(dislikes)
    }

    /// Replaces the description of the selected link.
    pub async fn set_description(&mut self, description: &str) -> Result<String, BrowserError> {
        let (course_id, topic, url) = self.selected_target("edit a description")?;

        let result = self
            .api
            .set_description(&course_id, &topic, &url, description)
            .await;
        let stored = self.record(result)?;
        self.update_links(&url, |link| link.description = stored.clone());
        Ok(stored)
    }

    /// Moves one level up. The course list is its own parent.
    pub fn back(&mut self) {
        self.view = match std::mem::replace(&mut self.view, View::CourseList) {
            View::ResourceFeedback {
                course, resources, ..
            } => View::TopicResources { course, resources },
            View::TopicResources { course, .. } => View::CourseDetail { course },
            View::CourseDetail { .. } | View::CourseList => View::CourseList,
        };
        self.error = None;
    }

    /// Filters the loaded courses and the prefetched topics and resources.
    /// Does not change the view.
    pub fn search(&self, query: &str) -> SearchResults {
        search(query, &self.courses, &self.all_topics, &self.all_resources)
    }

    fn record<T>(&mut self, result: Result<T, ClientError>) -> Result<T, BrowserError> {
        match result {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    fn invalid(&self, action: &'static str) -> BrowserError {
        BrowserError::InvalidTransition {
            action,
            view: self.view.name(),
        }
    }

    /// Course id, topic and URL of the selected link.
    fn selected_target(
        &self,
        action: &'static str,
    ) -> Result<(String, String, String), BrowserError> {
        let View::ResourceFeedback {
            resources,
            selected,
            ..
        } = &self.view
        else {
            return Err(self.invalid(action));
        };

        let link = resources
            .links
            .get(*selected)
            .ok_or(BrowserError::NoSuchLink(*selected))?;

        Ok((
            resources.courseid.clone(),
            resources.topic.clone(),
            link.url.clone(),
        ))
    }

    /// Applies `update` to every link with `url` in the current topic.
    ///
    /// Feedback is shared per (topic, url), so duplicate links in one topic
    /// change together.
    fn update_links(&mut self, url: &str, mut update: impl FnMut(&mut LinkInfoDto)) {
        if let View::ResourceFeedback { resources, .. } = &mut self.view {
            resources
                .links
                .iter_mut()
                .filter(|link| link.url == url)
                .for_each(&mut update);
        }
    }
}
