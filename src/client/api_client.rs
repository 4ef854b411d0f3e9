//! HTTP client for the catalog REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::dto::course::{CourseDetailResponse, CourseSummaryDto};
use crate::api::dto::feedback::{
    DescriptionRequest, DescriptionResponse, DislikesResponse, FeedbackTargetRequest,
    LikesResponse,
};
use crate::api::dto::resource::{ResourceEntryDto, TopicResourcesResponse};
use crate::client::error::ClientError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations the browser needs from the catalog API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<CourseSummaryDto>, ClientError>;

    async fn list_all_topics(&self) -> Result<Vec<String>, ClientError>;

    async fn list_all_resources(&self) -> Result<Vec<ResourceEntryDto>, ClientError>;

    /// Fails with [`ClientError::NotFound`] for an unknown course.
    async fn course_detail(&self, course_id: &str) -> Result<CourseDetailResponse, ClientError>;

    /// Never fails with `NotFound`; an unknown topic has no links.
    async fn topic_resources(
        &self,
        course_id: &str,
        topic: &str,
    ) -> Result<TopicResourcesResponse, ClientError>;

    /// Returns the new like count.
    async fn like(&self, course_id: &str, topic: &str, url: &str) -> Result<i64, ClientError>;

    /// Returns the new dislike count.
    async fn dislike(&self, course_id: &str, topic: &str, url: &str) -> Result<i64, ClientError>;

    /// Returns the stored description.
    async fn set_description(
        &self,
        course_id: &str,
        topic: &str,
        url: &str,
        description: &str,
    ) -> Result<String, ClientError>;
}

/// [`CatalogApi`] over HTTP using `reqwest`.
///
/// Path segments are percent-encoded, so topic names may contain spaces or
/// slashes.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:5000`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or cannot carry a path.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/api/{segments...}`.
    ///
    /// URL parsing drops `.` and `..` segments and their `%2E` spellings, and
    /// an empty segment collapses onto a different route, so those are
    /// rejected before any request is sent.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ClientError::UnaddressableSegment(segment.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "POST");

        let response = self.http.post(url).json(body).send().await?;
        decode(response).await
    }
}

/// Decodes a success body, or maps an error body to [`ClientError`].
///
/// The server reports 404s under `message` and other errors under `error`;
/// both are read.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body: Value = response.json().await.unwrap_or(Value::Null);
    let message = body
        .get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(message))
    } else {
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_courses(&self) -> Result<Vec<CourseSummaryDto>, ClientError> {
        self.get_json(&["topics"]).await
    }

    async fn list_all_topics(&self) -> Result<Vec<String>, ClientError> {
        self.get_json(&["alltopics"]).await
    }

    async fn list_all_resources(&self) -> Result<Vec<ResourceEntryDto>, ClientError> {
        self.get_json(&["allresources"]).await
    }

    async fn course_detail(&self, course_id: &str) -> Result<CourseDetailResponse, ClientError> {
        self.get_json(&["topics", course_id]).await
    }

    async fn topic_resources(
        &self,
        course_id: &str,
        topic: &str,
    ) -> Result<TopicResourcesResponse, ClientError> {
        self.get_json(&["resources", course_id, topic]).await
    }

    async fn like(&self, course_id: &str, topic: &str, url: &str) -> Result<i64, ClientError> {
        let body = FeedbackTargetRequest {
            url: url.to_string(),
        };
        let response: LikesResponse = self
            .post_json(&["resources", course_id, topic, "like"], &body)
            .await?;
        Ok(response.likes)
    }

    async fn dislike(&self, course_id: &str, topic: &str, url: &str) -> Result<i64, ClientError> {
        let body = FeedbackTargetRequest {
            url: url.to_string(),
        };
        let response: DislikesResponse = self
            .post_json(&["resources", course_id, topic, "dislike"], &body)
            .await?;
        Ok(response.dislikes)
    }

    async fn set_description(
        &self,
        course_id: &str,
        topic: &str,
        url: &str,
        description: &str,
    ) -> Result<String, ClientError> {
        let body = DescriptionRequest {
            url: url.to_string(),
            description: description.to_string(),
        };
        let response: DescriptionResponse = self
            .post_json(&["resources", course_id, topic, "description"], &body)
            .await?;
        Ok(response.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = CatalogClient::new("http://localhost:5000", DEFAULT_TIMEOUT).unwrap();

        let url = client
            .endpoint(&["resources", "cs101", "Graph Theory/Trees", "like"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/resources/cs101/Graph%20Theory%2FTrees/like"
        );
    }

    #[test]
    fn test_endpoint_keeps_dotted_names() {
        let client = CatalogClient::new("http://localhost:5000", DEFAULT_TIMEOUT).unwrap();

        let url = client
            .endpoint(&["resources", "cs101", "...", "like"])
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:5000/api/resources/cs101/.../like");
    }

    #[test]
    fn test_endpoint_rejects_unaddressable_segments() {
        let client = CatalogClient::new("http://localhost:5000", DEFAULT_TIMEOUT).unwrap();

        for segment in ["", ".", ".."] {
            let result = client.endpoint(&["resources", "cs101", segment]);

            assert!(
                matches!(result, Err(ClientError::UnaddressableSegment(ref s)) if s == segment),
                "segment {segment:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_empty_course_id_fails_before_request() {
        // Nothing listens here; a request would fail with a transport error.
        let client = CatalogClient::new("http://127.0.0.1:9", DEFAULT_TIMEOUT).unwrap();

        let detail = client.course_detail("").await;
        let like = client.like("cs101", "..", "http://a").await;

        assert!(matches!(detail, Err(ClientError::UnaddressableSegment(_))));
        assert!(matches!(like, Err(ClientError::UnaddressableSegment(_))));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = CatalogClient::new("http://example.com/library/", DEFAULT_TIMEOUT).unwrap();

        let url = client.endpoint(&["topics"]).unwrap();

        assert_eq!(url.as_str(), "http://example.com/library/api/topics");
    }

    #[test]
    fn test_rejects_non_base_url() {
        let result = CatalogClient::new("mailto:someone@example.com", DEFAULT_TIMEOUT);

        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_rejects_unparsable_url() {
        let result = CatalogClient::new("not a url", DEFAULT_TIMEOUT);

        assert!(matches!(result, Err(ClientError::Url(_))));
    }
}
