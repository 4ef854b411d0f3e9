//! Handlers for resource listing endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resource::{ResourceEntryDto, TopicResourcesResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists one entry per link across all resource lists.
///
/// # Endpoint
///
/// `GET /api/allresources`
pub async fn list_all_resources_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceEntryDto>>, AppError> {
    let entries = state
        .catalog_service
        .list_all_resource_entries()
        .await
        .map_err(|e| e.or_internal("Failed to fetch resources"))?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Returns the links of a topic with their likes, dislikes and description.
///
/// # Endpoint
///
/// `GET /api/resources/{courseid}/{topic}`
///
/// # Response
///
/// ```json
/// {
///   "courseid": "cs101",
///   "topic": "Recursion",
///   "links": [
///     { "url": "http://a", "description": "", "likes": 3, "dislikes": 0 }
///   ]
/// }
/// ```
///
/// An unknown course or topic is not an error: the response is `200 OK`
/// with an empty `links` array.
pub async fn topic_resources_handler(
    State(state): State<AppState>,
    Path((courseid, topic)): Path<(String, String)>,
) -> Result<Json<TopicResourcesResponse>, AppError> {
    let resources = state
        .catalog_service
        .get_resources_for_topic(&courseid, &topic)
        .await
        .map_err(|e| e.or_internal("Failed to fetch resources"))?;

    Ok(Json(resources.into()))
}
