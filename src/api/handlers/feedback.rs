//! Handlers for liking, disliking and describing links.
//!
//! The `courseid` path segment is accepted for URL symmetry with the read
//! endpoints but does not take part in the feedback key.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::feedback::{
    DescriptionRequest, DescriptionResponse, DislikesResponse, FeedbackTargetRequest,
    LikesResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a like to a link.
///
/// # Endpoint
///
/// `POST /api/resources/{courseid}/{topic}/like`
///
/// # Request Body
///
/// ```json
/// { "url": "http://a" }
/// ```
///
/// # Response
///
/// ```json
/// { "likes": 4 }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: empty `url` or topic, or a body that is not
///   `{"url": string}` JSON
/// - **500 Internal Server Error**: `{"error": "Failed to update likes"}`
pub async fn like_handler(
    State(state): State<AppState>,
    Path((_courseid, topic)): Path<(String, String)>,
    payload: Result<Json<FeedbackTargetRequest>, JsonRejection>,
) -> Result<Json<LikesResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let likes = state
        .feedback_service
        .increment_likes(&topic, &payload.url)
        .await
        .map_err(|e| e.or_internal("Failed to update likes"))?;

    Ok(Json(LikesResponse { likes }))
}

/// Adds a dislike to a link.
///
/// # Endpoint
///
/// `POST /api/resources/{courseid}/{topic}/dislike`
pub async fn dislike_handler(
    State(state): State<AppState>,
    Path((_courseid, topic)): Path<(String, String)>,
    payload: Result<Json<FeedbackTargetRequest>, JsonRejection>,
) -> Result<Json<DislikesResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let dislikes = state
        .feedback_service
        .increment_dislikes(&topic, &payload.url)
        .await
        .map_err(|e| e.or_internal("Failed to update dislikes"))?;

    Ok(Json(DislikesResponse { dislikes }))
}

/// Replaces the description of a link. Like and dislike counts are kept.
///
/// # Endpoint
///
/// `POST /api/resources/{courseid}/{topic}/description`
///
/// # Request Body
///
/// ```json
/// { "url": "http://a", "description": "Good intro" }
/// ```
pub async fn description_handler(
    State(state): State<AppState>,
    Path((_courseid, topic)): Path<(String, String)>,
    payload: Result<Json<DescriptionRequest>, JsonRejection>,
) -> Result<Json<DescriptionResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let description = state
        .feedback_service
        .set_description(&topic, &payload.url, &payload.description)
        .await
        .map_err(|e| e.or_internal("Failed to update description"))?;

    Ok(Json(DescriptionResponse { description }))
}
