//! Handlers for course listing and course detail endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::course::{CourseDetailResponse, CourseSummaryDto};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all courses.
///
/// # Endpoint
///
/// `GET /api/topics`
///
/// # Response
///
/// ```json
/// [
///   { "courseid": "cs101", "coursename": "Intro to CS" }
/// ]
/// ```
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseSummaryDto>>, AppError> {
    let courses = state
        .catalog_service
        .list_courses()
        .await
        .map_err(|e| e.or_internal("Failed to fetch courses"))?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Lists every topic name of every course, flattened in store order.
///
/// # Endpoint
///
/// `GET /api/alltopics`
pub async fn list_all_topics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let topics = state
        .catalog_service
        .list_all_topic_names()
        .await
        .map_err(|e| e.or_internal("Failed to fetch topics"))?;

    Ok(Json(topics))
}

/// Returns a course with its topics.
///
/// # Endpoint
///
/// `GET /api/topics/{courseid}`
///
/// # Response
///
/// ```json
/// {
///   "courseid": "cs101",
///   "coursename": "Intro to CS",
///   "numberOfTopics": 2,
///   "topics": ["Recursion", "Graphs"]
/// }
/// ```
///
/// # Errors
///
/// - **404 Not Found**: `{"message": "Course not found"}` or
///   `{"message": "Topics not found"}`
/// - **500 Internal Server Error**: `{"error": "Failed to fetch course details"}`
pub async fn course_detail_handler(
    State(state): State<AppState>,
    Path(courseid): Path<String>,
) -> Result<Json<CourseDetailResponse>, AppError> {
    let detail = state
        .catalog_service
        .get_course_detail(&courseid)
        .await
        .map_err(|e| e.or_internal("Failed to fetch course details"))?;

    Ok(Json(detail.into()))
}
