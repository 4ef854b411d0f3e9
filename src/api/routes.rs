//! API route configuration.
//!
//! Routes are mounted under `/api` by [`crate::routes::app_router`]. No
//! endpoint requires authentication.

use crate::api::handlers::{
    course_detail_handler, description_handler, dislike_handler, like_handler,
    list_all_resources_handler, list_all_topics_handler, list_courses_handler,
    topic_resources_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only catalog routes.
///
/// # Endpoints
///
/// - `GET /topics`                       - Course ids and names
/// - `GET /alltopics`                    - Every topic name of every course
/// - `GET /allresources`                 - One entry per (course, topic, link)
/// - `GET /topics/{courseid}`            - Course detail with its topics
/// - `GET /resources/{courseid}/{topic}` - Links of a topic with feedback
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/topics", get(list_courses_handler))
        .route("/alltopics", get(list_all_topics_handler))
        .route("/allresources", get(list_all_resources_handler))
        .route("/topics/{courseid}", get(course_detail_handler))
        .route("/resources/{courseid}/{topic}", get(topic_resources_handler))
}

/// Feedback write routes.
///
/// # Endpoints
///
/// - `POST /resources/{courseid}/{topic}/like`        - Increment likes
/// - `POST /resources/{courseid}/{topic}/dislike`     - Increment dislikes
/// - `POST /resources/{courseid}/{topic}/description` - Replace description
pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/resources/{courseid}/{topic}/like", post(like_handler))
        .route("/resources/{courseid}/{topic}/dislike", post(dislike_handler))
        .route(
            "/resources/{courseid}/{topic}/description",
            post(description_handler),
        )
}

/// All API routes without rate limiting.
pub fn routes() -> Router<AppState> {
    read_routes().merge(feedback_routes())
}
