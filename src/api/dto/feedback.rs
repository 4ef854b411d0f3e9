//! DTOs for the feedback write endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of the like and dislike endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackTargetRequest {
    /// The rated link. A missing field is treated as empty and rejected.
    #[serde(default)]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Body of the description endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DescriptionRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    /// New description. May be empty.
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikesResponse {
    pub likes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DislikesResponse {
    pub dislikes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_fails_validation() {
        let request: FeedbackTargetRequest = serde_json::from_str("{}").unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_description_is_valid() {
        let request: DescriptionRequest =
            serde_json::from_str(r#"{"url": "http://a", "description": ""}"#).unwrap();

        assert!(request.validate().is_ok());
    }
}
