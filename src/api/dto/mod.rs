//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the wire format existing clients read (`courseid`,
//! `coursename`, `numberOfTopics`). Request bodies are validated with
//! `validator`.
//!
//! Response DTOs also derive `Deserialize` so the browsing client can decode
//! them.

pub mod course;
pub mod feedback;
pub mod health;
pub mod resource;
