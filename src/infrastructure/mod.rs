//! Infrastructure layer for store integrations.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-memory store for development and tests

pub mod memory;
pub mod persistence;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::Repositories;
use memory::MemoryStore;
use persistence::{
    PgCourseRepository, PgFeedbackRepository, PgResourceRepository, PgTopicRepository,
};

/// Builds PostgreSQL-backed repositories sharing one connection pool.
pub fn postgres_repositories(pool: Arc<PgPool>) -> Repositories {
    Repositories {
        courses: Arc::new(PgCourseRepository::new(pool.clone())),
        topics: Arc::new(PgTopicRepository::new(pool.clone())),
        resources: Arc::new(PgResourceRepository::new(pool.clone())),
        feedback: Arc::new(PgFeedbackRepository::new(pool)),
    }
}

/// Builds repositories that all read and write one in-memory store.
pub fn memory_repositories(store: Arc<MemoryStore>) -> Repositories {
    Repositories {
        courses: store.clone(),
        topics: store.clone(),
        resources: store.clone(),
        feedback: store,
    }
}
