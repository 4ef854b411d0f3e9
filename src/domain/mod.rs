//! Domain layer containing catalog entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Stored entities and joined read models
//! - [`repositories`] - Store trait definitions, one per store
//! - [`seed`] - Out-of-band catalog import document
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Joins across stores live in [`crate::application::services`]

pub mod entities;
pub mod repositories;
pub mod seed;
