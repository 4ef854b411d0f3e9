//! Browsing client for the catalog API.
//!
//! - [`api_client`] - `reqwest` client implementing [`CatalogApi`]
//! - [`browser`] - Drill-down view state over any [`CatalogApi`]
//! - [`search`] - Case-insensitive substring search over prefetched data

pub mod api_client;
pub mod browser;
pub mod error;
pub mod search;

pub use api_client::{CatalogApi, CatalogClient, DEFAULT_TIMEOUT};
pub use browser::{Browser, BrowserError, View};
pub use error::ClientError;
pub use search::{SearchResults, search};
