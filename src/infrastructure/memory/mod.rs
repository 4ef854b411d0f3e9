//! In-memory catalog store.
//!
//! Used by the `memory` store backend for local development and by the
//! handler and client tests. Data lives for the lifetime of the process.

mod memory_store;

pub use memory_store::MemoryStore;
