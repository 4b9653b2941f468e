//! Persistence layer for project submissions.
//!
//! The whole collection lives in a single JSON document; see [`store`].

pub mod models;
pub mod store;

pub use models::project::{Project, ProjectCollection};
pub use store::{JsonFileStore, ProjectStore, StoreError};
