pub mod error;
pub mod project_service;
pub mod validation;

pub use error::ServiceError;
