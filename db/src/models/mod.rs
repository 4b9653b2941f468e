pub mod project;
pub mod timestamp;
