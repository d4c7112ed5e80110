//! Project domain types, keys, and validation.

pub mod keys;
pub mod types;
pub mod validation;

pub use types::{CreateProject, Project};
pub use validation::{parse_repo_url, ValidationError};
