//! Storage abstraction for project records.
//!
//! Defines the repository trait implemented by the concrete backends in the
//! `projectboard` crate, along with the shared error and page types.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{RepositoryError, Result};
pub use traits::ProjectRepository;
pub use types::ProjectPage;
