//! Repository Module
//!
//! CRUD operations over the SQLite tables.

pub mod brand;
pub mod category;
pub mod product;

pub use brand::BrandRepository;
pub use category::CategoryRepository;
pub use product::ProductRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// No row matched the given id
    #[error("{0}")]
    NotFound(String),

    /// Error reported by the database (constraint violations, bad SQL,
    /// connectivity failures)
    #[error("{0}")]
    Database(String),

    /// Invariant broken inside the repository itself
    #[error("{0}")]
    Internal(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
