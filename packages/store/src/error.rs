//! Errors surfaced by every store backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this username already exists.
    #[error("username {0:?} is already taken")]
    DuplicateUsername(String),

    /// The referenced user or note does not exist.
    #[error("record not found")]
    NotFound,

    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
