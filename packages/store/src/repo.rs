//! # Store traits
//!
//! [`UserStore`] and [`NoteStore`] are the only way the rest of the workspace
//! reaches persisted data. Both are object safe (`async_trait`) so the web
//! layer can hold them as `Arc<dyn …>` and tests can swap in
//! [`MemoryStore`](crate::MemoryStore).
//!
//! Neither trait knows about sessions or ownership: callers decide *who* may
//! touch a record before calling in.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewNote, NewUser, Note, NoteId, User};

/// Persistence for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with [`StoreError::DuplicateUsername`] and
    /// leaves the store untouched when the username is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look a user up by username.
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Delete a user together with every note they own.
    async fn delete_user(&self, username: &str) -> Result<(), StoreError>;
}

/// Persistence for note records.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a note. Fails with [`StoreError::NotFound`] if the owner does
    /// not exist.
    async fn insert_note(&self, note: NewNote) -> Result<Note, StoreError>;

    async fn find_note(&self, id: NoteId) -> Result<Option<Note>, StoreError>;

    /// Overwrite title and content. The owner is never changed.
    async fn update_note(&self, id: NoteId, title: &str, content: &str)
        -> Result<Note, StoreError>;

    async fn delete_note(&self, id: NoteId) -> Result<(), StoreError>;

    /// All notes of one owner, oldest first.
    async fn notes_for_owner(&self, owner_username: &str) -> Result<Vec<Note>, StoreError>;
}
