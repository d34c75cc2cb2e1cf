//! # Postgres-backed store
//!
//! [`PgStore`] implements both store traits over a shared [`PgPool`]. Queries
//! are checked at runtime (`query_as`), so building the crate does not need a
//! live database. The schema lives in `packages/api/migrations`.
//!
//! Constraint violations are translated into [`StoreError`] variants:
//!
//! | Violation | Mapped to |
//! |-----------|-----------|
//! | unique (`users.username`) | [`StoreError::DuplicateUsername`] |
//! | foreign key (`notes.owner_username`) | [`StoreError::NotFound`] |

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::{NewNote, NewUser, Note, NoteId, User};
use crate::repo::{NoteStore, UserStore};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as(
            "INSERT INTO users (username, password_hash, email, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING username, password_hash, email, first_name, last_name",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::DuplicateUsername(user.username.clone())
            } else {
                StoreError::Database(e)
            }
        })
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as(
            "SELECT username, password_hash, email, first_name, last_name
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        // notes go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn insert_note(&self, note: NewNote) -> Result<Note, StoreError> {
        sqlx::query_as(
            "INSERT INTO notes (title, content, owner_username)
             VALUES ($1, $2, $3)
             RETURNING id, title, content, owner_username",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.owner_username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                StoreError::NotFound
            } else {
                StoreError::Database(e)
            }
        })
    }

    async fn find_note(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as(
            "SELECT id, title, content, owner_username FROM notes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn update_note(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
    ) -> Result<Note, StoreError> {
        let note: Option<Note> = sqlx::query_as(
            "UPDATE notes SET title = $2, content = $3 WHERE id = $1
             RETURNING id, title, content, owner_username",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;
        note.ok_or(StoreError::NotFound)
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn notes_for_owner(&self, owner_username: &str) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as(
            "SELECT id, title, content, owner_username FROM notes
             WHERE owner_username = $1 ORDER BY id",
        )
        .bind(owner_username)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }
}
