//! # Note service
//!
//! Thin layer over a [`NoteStore`]. The store never checks who is asking;
//! [`NoteService::owned`] is where ownership is enforced, and the web layer
//! calls it before every read or write of a single note.

use std::sync::Arc;

use store::{NewNote, Note, NoteId, NoteStore, StoreError};
use thiserror::Error;
use tracing::debug;

use crate::forms::NoteDraft;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{username} does not own note {note_id}")]
    Unauthorized { username: String, note_id: NoteId },
}

impl NoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, NoteError::Store(e) if e.is_not_found())
    }
}

#[derive(Clone)]
pub struct NoteService {
    notes: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteStore>) -> Self {
        Self { notes }
    }

    pub async fn create(&self, owner_username: &str, draft: NoteDraft) -> Result<Note, NoteError> {
        let note = self
            .notes
            .insert_note(NewNote {
                title: draft.title,
                content: draft.content,
                owner_username: owner_username.to_string(),
            })
            .await?;
        debug!(note_id = note.id, owner = %note.owner_username, "created note");
        Ok(note)
    }

    pub async fn get(&self, note_id: NoteId) -> Result<Note, NoteError> {
        self.notes
            .find_note(note_id)
            .await?
            .ok_or(NoteError::Store(StoreError::NotFound))
    }

    /// The note, provided `username` owns it.
    pub async fn owned(&self, note_id: NoteId, username: &str) -> Result<Note, NoteError> {
        let note = self.get(note_id).await?;
        if note.owner_username != username {
            return Err(NoteError::Unauthorized {
                username: username.to_string(),
                note_id,
            });
        }
        Ok(note)
    }

    /// Overwrite title and content. Ownership must already be settled.
    pub async fn update(&self, note_id: NoteId, draft: &NoteDraft) -> Result<Note, NoteError> {
        let note = self
            .notes
            .update_note(note_id, &draft.title, &draft.content)
            .await?;
        debug!(note_id, "updated note");
        Ok(note)
    }

    pub async fn delete(&self, note_id: NoteId) -> Result<(), NoteError> {
        self.notes.delete_note(note_id).await?;
        debug!(note_id, "deleted note");
        Ok(())
    }

    pub async fn list_for_owner(&self, owner_username: &str) -> Result<Vec<Note>, NoteError> {
        Ok(self.notes.notes_for_owner(owner_username).await?)
    }
}
