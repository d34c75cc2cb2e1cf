use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewNote, NewUser, Note, NoteId, User};
use crate::repo::{NoteStore, UserStore};

/// In-memory store for tests and local runs without Postgres.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<String, User>,
    notes: BTreeMap<NoteId, Note>,
    last_note_id: NoteId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.contains_key(&user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        let user = user.into_user();
        tables.users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.tables.lock().unwrap().users.get(username).cloned())
    }

    async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.remove(username).is_none() {
            return Err(StoreError::NotFound);
        }
        // Mirrors ON DELETE CASCADE
        tables.notes.retain(|_, note| note.owner_username != username);
        Ok(())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert_note(&self, note: NewNote) -> Result<Note, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.users.contains_key(&note.owner_username) {
            return Err(StoreError::NotFound);
        }
        tables.last_note_id += 1;
        let note = Note {
            id: tables.last_note_id,
            title: note.title,
            content: note.content,
            owner_username: note.owner_username,
        };
        tables.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn find_note(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        Ok(self.tables.lock().unwrap().notes.get(&id).cloned())
    }

    async fn update_note(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
    ) -> Result<Note, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        let note = tables.notes.get_mut(&id).ok_or(StoreError::NotFound)?;
        note.title = title.to_string();
        note.content = content.to_string();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), StoreError> {
        self.tables
            .lock()
            .unwrap()
            .notes
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn notes_for_owner(&self, owner_username: &str) -> Result<Vec<Note>, StoreError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .notes
            .values()
            .filter(|note| note.owner_username == owner_username)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            email: format!("{username}@example.com"),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
        }
    }

    fn new_note(owner: &str, title: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            content: format!("{title} body"),
            owner_username: owner.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_user() {
        let store = MemoryStore::new();

        assert!(store.find_user("alice").await.unwrap().is_none());

        let user = store.insert_user(new_user("alice")).await.unwrap();
        assert_eq!(user.username, "alice");

        let found = store.find_user("alice").await.unwrap().unwrap();
        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn test_duplicate_username_leaves_store_untouched() {
        let store = MemoryStore::new();
        store.insert_user(new_user("alice")).await.unwrap();

        let mut second = new_user("alice");
        second.email = "other@example.com".to_string();
        let err = store.insert_user(second).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(ref name) if name == "alice"));

        let found = store.find_user("alice").await.unwrap().unwrap();
        assert_eq!(found.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let store = MemoryStore::new();
        let err = store.delete_user("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_user_cascades_to_notes() {
        let store = MemoryStore::new();
        store.insert_user(new_user("alice")).await.unwrap();
        store.insert_user(new_user("bob")).await.unwrap();
        let alice_note = store.insert_note(new_note("alice", "A")).await.unwrap();
        let bob_note = store.insert_note(new_note("bob", "B")).await.unwrap();

        store.delete_user("alice").await.unwrap();

        assert!(store.find_note(alice_note.id).await.unwrap().is_none());
        assert_eq!(store.find_note(bob_note.id).await.unwrap(), Some(bob_note));
    }

    #[tokio::test]
    async fn test_note_requires_existing_owner() {
        let store = MemoryStore::new();
        let err = store.insert_note(new_note("ghost", "T")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_note_keeps_owner() {
        let store = MemoryStore::new();
        store.insert_user(new_user("alice")).await.unwrap();
        let note = store.insert_note(new_note("alice", "T")).await.unwrap();

        let updated = store.update_note(note.id, "T2", "C2").await.unwrap();
        assert_eq!(updated.id, note.id);
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "C2");
        assert_eq!(updated.owner_username, "alice");

        let stored = store.find_note(note.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_note() {
        let store = MemoryStore::new();
        let err = store.update_note(42, "T", "C").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_notes_for_owner_filters_and_orders() {
        let store = MemoryStore::new();
        store.insert_user(new_user("alice")).await.unwrap();
        store.insert_user(new_user("bob")).await.unwrap();
        store.insert_note(new_note("alice", "first")).await.unwrap();
        store.insert_note(new_note("bob", "other")).await.unwrap();
        store.insert_note(new_note("alice", "second")).await.unwrap();

        let titles: Vec<_> = store
            .notes_for_owner("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_delete_note() {
        let store = MemoryStore::new();
        store.insert_user(new_user("alice")).await.unwrap();
        let note = store.insert_note(new_note("alice", "T")).await.unwrap();

        store.delete_note(note.id).await.unwrap();
        assert!(store.find_note(note.id).await.unwrap().is_none());
        assert!(store.delete_note(note.id).await.unwrap_err().is_not_found());
    }
}
