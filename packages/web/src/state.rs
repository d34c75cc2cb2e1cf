use std::sync::Arc;

use api::{CredentialService, NoteService};
use store::{NoteStore, UserStore};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialService,
    pub notes: NoteService,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, notes: Arc<dyn NoteStore>) -> Self {
        Self {
            credentials: CredentialService::new(users),
            notes: NoteService::new(notes),
        }
    }

    /// Use one backend for both users and notes.
    pub fn with_store<S>(store: S) -> Self
    where
        S: UserStore + NoteStore + 'static,
    {
        let store = Arc::new(store);
        Self::new(store.clone(), store)
    }
}
