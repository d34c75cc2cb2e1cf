//! # Credential service
//!
//! Wraps a [`UserStore`] with everything that involves a password:
//! registration hashes before inserting, authentication verifies against the
//! stored Argon2 hash. The plaintext never reaches the store.
//!
//! [`CredentialService::authenticate`] reports bad credentials as `Ok(None)`;
//! only infrastructure faults come back as `Err`.

use std::sync::Arc;

use store::{NewUser, StoreError, User, UserStore};
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::{hash_password, verify_password};
use crate::forms::{LoginAttempt, Registration};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}

impl CredentialError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CredentialError::Store(e) if e.is_not_found())
    }
}

#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserStore>,
}

impl CredentialService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Create a user. A taken username fails with
    /// [`StoreError::DuplicateUsername`] before anything is written.
    pub async fn register(&self, registration: Registration) -> Result<User, CredentialError> {
        let password_hash =
            hash_password(&registration.password).map_err(CredentialError::Hash)?;

        let user = self
            .users
            .insert_user(NewUser {
                username: registration.username,
                password_hash,
                email: registration.email,
                first_name: registration.first_name,
                last_name: registration.last_name,
            })
            .await?;

        info!(username = %user.username, "registered user");
        Ok(user)
    }

    /// The matching user, or `None` when the username is unknown or the
    /// password does not match.
    pub async fn authenticate(&self, attempt: &LoginAttempt) -> Result<Option<User>, CredentialError> {
        let Some(user) = self.users.find_user(&attempt.username).await? else {
            return Ok(None);
        };

        match verify_password(&attempt.password, &user.password_hash) {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(e) => {
                warn!(username = %user.username, error = %e, "stored password hash is unreadable");
                Ok(None)
            }
        }
    }

    pub async fn get(&self, username: &str) -> Result<User, CredentialError> {
        self.users
            .find_user(username)
            .await?
            .ok_or(CredentialError::Store(StoreError::NotFound))
    }

    /// Whether `username` still has an account.
    pub async fn exists(&self, username: &str) -> Result<bool, CredentialError> {
        Ok(self.users.find_user(username).await?.is_some())
    }

    /// Delete a user and, with them, their notes.
    pub async fn delete(&self, username: &str) -> Result<(), CredentialError> {
        self.users.delete_user(username).await?;
        info!(%username, "deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use store::MemoryStore;

    use super::*;

    fn registration(username: &str, password: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: password.to_string(),
            email: format!("{username}@example.com"),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
        }
    }

    fn attempt(username: &str, password: &str) -> LoginAttempt {
        LoginAttempt {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn service() -> (MemoryStore, CredentialService) {
        let store = MemoryStore::new();
        let service = CredentialService::new(Arc::new(store.clone()));
        (store, service)
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let (store, credentials) = service();

        let user = credentials.register(registration("alice", "pw1")).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "pw1");

        let stored = store.find_user("alice").await.unwrap().unwrap();
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_twice_fails_without_mutation() {
        let (store, credentials) = service();
        credentials.register(registration("alice", "pw1")).await.unwrap();

        let mut second = registration("alice", "pw2");
        second.email = "imposter@example.com".to_string();
        let err = credentials.register(second).await.unwrap_err();
        assert!(matches!(
            err,
            CredentialError::Store(StoreError::DuplicateUsername(ref name)) if name == "alice"
        ));

        let stored = store.find_user("alice").await.unwrap().unwrap();
        assert_eq!(stored.email, "alice@example.com");
        assert!(credentials.authenticate(&attempt("alice", "pw1")).await.unwrap().is_some());
        assert!(credentials.authenticate(&attempt("alice", "pw2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authenticate() {
        let (_, credentials) = service();
        credentials.register(registration("alice", "pw1")).await.unwrap();

        let user = credentials
            .authenticate(&attempt("alice", "pw1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.username, "alice");

        assert!(credentials
            .authenticate(&attempt("alice", "wrongpw"))
            .await
            .unwrap()
            .is_none());
        assert!(credentials
            .authenticate(&attempt("nobody", "pw1"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let (_, credentials) = service();
        credentials.register(registration("alice", "pw1")).await.unwrap();

        assert!(credentials.exists("alice").await.unwrap());
        credentials.delete("alice").await.unwrap();
        assert!(!credentials.exists("alice").await.unwrap());
        assert!(credentials.get("alice").await.unwrap_err().is_not_found());
        assert!(credentials.delete("alice").await.unwrap_err().is_not_found());
    }
}
