//! The session-bound identity of a client.
//!
//! The session record itself is owned by `tower-sessions`; this module only
//! decides which key holds the authenticated username and how it changes.

use thiserror::Error;
use tower_sessions::Session;

/// Key for storing the authenticated username in the session.
pub const SESSION_USERNAME_KEY: &str = "username";

#[derive(Debug, Error)]
#[error("session store error: {0}")]
pub struct SessionError(#[from] tower_sessions::session::Error);

/// Reads and writes the authenticated principal of one client session.
#[derive(Clone, Debug)]
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The authenticated username, or `None` for an anonymous client.
    pub async fn current(&self) -> Result<Option<String>, SessionError> {
        Ok(self.session.get(SESSION_USERNAME_KEY).await?)
    }

    /// Mark the session as authenticated. The session id is rotated first so
    /// an id issued before login cannot be reused afterwards.
    pub async fn set(&self, username: &str) -> Result<(), SessionError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_USERNAME_KEY, username).await?;
        Ok(())
    }

    /// Drop the identity. Other keys (pending notices) are kept.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.session.remove::<String>(SESSION_USERNAME_KEY).await?;
        Ok(())
    }
}
