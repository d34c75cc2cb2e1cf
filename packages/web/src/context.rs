//! # Request context
//!
//! [`RequestContext`] is the per-request view of the client session that
//! every handler takes as an extractor. It answers "who is asking", owns the
//! anti-forgery token, and carries notices to the next page. Handlers never
//! touch the session directly.
//!
//! Per request the client is either anonymous or authenticated as exactly one
//! username; [`login`](RequestContext::login) and
//! [`logout`](RequestContext::logout) are the only transitions.

use api::auth::{csrf, SessionManager};
use api::flash;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use tower_sessions::Session;
use tracing::warn;
use ui::Chrome;

use crate::error::AppError;
use crate::state::AppState;

pub struct RequestContext {
    sessions: SessionManager,
    username: Option<String>,
}

impl RequestContext {
    /// The authenticated username, `None` when anonymous.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether the client is authenticated as exactly `username`.
    pub fn is(&self, username: &str) -> bool {
        self.username.as_deref() == Some(username)
    }

    pub async fn login(&mut self, username: &str) -> Result<(), AppError> {
        self.sessions.set(username).await?;
        self.username = Some(username.to_string());
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.sessions.clear().await?;
        self.username = None;
        Ok(())
    }

    /// Whether `token` is this session's anti-forgery token.
    pub async fn csrf_valid(&self, token: &str) -> Result<bool, AppError> {
        Ok(csrf::verify(self.sessions.session(), token).await?)
    }

    /// Queue a notice for the next rendered page.
    pub async fn flash(&self, message: impl Into<String>) -> Result<(), AppError> {
        flash::push(self.sessions.session(), message).await?;
        Ok(())
    }

    /// Everything a page needs around its content. Consumes queued notices.
    pub async fn chrome(&self) -> Result<Chrome, AppError> {
        let session = self.sessions.session();
        Ok(Chrome {
            username: self.username.clone(),
            csrf_token: csrf::token(session).await?,
            flashes: flash::take(session).await?,
        })
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::SessionLayer(message))?;
        let sessions = SessionManager::new(session);
        let mut username = sessions.current().await?;

        // the account may have been deleted from another session
        if let Some(name) = username.as_deref() {
            if !AppState::from_ref(state).credentials.exists(name).await? {
                warn!(username = %name, "session names a deleted user, logging it out");
                sessions.clear().await?;
                username = None;
            }
        }

        Ok(Self { sessions, username })
    }
}
