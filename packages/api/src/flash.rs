//! One-shot notices carried across a redirect.
//!
//! A handler queues a message before redirecting; the next page rendered for
//! that session takes the whole queue and shows it once.

use tower_sessions::Session;

use crate::auth::SessionError;

const FLASH_SESSION_KEY: &str = "_flashes";

/// Queue a notice for the next rendered page.
pub async fn push(session: &Session, message: impl Into<String>) -> Result<(), SessionError> {
    let mut queued: Vec<String> = session.get(FLASH_SESSION_KEY).await?.unwrap_or_default();
    queued.push(message.into());
    session.insert(FLASH_SESSION_KEY, queued).await?;
    Ok(())
}

/// Take every queued notice, leaving the queue empty.
pub async fn take(session: &Session) -> Result<Vec<String>, SessionError> {
    Ok(session
        .remove::<Vec<String>>(FLASH_SESSION_KEY)
        .await?
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_push_and_take_once() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        push(&session, "first").await.unwrap();
        push(&session, "second").await.unwrap();

        assert_eq!(take(&session).await.unwrap(), vec!["first", "second"]);
        assert!(take(&session).await.unwrap().is_empty());
    }
}
