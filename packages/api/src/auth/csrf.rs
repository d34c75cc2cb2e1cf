//! Anti-forgery tokens.
//!
//! One random token is minted per session and embedded as a hidden
//! `csrf_token` field in every form. A POST is genuine only if it echoes the
//! token of the session it arrives with.

use rand::RngCore;
use tower_sessions::Session;

use super::SessionError;

/// Session key holding the token.
pub const CSRF_SESSION_KEY: &str = "csrf_token";

/// Name of the hidden form field carrying the token.
pub const CSRF_FIELD: &str = "csrf_token";

fn generate() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// The session's token, minting one on first use.
pub async fn token(session: &Session) -> Result<String, SessionError> {
    if let Some(token) = session.get::<String>(CSRF_SESSION_KEY).await? {
        return Ok(token);
    }
    let token = generate();
    session.insert(CSRF_SESSION_KEY, &token).await?;
    Ok(token)
}

/// Whether `submitted` matches the session's token. A session that never
/// rendered a form has no token, so nothing verifies against it.
pub async fn verify(session: &Session, submitted: &str) -> Result<bool, SessionError> {
    let Some(expected) = session.get::<String>(CSRF_SESSION_KEY).await? else {
        return Ok(false);
    };
    Ok(constant_time_eq(expected.as_bytes(), submitted.as_bytes()))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_token_is_stable_per_session() {
        let session = session();
        let first = token(&session).await.unwrap();
        let second = token(&session).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[tokio::test]
    async fn test_verify() {
        let session = session();
        let token = token(&session).await.unwrap();

        assert!(verify(&session, &token).await.unwrap());
        assert!(!verify(&session, "").await.unwrap());
        assert!(!verify(&session, &token[1..]).await.unwrap());
    }

    #[tokio::test]
    async fn test_no_token_minted_rejects_everything() {
        assert!(!verify(&session(), "").await.unwrap());
    }

    #[tokio::test]
    async fn test_tokens_differ_between_sessions() {
        let a = token(&session()).await.unwrap();
        let b = token(&session()).await.unwrap();
        assert_ne!(a, b);
    }
}
