//! Session cookie configuration.

use api::Settings;
use tower_sessions::cookie::{Key, KeyError, SameSite};
use tracing::warn;

/// How the session cookie is issued.
#[derive(Clone)]
pub struct SessionConfig {
    /// Signs the session id so a client cannot forge one.
    pub key: Key,
    pub secure: bool,
    /// `None` keeps the session until the browser closes.
    pub inactivity: Option<time::Duration>,
}

impl SessionConfig {
    /// Derive the cookie setup from settings. Without a configured secret a
    /// random key is generated, which logs everyone out on restart.
    pub fn from_settings(settings: &Settings) -> Result<Self, KeyError> {
        let key = match &settings.secret_key {
            Some(secret) => Key::try_from(secret.as_bytes())?,
            None => {
                warn!("SECRET_KEY not set, generating a random session key");
                Key::generate()
            }
        };

        Ok(Self {
            key,
            secure: settings.secure_cookies,
            inactivity: settings.session_inactivity_secs.map(time::Duration::seconds),
        })
    }

    /// Random key, insecure cookies, browser-session lifetime.
    pub fn ephemeral() -> Self {
        Self {
            key: Key::generate(),
            secure: false,
            inactivity: None,
        }
    }
}
