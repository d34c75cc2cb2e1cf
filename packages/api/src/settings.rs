//! # Runtime settings
//!
//! Layered with the `config` crate, later sources winning:
//!
//! 1. built-in defaults,
//! 2. an optional `config.toml` in the working directory,
//! 3. environment variables (`.env` is loaded first via `dotenvy`).
//!
//! Keys are the lower-cased environment names: `DATABASE_URL` → `database_url`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/flask_notes";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    /// Keep sqlx statement logging on.
    pub database_echo: bool,
    pub listen_addr: String,
    /// Signs the session cookie. At least 64 bytes.
    pub secret_key: Option<String>,
    pub secure_cookies: bool,
    /// Expire sessions after this much inactivity. Unset: the cookie lives
    /// as long as the browser session.
    pub session_inactivity_secs: Option<i64>,
}

impl Settings {
    /// Load from defaults, `config.toml` and the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load(Environment::default())
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("database_max_connections", 5_i64)?
            .set_default("database_echo", false)?
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .set_default("secure_cookies", false)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()?;

        let settings: Self = config.try_deserialize()?;
        if let Some(secs) = settings.session_inactivity_secs {
            if secs <= 0 {
                return Err(ConfigError::Message(format!(
                    "session_inactivity_secs must be positive, got {secs}"
                )));
            }
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_load(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::load(Environment::default().source(Some(vars)))
    }

    fn load(vars: &[(&str, &str)]) -> Settings {
        try_load(vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = load(&[]);
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.database_max_connections, 5);
        assert!(!settings.database_echo);
        assert_eq!(settings.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(settings.secret_key, None);
        assert!(!settings.secure_cookies);
        assert_eq!(settings.session_inactivity_secs, None);
    }

    #[test]
    fn test_environment_overrides() {
        let settings = load(&[
            ("DATABASE_URL", "postgres://db.internal/notes"),
            ("LISTEN_ADDR", "0.0.0.0:3000"),
            ("SECURE_COOKIES", "true"),
            ("SESSION_INACTIVITY_SECS", "3600"),
        ]);
        assert_eq!(settings.database_url, "postgres://db.internal/notes");
        assert_eq!(settings.listen_addr, "0.0.0.0:3000");
        assert!(settings.secure_cookies);
        assert_eq!(settings.session_inactivity_secs, Some(3600));
    }

    #[test]
    fn test_non_positive_inactivity_rejected() {
        for secs in ["0", "-30"] {
            let err = try_load(&[("SESSION_INACTIVITY_SECS", secs)]).unwrap_err();
            assert!(err.to_string().contains("must be positive"), "secs {secs}");
        }
    }
}
