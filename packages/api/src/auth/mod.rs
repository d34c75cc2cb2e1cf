//! Authentication: password hashing, the session-bound identity, and
//! anti-forgery tokens.

pub mod csrf;
mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::{SessionError, SessionManager, SESSION_USERNAME_KEY};
