//! # Records for users and notes
//!
//! These are plain data carriers: nothing here touches a connection or loads
//! lazily. Backends return them by value.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A complete `users` row, including the Argon2 PHC `password_hash`. Never leaves the server. |
//! | [`UserProfile`] | The render-safe projection of a [`User`] (no hash). |
//! | [`NewUser`] | Everything needed to insert a user; the password is already hashed. |
//! | [`Note`] | A complete `notes` row. `owner_username` references [`User::username`]. |
//! | [`NewNote`] | Title, content and owner of a note about to be created. |

use serde::{Deserialize, Serialize};

/// Surrogate key of a note.
pub type NoteId = i64;

/// Full user record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Project into the fields that may be shown on a page.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// User information safe to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// "First Last", falling back to the username when both names are blank.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    pub(crate) fn into_user(self) -> User {
        User {
            username: self.username,
            password_hash: self.password_hash,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// A note owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub owner_username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub owner_username: String,
}
