//! # API crate: the server-side core of the notes app
//!
//! Everything between an HTTP handler and the storage layer lives here. The
//! `web` crate only parses requests, calls into these modules, and picks a
//! page or redirect.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, the session-bound identity ([`auth::SessionManager`]), anti-forgery tokens |
//! | [`credentials`] | Register / authenticate / delete users on top of a [`store::UserStore`] |
//! | [`notes`] | Note CRUD and the ownership check on top of a [`store::NoteStore`] |
//! | [`forms`] | Pure validation of every submitted form |
//! | [`flash`] | One-shot notices carried across a redirect |
//! | [`settings`] | Layered configuration (`config` + `dotenvy`) |
//! | [`db`] | PostgreSQL pool and migrations |

pub mod auth;
pub mod credentials;
pub mod db;
pub mod flash;
pub mod forms;
pub mod notes;
pub mod settings;

pub use credentials::{CredentialError, CredentialService};
pub use forms::ValidationErrors;
pub use notes::{NoteError, NoteService};
pub use settings::Settings;
