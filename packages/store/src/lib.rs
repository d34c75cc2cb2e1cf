//! Storage layer for users and their notes.
//!
//! Everything above this crate talks to the [`UserStore`] and [`NoteStore`]
//! traits and receives plain records back. Two backends are provided:
//! [`MemoryStore`] (tests, local experiments) and, behind the `postgres`
//! feature, [`PgStore`].

pub mod error;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "postgres")]
pub use postgres::PgStore;

pub use error::StoreError;
pub use models::{NewNote, NewUser, Note, NoteId, User, UserProfile};
pub use repo::{NoteStore, UserStore};
