//! # Database module: PostgreSQL connection pool and schema
//!
//! The pool is created once at startup from [`Settings`](crate::settings::Settings)
//! and handed to whoever needs it (the [`store::PgStore`] and the session store);
//! nothing here is a process-wide global.
//!
//! - [`connect`]: opens a pool against `database_url`.
//! - [`migrate`]: applies the embedded migrations in `packages/api/migrations`.

mod pool;

pub use pool::{connect, migrate};
