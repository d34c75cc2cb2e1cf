//! The HTTP face of the notes app.
//!
//! [`app`] assembles the axum router: the route table from [`routes`], a
//! request trace layer, and the `tower-sessions` layer that backs every
//! [`RequestContext`]. The binary in `main.rs` feeds it Postgres-backed
//! stores; the integration tests feed it in-memory ones.

pub mod context;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

pub use context::RequestContext;
pub use error::AppError;
pub use session::SessionConfig;
pub use state::AppState;

/// Build the full application around a session store.
pub fn app<Store: SessionStore>(state: AppState, session_store: Store, config: SessionConfig) -> Router {
    let expiry = match config.inactivity {
        Some(duration) => Expiry::OnInactivity(duration),
        None => Expiry::OnSessionEnd,
    };

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(expiry)
        .with_signed(config.key);

    routes::router()
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
