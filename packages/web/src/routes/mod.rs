//! # Route table
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | redirect to `/register` |
//! | GET, POST | `/register` | [`auth::register_form`], [`auth::register`] |
//! | GET, POST | `/login` | [`auth::login_form`], [`auth::login`] |
//! | POST | `/logout` | [`auth::logout`] |
//! | GET | `/users/{username}` | [`users::show`] |
//! | POST | `/users/{username}/delete` | [`users::delete`] |
//! | GET, POST | `/users/{username}/notes/add` | [`notes::add_form`], [`notes::add`] |
//! | GET, POST | `/notes/{note_id}/update` | [`notes::update_form`], [`notes::update`] |
//! | POST | `/notes/{note_id}/delete` | [`notes::delete`] |
//!
//! Every page under `/users/{username}` and `/notes/{note_id}` belongs to one
//! user. Anyone else, anonymous clients included, is sent back to `/` with a
//! notice; there is no 403 page.

pub mod auth;
pub mod notes;
pub mod users;

use axum::{
    extract::rejection::FormRejection,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use api::forms::CsrfForm;
use api::ValidationErrors;

use crate::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

pub const CSRF_INVALID: &str = "The form expired, please submit it again.";
pub const LOGIN_REQUIRED: &str = "Please log in first.";
pub const NOT_AUTHORIZED: &str = "You don't have permission to do that.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/users/{username}", get(users::show))
        .route("/users/{username}/delete", post(users::delete))
        .route(
            "/users/{username}/notes/add",
            get(notes::add_form).post(notes::add),
        )
        .route(
            "/notes/{note_id}/update",
            get(notes::update_form).post(notes::update),
        )
        .route("/notes/{note_id}/delete", post(notes::delete))
        .fallback(not_found)
}

async fn root() -> Redirect {
    Redirect::to("/register")
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Send the client back to the entry point with a notice explaining why.
pub(crate) async fn deny(ctx: &RequestContext) -> Result<Response, AppError> {
    let notice = if ctx.username().is_some() {
        NOT_AUTHORIZED
    } else {
        LOGIN_REQUIRED
    };
    ctx.flash(notice).await?;
    Ok(Redirect::to("/").into_response())
}

pub(crate) fn user_page_url(username: &str) -> String {
    format!("/users/{username}")
}

/// Fold the anti-forgery check into a form's validation result, so a bad
/// token is reported next to the other errors.
pub(crate) async fn with_csrf<T>(
    ctx: &RequestContext,
    token: &str,
    validated: Result<T, ValidationErrors>,
) -> Result<Result<T, ValidationErrors>, AppError> {
    if ctx.csrf_valid(token).await? {
        return Ok(validated);
    }
    let mut errors = validated.err().unwrap_or_default();
    errors.add("csrf_token", CSRF_INVALID);
    Ok(Err(errors))
}

/// The token of a token-only form. An unreadable body counts as no token,
/// so the handler still decides where the client goes.
pub(crate) fn submitted_token(form: Result<Form<CsrfForm>, FormRejection>) -> String {
    form.map(|Form(form)| form.csrf_token).unwrap_or_default()
}
