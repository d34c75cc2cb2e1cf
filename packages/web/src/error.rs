use api::auth::SessionError;
use api::{CredentialError, NoteError};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use ui::views::{not_found_page, server_error_page};
use ui::Chrome;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Session layer unavailable: {0}")]
    SessionLayer(&'static str),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error(transparent)]
    Notes(#[from] NoteError),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::NotFound => true,
            AppError::Credentials(e) => e.is_not_found(),
            AppError::Notes(e) => e.is_not_found(),
            _ => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            let body = ui::render(not_found_page(&Chrome::default()));
            return (StatusCode::NOT_FOUND, Html(body)).into_response();
        }

        error!(error = %self, "request failed");
        let body = ui::render(server_error_page());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
