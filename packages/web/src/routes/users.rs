//! A user's own page and account deletion.

use api::forms::CsrfForm;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::warn;
use ui::views::user_page;

use super::{deny, submitted_token};
use crate::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

pub async fn show(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    if !ctx.is(&username) {
        return deny(&ctx).await;
    }

    let user = state.credentials.get(&username).await?;
    let notes = state.notes.list_for_owner(&username).await?;
    let chrome = ctx.chrome().await?;

    Ok(Html(ui::render(user_page(&chrome, &user.to_profile(), &notes))).into_response())
}

/// Delete the account and its notes, then end the session. With a bad token
/// nothing is deleted, but the client is redirected all the same.
pub async fn delete(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Path(username): Path<String>,
    form: Result<Form<CsrfForm>, FormRejection>,
) -> Result<Response, AppError> {
    if !ctx.is(&username) {
        return deny(&ctx).await;
    }

    if ctx.csrf_valid(&submitted_token(form)).await? {
        state.credentials.delete(&username).await?;
        ctx.logout().await?;
        ctx.flash("Your account has been deleted.").await?;
    } else {
        warn!(%username, "account deletion with invalid anti-forgery token ignored");
    }
    Ok(Redirect::to("/").into_response())
}
