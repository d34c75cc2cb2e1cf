//! Creating, editing and deleting notes.
//!
//! Adding is scoped by the username in the path; editing and deleting are
//! scoped by the note's owner, which is only known once the note is loaded.

use api::forms::{CsrfForm, NoteForm};
use api::{NoteError, ValidationErrors};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use store::{Note, NoteId};
use tracing::warn;
use ui::views::{add_note_page, update_note_page};

use super::{deny, submitted_token, user_page_url, with_csrf};
use crate::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// A note id that does not parse can't name a note.
fn parse_note_id(raw: &str) -> Result<NoteId, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// Load a note on behalf of the current client, or the response that turns
/// them away.
async fn owned_note(
    state: &AppState,
    ctx: &RequestContext,
    raw_id: &str,
) -> Result<Result<Note, Response>, AppError> {
    let Some(username) = ctx.username() else {
        return Ok(Err(deny(ctx).await?));
    };
    let note_id = parse_note_id(raw_id)?;

    match state.notes.owned(note_id, username).await {
        Ok(note) => Ok(Ok(note)),
        Err(NoteError::Unauthorized { .. }) => Ok(Err(deny(ctx).await?)),
        Err(e) => Err(e.into()),
    }
}

pub async fn add_form(
    ctx: RequestContext,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    if !ctx.is(&username) {
        return deny(&ctx).await;
    }
    let chrome = ctx.chrome().await?;
    let page = add_note_page(&chrome, &username, &NoteForm::default(), &ValidationErrors::new());
    Ok(Html(ui::render(page)).into_response())
}

pub async fn add(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(username): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Response, AppError> {
    if !ctx.is(&username) {
        return deny(&ctx).await;
    }

    match with_csrf(&ctx, &form.csrf_token, form.validate()).await? {
        Ok(draft) => {
            state.notes.create(&username, draft).await?;
            Ok(Redirect::to(&user_page_url(&username)).into_response())
        }
        Err(errors) => {
            let chrome = ctx.chrome().await?;
            let page = add_note_page(&chrome, &username, &form, &errors);
            Ok(Html(ui::render(page)).into_response())
        }
    }
}

pub async fn update_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(note_id): Path<String>,
) -> Result<Response, AppError> {
    let note = match owned_note(&state, &ctx, &note_id).await? {
        Ok(note) => note,
        Err(response) => return Ok(response),
    };

    let form = NoteForm {
        csrf_token: String::new(),
        title: note.title,
        content: note.content,
    };
    let chrome = ctx.chrome().await?;
    let page = update_note_page(
        &chrome,
        note.id,
        &note.owner_username,
        &form,
        &ValidationErrors::new(),
    );
    Ok(Html(ui::render(page)).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(note_id): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Response, AppError> {
    let note = match owned_note(&state, &ctx, &note_id).await? {
        Ok(note) => note,
        Err(response) => return Ok(response),
    };

    match with_csrf(&ctx, &form.csrf_token, form.validate()).await? {
        Ok(draft) => {
            state.notes.update(note.id, &draft).await?;
            Ok(Redirect::to(&user_page_url(&note.owner_username)).into_response())
        }
        Err(errors) => {
            let chrome = ctx.chrome().await?;
            let page = update_note_page(&chrome, note.id, &note.owner_username, &form, &errors);
            Ok(Html(ui::render(page)).into_response())
        }
    }
}

/// With a bad token nothing is deleted, but the client is redirected all
/// the same.
pub async fn delete(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(note_id): Path<String>,
    form: Result<Form<CsrfForm>, FormRejection>,
) -> Result<Response, AppError> {
    let note = match owned_note(&state, &ctx, &note_id).await? {
        Ok(note) => note,
        Err(response) => return Ok(response),
    };

    if ctx.csrf_valid(&submitted_token(form)).await? {
        state.notes.delete(note.id).await?;
        ctx.flash("Note deleted.").await?;
    } else {
        warn!(note_id = note.id, "note deletion with invalid anti-forgery token ignored");
    }
    Ok(Redirect::to(&user_page_url(&note.owner_username)).into_response())
}
