//! Register, log in, log out.
//!
//! A client that is already authenticated never sees the register or login
//! form again; it is sent to its own page instead.

use api::forms::{CsrfForm, LoginForm, RegisterForm};
use api::{CredentialError, ValidationErrors};
use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use store::StoreError;
use tracing::{info, warn};
use ui::views::{login_page, register_page};

use super::{submitted_token, user_page_url, with_csrf};
use crate::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

pub const USERNAME_TAKEN: &str = "Username is already taken.";
pub const BAD_CREDENTIALS: &str = "Invalid username or password.";

fn already_logged_in(ctx: &RequestContext) -> Option<Response> {
    ctx.username()
        .map(|username| Redirect::to(&user_page_url(username)).into_response())
}

async fn render_register(
    ctx: &RequestContext,
    form: &RegisterForm,
    errors: &ValidationErrors,
) -> Result<Response, AppError> {
    let chrome = ctx.chrome().await?;
    Ok(Html(ui::render(register_page(&chrome, form, errors))).into_response())
}

async fn render_login(
    ctx: &RequestContext,
    form: &LoginForm,
    errors: &ValidationErrors,
) -> Result<Response, AppError> {
    let chrome = ctx.chrome().await?;
    Ok(Html(ui::render(login_page(&chrome, form, errors))).into_response())
}

pub async fn register_form(ctx: RequestContext) -> Result<Response, AppError> {
    if let Some(redirect) = already_logged_in(&ctx) {
        return Ok(redirect);
    }
    render_register(&ctx, &RegisterForm::default(), &ValidationErrors::new()).await
}

pub async fn register(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    if let Some(redirect) = already_logged_in(&ctx) {
        return Ok(redirect);
    }

    let registration = match with_csrf(&ctx, &form.csrf_token, form.validate()).await? {
        Ok(registration) => registration,
        Err(errors) => return render_register(&ctx, &form, &errors).await,
    };

    let user = match state.credentials.register(registration).await {
        Ok(user) => user,
        Err(CredentialError::Store(StoreError::DuplicateUsername(_))) => {
            let mut errors = ValidationErrors::new();
            errors.add("username", USERNAME_TAKEN);
            return render_register(&ctx, &form, &errors).await;
        }
        Err(e) => return Err(e.into()),
    };

    ctx.login(&user.username).await?;
    Ok(Redirect::to(&user_page_url(&user.username)).into_response())
}

pub async fn login_form(ctx: RequestContext) -> Result<Response, AppError> {
    if let Some(redirect) = already_logged_in(&ctx) {
        return Ok(redirect);
    }
    render_login(&ctx, &LoginForm::default(), &ValidationErrors::new()).await
}

pub async fn login(
    State(state): State<AppState>,
    mut ctx: RequestContext,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if let Some(redirect) = already_logged_in(&ctx) {
        return Ok(redirect);
    }

    let attempt = match with_csrf(&ctx, &form.csrf_token, form.validate()).await? {
        Ok(attempt) => attempt,
        Err(errors) => return render_login(&ctx, &form, &errors).await,
    };

    let Some(user) = state.credentials.authenticate(&attempt).await? else {
        warn!(username = %attempt.username, "failed login");
        let mut errors = ValidationErrors::new();
        errors.add("username", BAD_CREDENTIALS);
        return render_login(&ctx, &form, &errors).await;
    };

    ctx.login(&user.username).await?;
    info!(username = %user.username, "logged in");
    Ok(Redirect::to(&user_page_url(&user.username)).into_response())
}

/// End the session. With a bad token nothing changes, but the client is
/// redirected all the same.
pub async fn logout(
    mut ctx: RequestContext,
    form: Result<Form<CsrfForm>, FormRejection>,
) -> Result<Response, AppError> {
    if ctx.csrf_valid(&submitted_token(form)).await? {
        if let Some(username) = ctx.username().map(str::to_string) {
            ctx.logout().await?;
            ctx.flash("You have been logged out.").await?;
            info!(%username, "logged out");
        }
    } else {
        warn!("logout with invalid anti-forgery token ignored");
    }
    Ok(Redirect::to("/").into_response())
}
