// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login form, logout and credential submission.

use axum::{
    extract::{rejection::FormRejection, State},
    http::Method,
    response::{Html, Response},
    Form,
};

use super::redirect_with_session;
use crate::{
    auth::{self, AuthOutcome},
    error::AppError,
    models::LoginForm,
    render::{Page, Template},
    session::Session,
    state::AppState,
};

pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state
        .pages
        .render(Template::Login, &Page::<()>::new("Login"))
}

/// Revoke authentication and go home. The email stays in the cookie.
pub async fn logout(State(state): State<AppState>, mut session: Session) -> Result<Response, AppError> {
    session.logout();
    tracing::info!(email = %session.email, "Participant logged out");
    redirect_with_session(&state, &session, "/")
}

/// Log in, registering the participant on first sight.
///
/// Always answers with the session cookie and a redirect home; only a POST
/// with a readable form touches the ledger.
pub async fn authenticate(
    State(state): State<AppState>,
    method: Method,
    mut session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    if method == Method::POST {
        match form {
            Ok(Form(form)) => {
                let outcome = auth::authenticate(&state.contract, &form).await;
                log_outcome(&form.email, &outcome);
                outcome.apply(&mut session, form.email.trim());
            }
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Unreadable login form");
            }
        }
    }

    redirect_with_session(&state, &session, "/")
}

fn log_outcome(email: &str, outcome: &AuthOutcome) {
    match outcome {
        AuthOutcome::Registered => tracing::info!(email, "Registered new participant"),
        AuthOutcome::LoggedIn => tracing::info!(email, "Participant logged in"),
        AuthOutcome::WrongPassword => tracing::warn!(email, "Password mismatch"),
        AuthOutcome::MissingEmail => tracing::warn!("Login submitted without an email"),
        AuthOutcome::LookupFailed(e) => {
            tracing::warn!(email, error = %e, "Failed to check participant existence")
        }
        AuthOutcome::RegistrationFailed(e) => {
            tracing::warn!(email, error = %e, "Failed to create participant")
        }
        AuthOutcome::ReadFailed(e) => tracing::warn!(email, error = %e, "Failed to read participant"),
    }
}
