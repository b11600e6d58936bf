// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP routing for the account pages.
//!
//! | Method | Path | Controller |
//! |--------|------|------------|
//! | any | `/` | [`home::main_page`] |
//! | any | `/login` | [`login::login_page`] |
//! | any | `/logout` | [`login::logout`] |
//! | any | `/auth` | [`login::authenticate`] |
//! | GET, POST | `/account` | [`accounts::account_page`] |
//! | any | `/history/{account_id}` | [`history::history_page`] |
//! | GET, POST | `/transfer/{account_id}` | [`transfer::transfer_page`] |
//! | GET | `/health/live`, `/health/ready` | [`health`] |
//!
//! Everything else is a plain-text 404.

use axum::{
    extract::Request,
    http::{
        header::{LOCATION, SET_COOKIE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{error::AppError, models::Account, session::Session, state::AppState};

pub mod accounts;
pub mod health;
pub mod history;
pub mod home;
pub mod login;
pub mod path;
pub mod transfer;

#[cfg(test)]
pub(crate) mod testing;

pub use path::AccountId;

pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", any(home::main_page))
        .route("/login", any(login::login_page))
        .route("/logout", any(login::logout))
        .route("/auth", any(login::authenticate))
        .route("/account", any(accounts::account_page))
        .route("/history/{account_id}", any(history::history_page))
        .route("/transfer/{account_id}", any(transfer::transfer_page))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    pages
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id,
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// `302 Found` to `location`.
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// Persist `session` in the cookie and redirect.
pub(crate) fn redirect_with_session(
    state: &AppState,
    session: &Session,
    location: &'static str,
) -> Result<Response, AppError> {
    let cookie = state.sessions.save(session).map_err(|e| {
        tracing::error!(error = %e, "Failed to write session cookie");
        AppError::internal("Failed to save session")
    })?;
    Ok(([(SET_COOKIE, cookie)], found(location)).into_response())
}

/// Read an account for a page, hiding both ledger failures and accounts
/// that belong to someone else behind a 404.
pub(crate) async fn load_owned_account(
    state: &AppState,
    session: &Session,
    account_id: &str,
) -> Result<Account, AppError> {
    let account = state.contract.read_account(account_id).await.map_err(|e| {
        tracing::warn!(account_id, error = %e, "Failed to read account");
        AppError::not_found()
    })?;

    if !account.is_owned_by(&session.email) {
        tracing::warn!(
            account_id,
            email = %session.email,
            "Account belongs to another participant"
        );
        return Err(AppError::not_found());
    }

    Ok(account)
}

async fn not_found() -> AppError {
    AppError::not_found()
}

#[derive(OpenApi)]
#[openapi(
    paths(health::health, health::liveness, health::readiness),
    components(schemas(health::ReadyResponse, health::HealthChecks, health::HealthResponse)),
    tags((name = "Health", description = "Liveness and readiness probes"))
)]
struct ApiDoc;
