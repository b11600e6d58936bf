// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for the cookie session.
//!
//! Use [`Session`] where a handler works with or without a login, and
//! [`RequireLogin`] on every protected page:
//!
//! ```rust,ignore
//! async fn main_page(RequireLogin(session): RequireLogin, State(state): State<AppState>) {
//!     // session.email is the logged-in participant
//! }
//! ```

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Response,
};

use super::Session;
use crate::{api::found, state::AppState};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(state.sessions.load(&parts.headers))
    }
}

/// An authenticated session.
///
/// Rejects with a redirect to the login page before the handler runs, so a
/// protected page never reaches the ledger for an anonymous visitor.
pub struct RequireLogin(pub Session);

impl FromRequestParts<AppState> for RequireLogin {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = state.sessions.load(&parts.headers);
        if session.is_authenticated() {
            Ok(RequireLogin(session))
        } else {
            tracing::debug!(path = %parts.uri.path(), "Unauthenticated request, redirecting to login");
            Err(found(LOGIN_PATH))
        }
    }
}
