// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, response::Html};

use crate::{
    error::AppError,
    render::{Page, Template},
    session::RequireLogin,
    state::AppState,
};

/// Accounts owned by the logged-in participant.
///
/// A failed query still renders the page, with no rows.
pub async fn main_page(
    RequireLogin(session): RequireLogin,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let accounts = state.contract.participant_accounts(&session.email).await;
    if let Err(e) = &accounts {
        tracing::warn!(email = %session.email, error = %e, "Failed to list participant accounts");
    }

    let page = Page::new(session.email).with_rows(accounts);
    state.pages.render(Template::Main, &page)
}
