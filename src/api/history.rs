// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, response::Html};

use super::{load_owned_account, AccountId};
use crate::{
    error::AppError,
    render::{Page, Template},
    session::RequireLogin,
    state::AppState,
};

/// One account and its ledger history.
///
/// The account must be readable; the history may fail and then shows empty.
pub async fn history_page(
    AccountId(account_id): AccountId,
    RequireLogin(session): RequireLogin,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let account = load_owned_account(&state, &session, &account_id).await?;

    let history = state.contract.account_history(&account_id).await;
    if let Err(e) = &history {
        tracing::warn!(%account_id, error = %e, "Failed to read account history");
    }

    let page = Page::new(session.email)
        .with_account(account)
        .with_rows(history);
    state.pages.render(Template::History, &page)
}
