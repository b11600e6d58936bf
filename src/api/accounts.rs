// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account creation.

use axum::{
    extract::{rejection::FormRejection, State},
    http::Method,
    response::{IntoResponse, Response},
    Form,
};
use uuid::Uuid;

use super::found;
use crate::{
    error::AppError,
    ledger::{Contract, LedgerError},
    models::NewAccountForm,
    render::{Page, Template},
    session::RequireLogin,
    state::AppState,
};

/// GET shows the form; POST opens the account and goes home whatever the
/// ledger says.
pub async fn account_page(
    RequireLogin(session): RequireLogin,
    State(state): State<AppState>,
    method: Method,
    form: Result<Form<NewAccountForm>, FormRejection>,
) -> Result<Response, AppError> {
    match method {
        Method::GET => Ok(state
            .pages
            .render(Template::Account, &Page::<()>::new(session.email))?
            .into_response()),
        Method::POST => {
            match form {
                Ok(Form(form)) => {
                    match open_account(&state.contract, &session.email, &form).await {
                        Ok(account_id) => tracing::info!(
                            %account_id,
                            email = %session.email,
                            currency = %form.currency,
                            "Opened account"
                        ),
                        Err(e) => tracing::warn!(
                            email = %session.email,
                            currency = %form.currency,
                            error = %e,
                            "Failed to open account"
                        ),
                    }
                }
                Err(rejection) => tracing::warn!(error = %rejection, "Unreadable account form"),
            }
            Ok(found("/"))
        }
        _ => Ok(found("/")),
    }
}

/// Submit `CreateAccount` under a fresh id; returns that id.
pub async fn open_account(
    contract: &Contract,
    owner_email: &str,
    form: &NewAccountForm,
) -> Result<String, LedgerError> {
    let account_id = Uuid::new_v4().to_string();
    contract
        .create_account(&account_id, form.currency.trim(), form.balance.trim(), owner_email)
        .await?;
    Ok(account_id)
}
