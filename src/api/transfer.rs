// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfers between participants.
//!
//! The recipient is named by email. Funds land in the recipient's first
//! account (in ledger order) whose currency equals the sender's; one
//! attempt per request, no retry.

use axum::{
    extract::{rejection::FormRejection, State},
    http::Method,
    response::{IntoResponse, Response},
    Form,
};

use super::{found, load_owned_account, AccountId};
use crate::{
    error::AppError,
    ledger::Contract,
    models::{Account, ParticipantView, TransferForm},
    render::{Page, Template},
    session::RequireLogin,
    state::AppState,
};

pub async fn transfer_page(
    AccountId(account_id): AccountId,
    RequireLogin(session): RequireLogin,
    State(state): State<AppState>,
    method: Method,
    form: Result<Form<TransferForm>, FormRejection>,
) -> Result<Response, AppError> {
    let sender = load_owned_account(&state, &session, &account_id).await?;

    match method {
        Method::GET => {
            let participants = state.contract.all_participants().await.map(|all| {
                all.into_iter()
                    .map(ParticipantView::from)
                    .collect::<Vec<_>>()
            });
            if let Err(e) = &participants {
                tracing::warn!(error = %e, "Failed to list participants");
            }

            let page = Page::new(session.email)
                .with_account(sender)
                .with_rows(participants);
            Ok(state.pages.render(Template::Transfer, &page)?.into_response())
        }
        Method::POST => match form {
            Ok(Form(form)) => {
                execute_transfer(&state.contract, &sender, &form).await?;
                Ok(found("/"))
            }
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Unreadable transfer form");
                Ok(found("/"))
            }
        },
        _ => Ok(found("/")),
    }
}

/// First candidate in the sender's currency.
pub fn select_recipient_account<'a>(sender: &Account, candidates: &'a [Account]) -> Option<&'a Account> {
    candidates.iter().find(|c| c.currency == sender.currency)
}

/// Resolve the recipient's account and submit the transaction.
///
/// Every failure is a 404 to the visitor and a warning in the log.
pub async fn execute_transfer(
    contract: &Contract,
    sender: &Account,
    form: &TransferForm,
) -> Result<(), AppError> {
    let recipient_email = form.recipient.trim();

    let candidates = contract
        .participant_accounts(recipient_email)
        .await
        .map_err(|e| {
            tracing::warn!(recipient = recipient_email, error = %e, "Failed to get recipient accounts");
            AppError::not_found()
        })?;

    let Some(recipient) = select_recipient_account(sender, &candidates) else {
        tracing::warn!(
            recipient = recipient_email,
            currency = %sender.currency,
            "Recipient has no account in the sender's currency"
        );
        return Err(AppError::not_found());
    };

    contract
        .transfer(&sender.id, &recipient.id, form.amount.trim())
        .await
        .map_err(|e| {
            tracing::warn!(
                from = %sender.id,
                to = %recipient.id,
                amount = %form.amount,
                error = %e,
                "Transfer failed"
            );
            AppError::not_found()
        })?;

    tracing::info!(
        from = %sender.id,
        to = %recipient.id,
        amount = %form.amount,
        "Transfer submitted"
    );
    Ok(())
}
