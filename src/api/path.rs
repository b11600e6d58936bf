// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account identifier path parameter.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// Account id taken from `/history/{id}` or `/transfer/{id}`.
///
/// Only `[a-zA-Z0-9-]+` is accepted; anything else is a 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
        valid.then(|| AccountId(raw.to_string()))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AccountId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found())?;

        AccountId::parse(&raw).ok_or_else(|| {
            tracing::debug!(account_id = %raw, "Rejected malformed account id");
            AppError::not_found()
        })
    }
}
