// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Data Models
//!
//! Records owned by the account-storage contract and the HTML form payloads
//! posted by the browser. Contract records use camelCase on the wire.
//!
//! ## Model Categories
//!
//! - **Ledger records**: [`Account`], [`Participant`], history rows
//! - **Forms**: login, account creation and transfer submissions

use serde::{Deserialize, Serialize};

// =============================================================================
// Ledger Records
// =============================================================================

/// A currency-denominated balance owned by a participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(alias = "ID")]
    pub id: String,
    pub currency: String,
    /// The contract's JSON number. Integers stay exact; decimals go through
    /// `f64`, so `100.50` displays as `100.5`.
    pub balance: serde_json::Number,
    #[serde(alias = "owner")]
    pub owner_email: String,
}

impl Account {
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email == email
    }
}

/// A registered identity on the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub phone: String,
    /// Never rendered; templates only see [`ParticipantView`].
    #[serde(alias = "passwd", skip_serializing)]
    pub password_hash: String,
}

/// What a page is allowed to show about another participant.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParticipantView {
    pub email: String,
    pub name: String,
    pub surname: String,
}

impl From<Participant> for ParticipantView {
    fn from(participant: Participant) -> Self {
        Self {
            email: participant.email,
            name: participant.name,
            surname: participant.surname,
        }
    }
}

/// One entry of an account's history, passed through to the template as-is.
pub type HistoryRecord = serde_json::Value;

// =============================================================================
// Form Payloads
// =============================================================================

/// Credentials posted to `/auth`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Posted to `/account` to open a new account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAccountForm {
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub balance: String,
}

/// Posted to `/transfer/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferForm {
    /// Recipient participant's email.
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub amount: String,
}
