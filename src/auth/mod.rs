// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Participant Authentication
//!
//! Login and registration share one form. The flow against the contract:
//!
//! 1. `ParticipantExists(email)`
//! 2. Unknown email: `CreateParticipant(email, ...)`; success logs the
//!    participant in
//! 3. Known email: `ReadParticipant(email)` and compare the password digest
//!
//! The outcome decides what is written into the session cookie.

pub mod password;

pub use password::{hash_password, verify_password};

use crate::{
    ledger::{Contract, LedgerError},
    models::LoginForm,
    session::Session,
};

/// Result of one `/auth` submission.
#[derive(Debug)]
pub enum AuthOutcome {
    /// New participant created and logged in.
    Registered,
    /// Existing participant, password matched.
    LoggedIn,
    /// Existing participant, password did not match.
    WrongPassword,
    /// No email submitted; the ledger was not consulted.
    MissingEmail,
    /// `ParticipantExists` failed.
    LookupFailed(LedgerError),
    /// `CreateParticipant` failed.
    RegistrationFailed(LedgerError),
    /// `ReadParticipant` failed.
    ReadFailed(LedgerError),
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Registered | AuthOutcome::LoggedIn)
    }

    /// Whether the participant was resolved far enough to remember the email.
    fn identifies_participant(&self) -> bool {
        matches!(
            self,
            AuthOutcome::Registered
                | AuthOutcome::LoggedIn
                | AuthOutcome::WrongPassword
                | AuthOutcome::RegistrationFailed(_)
        )
    }

    /// Write the outcome into `session`. Anything but success leaves it
    /// unauthenticated.
    pub fn apply(&self, session: &mut Session, email: &str) {
        session.authenticated = self.is_authenticated();
        if self.identifies_participant() {
            session.email = email.to_string();
        }
    }
}

/// Log in or register the participant named in `form`.
pub async fn authenticate(contract: &Contract, form: &LoginForm) -> AuthOutcome {
    let email = form.email.trim();
    if email.is_empty() {
        return AuthOutcome::MissingEmail;
    }

    let exists = match contract.participant_exists(email).await {
        Ok(exists) => exists,
        Err(e) => return AuthOutcome::LookupFailed(e),
    };

    if !exists {
        return match contract.create_participant(email, &form.password).await {
            Ok(()) => AuthOutcome::Registered,
            Err(e) => AuthOutcome::RegistrationFailed(e),
        };
    }

    match contract.read_participant(email).await {
        Ok(participant) if verify_password(&form.password, &participant.password_hash) => {
            AuthOutcome::LoggedIn
        }
        Ok(_) => AuthOutcome::WrongPassword,
        Err(e) => AuthOutcome::ReadFailed(e),
    }
}
