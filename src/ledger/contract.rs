// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Typed wrappers for the account-storage contract.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{LedgerClient, LedgerError};
use crate::models::{Account, HistoryRecord, Participant};

/// Contract function names.
pub mod functions {
    pub const READ_ACCOUNT: &str = "ReadAccount";
    pub const GET_ACCOUNT_HISTORY: &str = "GetAccountHistory";
    pub const GET_ALL_PARTICIPANTS: &str = "GetAllParticipants";
    pub const GET_PARTICIPANT_ACCOUNTS: &str = "GetParticipantAccounts";
    pub const PARTICIPANT_EXISTS: &str = "ParticipantExists";
    pub const READ_PARTICIPANT: &str = "ReadParticipant";
    pub const CREATE_PARTICIPANT: &str = "CreateParticipant";
    pub const CREATE_ACCOUNT: &str = "CreateAccount";
    pub const TRANSACTION: &str = "Transaction";
}

use functions::*;

/// Profile fields given to participants registered through the login form.
pub const PLACEHOLDER_NAME: &str = "name";
pub const PLACEHOLDER_SURNAME: &str = "surname";
pub const PLACEHOLDER_PHONE: &str = "+79999999999";

/// Handle on the deployed contract.
///
/// Cloning is cheap; all clones share one [`LedgerClient`].
#[derive(Clone)]
pub struct Contract {
    client: Arc<dyn LedgerClient>,
}

impl Contract {
    pub fn new(client: Arc<dyn LedgerClient>) -> Self {
        Self { client }
    }

    pub async fn read_account(&self, id: &str) -> Result<Account, LedgerError> {
        self.query(READ_ACCOUNT, &[id]).await
    }

    pub async fn account_history(&self, id: &str) -> Result<Vec<HistoryRecord>, LedgerError> {
        self.query_list(GET_ACCOUNT_HISTORY, &[id]).await
    }

    pub async fn all_participants(&self) -> Result<Vec<Participant>, LedgerError> {
        self.query_list(GET_ALL_PARTICIPANTS, &[]).await
    }

    pub async fn participant_accounts(&self, email: &str) -> Result<Vec<Account>, LedgerError> {
        self.query_list(GET_PARTICIPANT_ACCOUNTS, &[email]).await
    }

    /// The contract answers with a bare `true` or `false`.
    pub async fn participant_exists(&self, email: &str) -> Result<bool, LedgerError> {
        let raw = self.client.evaluate(PARTICIPANT_EXISTS, &[email]).await?;
        match String::from_utf8_lossy(&raw).trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(LedgerError::UnexpectedResponse {
                function: PARTICIPANT_EXISTS,
                body: other.to_string(),
            }),
        }
    }

    pub async fn read_participant(&self, email: &str) -> Result<Participant, LedgerError> {
        self.query(READ_PARTICIPANT, &[email]).await
    }

    /// Register a participant; the contract stores the password digest itself.
    pub async fn create_participant(&self, email: &str, password: &str) -> Result<(), LedgerError> {
        self.client
            .submit(
                CREATE_PARTICIPANT,
                &[
                    email,
                    PLACEHOLDER_NAME,
                    PLACEHOLDER_SURNAME,
                    PLACEHOLDER_PHONE,
                    password,
                ],
            )
            .await
            .map(|_| ())
    }

    pub async fn create_account(
        &self,
        id: &str,
        currency: &str,
        balance: &str,
        owner_email: &str,
    ) -> Result<(), LedgerError> {
        self.client
            .submit(CREATE_ACCOUNT, &[id, currency, balance, owner_email])
            .await
            .map(|_| ())
    }

    /// Move `amount` from one account to another of the same currency.
    pub async fn transfer(&self, from_id: &str, to_id: &str, amount: &str) -> Result<(), LedgerError> {
        self.client
            .submit(TRANSACTION, &[from_id, to_id, amount])
            .await
            .map(|_| ())
    }

    /// Cheapest read that proves the gateway and contract are answering.
    pub async fn ping(&self) -> Result<(), LedgerError> {
        self.client
            .evaluate(GET_ALL_PARTICIPANTS, &[])
            .await
            .map(|_| ())
    }

    async fn query<T: DeserializeOwned>(
        &self,
        function: &'static str,
        args: &[&str],
    ) -> Result<T, LedgerError> {
        let raw = self.client.evaluate(function, args).await?;
        serde_json::from_slice(&raw).map_err(|source| LedgerError::Decode { function, source })
    }

    /// Like [`Contract::query`], but an empty body or JSON `null` is an empty list.
    async fn query_list<T: DeserializeOwned>(
        &self,
        function: &'static str,
        args: &[&str],
    ) -> Result<Vec<T>, LedgerError> {
        let raw = self.client.evaluate(function, args).await?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let rows: Option<Vec<T>> = serde_json::from_slice(&raw)
            .map_err(|source| LedgerError::Decode { function, source })?;
        Ok(rows.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::mock::{Call, MockLedger};

    fn contract(mock: &Arc<MockLedger>) -> Contract {
        Contract::new(mock.clone())
    }

    #[tokio::test]
    async fn read_account_decodes_result() {
        let mock = Arc::new(MockLedger::new());
        mock.on_evaluate(
            READ_ACCOUNT,
            &["acc-1"],
            r#"{"id":"acc-1","currency":"EUR","balance":7,"ownerEmail":"a@b.com"}"#,
        );

        let account = contract(&mock).read_account("acc-1").await.unwrap();
        assert_eq!(account.currency, "EUR");
        assert_eq!(mock.calls(), vec![Call::evaluate(READ_ACCOUNT, &["acc-1"])]);
    }

    #[tokio::test]
    async fn malformed_result_is_a_decode_error() {
        let mock = Arc::new(MockLedger::new());
        mock.on_evaluate(READ_ACCOUNT, &["acc-1"], "not json");

        let err = contract(&mock).read_account("acc-1").await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Decode {
                function: READ_ACCOUNT,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn null_or_empty_lists_decode_as_empty() {
        let mock = Arc::new(MockLedger::new());
        mock.on_evaluate(GET_PARTICIPANT_ACCOUNTS, &["a@b.com"], "null");
        mock.on_evaluate(GET_ACCOUNT_HISTORY, &["acc-1"], "");

        let contract = contract(&mock);
        assert!(contract.participant_accounts("a@b.com").await.unwrap().is_empty());
        assert!(contract.account_history("acc-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn participant_exists_parses_boolean_text() {
        let mock = Arc::new(MockLedger::new());
        mock.on_evaluate(PARTICIPANT_EXISTS, &["yes@b.com"], "true");
        mock.on_evaluate(PARTICIPANT_EXISTS, &["no@b.com"], "false\n");
        mock.on_evaluate(PARTICIPANT_EXISTS, &["odd@b.com"], "maybe");

        let contract = contract(&mock);
        assert!(contract.participant_exists("yes@b.com").await.unwrap());
        assert!(!contract.participant_exists("no@b.com").await.unwrap());
        assert!(matches!(
            contract.participant_exists("odd@b.com").await,
            Err(LedgerError::UnexpectedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn create_participant_sends_placeholder_profile() {
        let mock = Arc::new(MockLedger::new());
        mock.on_submit(CREATE_PARTICIPANT, &["a@b.com", "name", "surname", "+79999999999", "pw"], "");

        contract(&mock)
            .create_participant("a@b.com", "pw")
            .await
            .unwrap();

        assert_eq!(
            mock.submits(),
            vec![Call::submit(
                CREATE_PARTICIPANT,
                &["a@b.com", "name", "surname", "+79999999999", "pw"]
            )]
        );
    }

    #[tokio::test]
    async fn unscripted_call_is_rejected() {
        let mock = Arc::new(MockLedger::new());
        let err = contract(&mock).transfer("a", "b", "1").await.unwrap_err();
        assert!(matches!(err, LedgerError::Rejected { .. }));
        assert_eq!(mock.submits().len(), 1);
    }
}
