// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

/// Errors that can occur while talking to the contract.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Gateway unreachable: {0}")]
    Transport(String),

    #[error("Contract rejected {function} (HTTP {status}): {message}")]
    Rejected {
        function: String,
        status: u16,
        message: String,
    },

    #[error("Failed to decode {function} result: {source}")]
    Decode {
        function: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected {function} result: {body}")]
    UnexpectedResponse { function: &'static str, body: String },
}
