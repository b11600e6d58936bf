// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger integration for the account-storage contract.
//!
//! This module provides:
//! - [`LedgerClient`], the two raw primitives (`evaluate` and `submit`)
//! - [`GatewayClient`], a `LedgerClient` speaking to a REST ledger gateway
//! - [`Contract`], typed wrappers for every contract operation the pages use

pub mod client;
pub mod contract;
pub mod error;
#[cfg(test)]
pub mod mock;

pub use client::{GatewayClient, LedgerClient};
pub use contract::Contract;
pub use error::LedgerError;
