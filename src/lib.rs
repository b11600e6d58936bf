// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account Storage Web - HTML front-end for the account-storage contract
//!
//! Participants log in, open accounts, browse account history and send
//! transfers. Every durable fact lives on the ledger; this crate routes
//! requests, gates them on a signed session cookie, turns form input into
//! contract calls and renders the answers.
//!
//! ## Modules
//!
//! - `api` - Routes and page controllers (Axum)
//! - `auth` - Login / registration flow and password digests
//! - `ledger` - Ledger client primitives and typed contract operations
//! - `render` - Page models and HTML templates
//! - `session` - Signed cookie sessions

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod render;
pub mod session;
pub mod state;
