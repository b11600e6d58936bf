// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::{
    ledger::{Contract, LedgerClient},
    render::Pages,
    session::SessionStore,
};

/// Everything a controller needs, fixed at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub contract: Contract,
    pub sessions: SessionStore,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(client: Arc<dyn LedgerClient>, sessions: SessionStore, pages: Pages) -> Self {
        Self {
            contract: Contract::new(client),
            sessions,
            pages: Arc::new(pages),
        }
    }
}
