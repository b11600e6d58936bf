// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Scripted in-memory ledger for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LedgerClient, LedgerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Evaluate,
    Submit,
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Call {
    pub kind: Kind,
    pub function: String,
    pub args: Vec<String>,
}

impl Call {
    pub fn evaluate(function: &str, args: &[&str]) -> Self {
        Self::new(Kind::Evaluate, function, args)
    }

    pub fn submit(function: &str, args: &[&str]) -> Self {
        Self::new(Kind::Submit, function, args)
    }

    fn new(kind: Kind, function: &str, args: &[&str]) -> Self {
        Self {
            kind,
            function: function.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Answers only what a test scripted; anything else is rejected like an
/// unknown key on a real contract.
#[derive(Default)]
pub struct MockLedger {
    responses: Mutex<HashMap<Call, Result<Vec<u8>, String>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_evaluate(&self, function: &str, args: &[&str], body: &str) {
        self.script(Call::evaluate(function, args), Ok(body.as_bytes().to_vec()));
    }

    pub fn on_submit(&self, function: &str, args: &[&str], body: &str) {
        self.script(Call::submit(function, args), Ok(body.as_bytes().to_vec()));
    }

    pub fn fail_evaluate(&self, function: &str, args: &[&str], message: &str) {
        self.script(Call::evaluate(function, args), Err(message.to_string()));
    }

    pub fn fail_submit(&self, function: &str, args: &[&str], message: &str) {
        self.script(Call::submit(function, args), Err(message.to_string()));
    }

    /// Every call in arrival order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submits(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.kind == Kind::Submit)
            .collect()
    }

    fn script(&self, call: Call, response: Result<Vec<u8>, String>) {
        self.responses.lock().unwrap().insert(call, response);
    }

    fn answer(&self, call: Call) -> Result<Vec<u8>, LedgerError> {
        self.calls.lock().unwrap().push(call.clone());
        let scripted = self.responses.lock().unwrap().get(&call).cloned();
        match scripted {
            Some(Ok(body)) => Ok(body),
            Some(Err(message)) => Err(LedgerError::Rejected {
                function: call.function,
                status: 500,
                message,
            }),
            None => Err(LedgerError::Rejected {
                function: call.function.clone(),
                status: 404,
                message: format!("no response scripted for {:?}", call),
            }),
        }
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn evaluate(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.answer(Call::evaluate(function, args))
    }

    async fn submit(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.answer(Call::submit(function, args))
    }
}
