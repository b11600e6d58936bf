// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTML page rendering.
//!
//! The five page templates are compiled into the binary and parsed once at
//! startup. A page is rendered into a `String` before anything is written to
//! the response, so a failing template never leaves half a page behind.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::{error::AppError, ledger::LedgerError, models::Account};

/// The named page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Main,
    Login,
    Account,
    History,
    Transfer,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Main,
        Template::Login,
        Template::Account,
        Template::History,
        Template::Transfer,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Template::Main => "main.html",
            Template::Login => "login.html",
            Template::Account => "account.html",
            Template::History => "history.html",
            Template::Transfer => "transfer.html",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Template::Main => include_str!("../templates/main.html"),
            Template::Login => include_str!("../templates/login.html"),
            Template::Account => include_str!("../templates/account.html"),
            Template::History => include_str!("../templates/history.html"),
            Template::Transfer => include_str!("../templates/transfer.html"),
        }
    }
}

/// Per-request page model.
///
/// `rows` keeps the outcome of the ledger query that produced them, so an
/// empty list and a failed query stay distinguishable; templates see an
/// empty list in both cases.
#[derive(Debug)]
pub struct Page<R> {
    pub title: String,
    pub account: Option<Account>,
    pub rows: Result<Vec<R>, LedgerError>,
}

impl<R> Page<R> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            account: None,
            rows: Ok(Vec::new()),
        }
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_rows(mut self, rows: Result<Vec<R>, LedgerError>) -> Self {
        self.rows = rows;
        self
    }

    /// Rows as shown to the template.
    pub fn visible_rows(&self) -> &[R] {
        self.rows.as_deref().unwrap_or(&[])
    }
}

#[derive(Serialize)]
struct PageContext<'a, R> {
    title: &'a str,
    account: Option<&'a Account>,
    rows: &'a [R],
}

/// The parsed template set.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Parse the built-in templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        Self::from_sources(Template::ALL.map(|t| (t, t.source())))
    }

    pub(crate) fn from_sources(
        sources: impl IntoIterator<Item = (Template, &'static str)>,
    ) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (template, source) in sources {
            env.add_template(template.file_name(), source)?;
        }
        Ok(Self { env })
    }

    /// Render `page` with `template`; any template failure is a 500.
    pub fn render<R: Serialize>(&self, template: Template, page: &Page<R>) -> Result<Html<String>, AppError> {
        let context = PageContext {
            title: &page.title,
            account: page.account.as_ref(),
            rows: page.visible_rows(),
        };

        self.env
            .get_template(template.file_name())
            .and_then(|tmpl| tmpl.render(&context))
            .map(Html)
            .map_err(|e| {
                tracing::error!(template = template.file_name(), error = %e, "Failed to render page");
                AppError::internal(e.to_string())
            })
    }
}
