// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Router harness shared by the controller tests.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        HeaderMap, HeaderValue, Method, Request,
    },
    response::Response,
    Router,
};
use tower::ServiceExt;

use super::router;
use crate::{
    ledger::mock::MockLedger,
    render::Pages,
    session::{Session, SessionStore},
    state::AppState,
};

pub const TEST_SESSION_KEY: &[u8] = b"0123456789abcdef0123456789abcdef";

pub struct TestApp {
    pub ledger: Arc<MockLedger>,
    state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        let ledger = Arc::new(MockLedger::new());
        let state = AppState::new(
            ledger.clone(),
            SessionStore::new(TEST_SESSION_KEY.to_vec()),
            Pages::new().unwrap(),
        );
        Self { ledger, state }
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    pub fn router(&self) -> Router {
        router(self.state())
    }

    /// `Cookie` header value for `session`.
    pub fn session_cookie(&self, session: &Session) -> String {
        format!(
            "cookie-name={}",
            self.state.sessions.encode(session).unwrap()
        )
    }

    pub fn login_cookie(&self, email: &str) -> String {
        self.session_cookie(&Session {
            authenticated: true,
            email: email.to_string(),
        })
    }

    /// Session written by `response`, if it set one.
    pub fn saved_session(&self, response: &Response) -> Option<Session> {
        let set_cookie = response.headers().get(SET_COOKIE)?.to_str().ok()?;
        let pair = set_cookie.split(';').next()?;
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(pair).ok()?);
        Some(self.state.sessions.load(&headers))
    }

    /// Send a request; a `form` body is sent url-encoded.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        cookie: Option<&str>,
        form: Option<&str>,
    ) -> Response {
        match form {
            Some(body) => {
                self.request_with_type(
                    method,
                    path,
                    cookie,
                    "application/x-www-form-urlencoded",
                    body,
                )
                .await
            }
            None => self.send(method, path, cookie, None, Body::empty()).await,
        }
    }

    pub async fn request_with_type(
        &self,
        method: Method,
        path: &str,
        cookie: Option<&str>,
        content_type: &str,
        body: &str,
    ) -> Response {
        self.send(method, path, cookie, Some(content_type), Body::from(body.to_string()))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        cookie: Option<&str>,
        content_type: Option<&str>,
        body: Body,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        self.router()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }
}

pub fn location(response: &Response) -> Option<&str> {
    response.headers().get(LOCATION)?.to_str().ok()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Contract JSON for an account with a balance of 100.
pub fn account_json(id: &str, currency: &str, owner_email: &str) -> String {
    format!(
        r#"{{"id":"{id}","currency":"{currency}","balance":100,"ownerEmail":"{owner_email}"}}"#
    )
}
