// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Cookie Sessions
//!
//! The whole session lives in one signed cookie; there is no server-side
//! session table.
//!
//! ## Cookie Format
//!
//! ```text
//! cookie-name=<base64url(json session)>.<base64url(HMAC-SHA256(key, payload))>
//! ```
//!
//! A missing, tampered or undecodable cookie reads as an empty session.
//! Rotating the key therefore logs everybody out.

pub mod extractor;

pub use extractor::RequireLogin;

use std::sync::Arc;

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};
use base64ct::{Base64UrlUnpadded, Encoding};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "cookie-name";

/// Client-held authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub email: String,
}

impl Session {
    /// Authenticated with a usable identity.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated && !self.email.is_empty()
    }

    /// Revoke authentication. The email is kept.
    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

/// Signs and verifies session cookies with a process-wide key.
#[derive(Clone)]
pub struct SessionStore {
    key: Arc<[u8]>,
}

impl SessionStore {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        let key: Vec<u8> = key.into();
        Self {
            key: Arc::from(key),
        }
    }

    /// A store with a fresh 32-byte key; its cookies die with the process.
    pub fn random() -> Self {
        let mut key = Vec::with_capacity(32);
        key.extend_from_slice(Uuid::new_v4().as_bytes());
        key.extend_from_slice(Uuid::new_v4().as_bytes());
        Self::new(key)
    }

    /// Read the session from request headers. Never fails.
    pub fn load(&self, headers: &HeaderMap) -> Session {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .filter(|(name, _)| *name == SESSION_COOKIE)
            .find_map(|(_, value)| self.decode(value))
            .unwrap_or_default()
    }

    /// `Set-Cookie` value carrying `session`.
    pub fn save(&self, session: &Session) -> Result<HeaderValue, SessionError> {
        let value = self.encode(session)?;
        HeaderValue::from_str(&format!(
            "{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax"
        ))
        .map_err(SessionError::Header)
    }

    pub fn encode(&self, session: &Session) -> Result<String, SessionError> {
        let json = serde_json::to_vec(session).map_err(SessionError::Serialize)?;
        let payload = Base64UrlUnpadded::encode_string(&json);
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = Base64UrlUnpadded::encode_string(&mac.finalize().into_bytes());
        Ok(format!("{payload}.{signature}"))
    }

    pub fn decode(&self, value: &str) -> Option<Session> {
        let (payload, signature) = value.split_once('.')?;
        let signature = Base64UrlUnpadded::decode_vec(signature).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let json = Base64UrlUnpadded::decode_vec(payload).ok()?;
        serde_json::from_slice(&json).ok()
    }

    fn mac(&self) -> Result<HmacSha256, SessionError> {
        HmacSha256::new_from_slice(&self.key).map_err(|_| SessionError::Key)
    }
}

/// Errors raised while writing a session cookie.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session signing key rejected")]
    Key,

    #[error("Failed to serialize session: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Session cookie is not a valid header value: {0}")]
    Header(#[source] InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(b"0123456789abcdef0123456789abcdef".to_vec())
    }

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    fn cookie_pair(set_cookie: &HeaderValue) -> String {
        set_cookie
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    #[test]
    fn saved_session_reads_back_identically() {
        let store = store();
        let session = Session {
            authenticated: true,
            email: "a@b.com".into(),
        };

        let set_cookie = store.save(&session).unwrap();
        let headers = headers_with_cookie(&cookie_pair(&set_cookie));

        assert_eq!(store.load(&headers), session);
    }

    #[test]
    fn set_cookie_carries_name_and_attributes() {
        let set_cookie = store().save(&Session::default()).unwrap();
        let text = set_cookie.to_str().unwrap();
        assert!(text.starts_with("cookie-name="));
        assert!(text.ends_with("; Path=/; HttpOnly; SameSite=Lax"));
    }

    #[test]
    fn missing_cookie_is_empty_session() {
        assert_eq!(store().load(&HeaderMap::new()), Session::default());
    }

    #[test]
    fn session_cookie_is_found_among_others() {
        let store = store();
        let session = Session {
            authenticated: true,
            email: "x@y.org".into(),
        };
        let value = store.encode(&session).unwrap();
        let headers = headers_with_cookie(&format!("theme=dark; cookie-name={value}; lang=en"));
        assert_eq!(store.load(&headers), session);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let store = store();
        let genuine = store
            .encode(&Session {
                authenticated: false,
                email: "a@b.com".into(),
            })
            .unwrap();
        let (_, signature) = genuine.split_once('.').unwrap();

        let forged_json = br#"{"authenticated":true,"email":"a@b.com"}"#;
        let forged = format!(
            "{}.{}",
            Base64UrlUnpadded::encode_string(forged_json),
            signature
        );

        assert_eq!(store.decode(&forged), None);
        let headers = headers_with_cookie(&format!("cookie-name={forged}"));
        assert!(!store.load(&headers).authenticated);
    }

    #[test]
    fn other_key_cannot_read_session() {
        let value = store()
            .encode(&Session {
                authenticated: true,
                email: "a@b.com".into(),
            })
            .unwrap();
        let rotated = SessionStore::new(b"another-key-another-key-another-!".to_vec());
        assert_eq!(rotated.decode(&value), None);
    }

    #[test]
    fn garbage_cookie_is_empty_session() {
        let store = store();
        for garbage in ["", "no-dot", "a.b", "!!!.???", "e30.e30"] {
            let headers = headers_with_cookie(&format!("cookie-name={garbage}"));
            assert_eq!(store.load(&headers), Session::default(), "{garbage}");
        }
    }

    #[test]
    fn random_stores_do_not_share_keys() {
        let session = Session {
            authenticated: true,
            email: "a@b.com".into(),
        };
        let value = SessionStore::random().encode(&session).unwrap();
        assert_eq!(SessionStore::random().decode(&value), None);
    }

    #[test]
    fn authenticated_requires_an_email() {
        let mut session = Session {
            authenticated: true,
            email: String::new(),
        };
        assert!(!session.is_authenticated());

        session.email = "a@b.com".into();
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.email, "a@b.com");
    }
}
