// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Raw ledger primitives and the REST gateway client.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use super::LedgerError;
use crate::config::LedgerConfig;

/// Header carrying the wallet identity label the gateway signs with.
pub const IDENTITY_HEADER: &str = "x-identity";
/// Header carrying the optional gateway API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The two primitives the contract exposes.
///
/// `evaluate` runs a read-only query on a peer; `submit` orders a
/// state-changing transaction and waits for it to commit. Both return the
/// contract's raw response bytes.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn evaluate(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError>;

    async fn submit(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError>;
}

/// Request body accepted by the gateway.
#[derive(Debug, Serialize)]
struct Invocation<'a> {
    function: &'a str,
    args: &'a [&'a str],
}

/// Ledger client backed by a REST gateway in front of the network.
///
/// The gateway owns the wallet and the connection profile; this client only
/// names the identity it wants to act as.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    evaluate_url: Url,
    submit_url: Url,
    identity: String,
    api_key: Option<String>,
}

impl GatewayClient {
    /// Create a client for the network and contract named in `config`.
    ///
    /// No timeout is set: a page waits as long as the ledger does.
    pub fn new(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            evaluate_url: endpoint(config, "evaluate")?,
            submit_url: endpoint(config, "submit")?,
            identity: config.identity.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn invoke(&self, url: &Url, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        let mut request = self
            .http
            .post(url.clone())
            .header(IDENTITY_HEADER, &self.identity)
            .json(&Invocation { function, args });

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(LedgerError::Rejected {
                function: function.to_string(),
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl LedgerClient for GatewayClient {
    async fn evaluate(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.invoke(&self.evaluate_url, function, args).await
    }

    async fn submit(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.invoke(&self.submit_url, function, args).await
    }
}

/// `{gateway}/networks/{network}/contracts/{contract}/{action}`
fn endpoint(config: &LedgerConfig, action: &str) -> Result<Url, LedgerError> {
    let mut url = config.gateway_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            LedgerError::Transport(format!(
                "gateway URL cannot be a base: {}",
                config.gateway_url
            ))
        })?
        .pop_if_empty()
        .extend([
            "networks",
            config.network.as_str(),
            "contracts",
            config.contract.as_str(),
            action,
        ]);
    Ok(url)
}
