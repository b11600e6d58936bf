// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup and handed to the router state; nothing reads the
//! environment after that.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `9090` |
//! | `SESSION_KEY` | Cookie signing key (at least 32 bytes) | Random per process |
//! | `LEDGER_GATEWAY_URL` | Base URL of the ledger gateway | `http://localhost:3000` |
//! | `LEDGER_NETWORK` | Ledger network (channel) name | `test1` |
//! | `LEDGER_CONTRACT` | Contract (chaincode) name | `test1` |
//! | `LEDGER_IDENTITY` | Wallet identity label used by the gateway | `appUser` |
//! | `LEDGER_API_KEY` | Gateway API key | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{env, net::SocketAddr};

use url::Url;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const SESSION_KEY_ENV: &str = "SESSION_KEY";
pub const LEDGER_GATEWAY_URL_ENV: &str = "LEDGER_GATEWAY_URL";
pub const LEDGER_NETWORK_ENV: &str = "LEDGER_NETWORK";
pub const LEDGER_CONTRACT_ENV: &str = "LEDGER_CONTRACT";
pub const LEDGER_IDENTITY_ENV: &str = "LEDGER_IDENTITY";
pub const LEDGER_API_KEY_ENV: &str = "LEDGER_API_KEY";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9090;
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";
pub const DEFAULT_NETWORK: &str = "test1";
pub const DEFAULT_CONTRACT: &str = "test1";
pub const DEFAULT_IDENTITY: &str = "appUser";

/// Default `RUST_LOG` filter when the variable is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Shortest accepted `SESSION_KEY`, in bytes.
pub const MIN_SESSION_KEY_LEN: usize = 32;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Where and as whom the contract is reached.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub gateway_url: Url,
    pub network: String,
    pub contract: String,
    pub identity: String,
    pub api_key: Option<String>,
}

/// Complete process configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` means a random key is generated when the server starts.
    pub session_key: Option<Vec<u8>>,
    pub ledger: LedgerConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let session_key = match lookup(SESSION_KEY_ENV) {
            Some(key) if key.len() < MIN_SESSION_KEY_LEN => {
                return Err(ConfigError::SessionKeyTooShort {
                    actual: key.len(),
                    minimum: MIN_SESSION_KEY_LEN,
                })
            }
            Some(key) => Some(key.into_bytes()),
            None => None,
        };

        let raw_url =
            lookup(LEDGER_GATEWAY_URL_ENV).unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        let gateway_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidGatewayUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;

        let ledger = LedgerConfig {
            gateway_url,
            network: lookup(LEDGER_NETWORK_ENV).unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
            contract: lookup(LEDGER_CONTRACT_ENV).unwrap_or_else(|| DEFAULT_CONTRACT.to_string()),
            identity: lookup(LEDGER_IDENTITY_ENV).unwrap_or_else(|| DEFAULT_IDENTITY.to_string()),
            api_key: lookup(LEDGER_API_KEY_ENV).filter(|k| !k.is_empty()),
        };

        let log_format = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => LogFormat::parse(&raw)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            session_key,
            ledger,
            log_format,
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(format!("{}:{}", self.host, self.port)))
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("SESSION_KEY is {actual} bytes, need at least {minimum}")]
    SessionKeyTooShort { actual: usize, minimum: usize },

    #[error("Invalid ledger gateway URL {url}: {reason}")]
    InvalidGatewayUrl { url: String, reason: String },

    #[error("Invalid LOG_FORMAT: {0} (expected 'json' or 'pretty')")]
    InvalidLogFormat(String),
}
