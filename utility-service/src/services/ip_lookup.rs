//! Public IP lookup through an IP-echo service.
//!
//! The lookup is a single GET whose body is returned as-is. There is no
//! caching and no retry, and unless `ip_lookup.timeout_ms` is configured the
//! request has no timeout either.

use crate::config::IpLookupConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpLookupError {
    /// Connection, timeout or body read failure, passed through untouched.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("IP service responded with {0}")]
    Status(StatusCode),
}

#[async_trait]
pub trait IpLookup: Send + Sync {
    async fn current_ip(&self) -> Result<String, IpLookupError>;
}

/// [`IpLookup`] backed by ipify (or any service answering GET with the
/// caller's address as plain text).
#[derive(Clone)]
pub struct IpifyClient {
    client: Client,
    endpoint: String,
}

impl IpifyClient {
    pub fn new(config: &IpLookupConfig) -> Result<Self, IpLookupError> {
        let mut builder = Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IpLookup for IpifyClient {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn current_ip(&self) -> Result<String, IpLookupError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IpLookupError::Status(status));
        }

        Ok(response.text().await?)
    }
}
