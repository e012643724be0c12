//! Transport abstraction for issuing GET requests

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::config::USER_AGENT;
use crate::version::error::TransportError;

/// Status code and body of a completed GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Capability to issue a GET request and return the response bytes
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single GET request
    ///
    /// # Returns
    /// * `Ok(TransportResponse)` - The server answered, whatever the status
    /// * `Err(TransportError)` - The server could not be reached (including timeouts)
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Transport backed by `reqwest`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests fail after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
