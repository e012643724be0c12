//! Transport test utilities

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use app_version_validator::version::{Transport, TransportError, TransportResponse};

/// Transport answering every request with a canned response
pub struct StubTransport {
    response: Result<TransportResponse, String>,
    requested_urls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(TransportResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            requested_urls: Mutex::new(Vec::new()),
        })
    }

    pub fn offline() -> Arc<Self> {
        Arc::new(Self {
            response: Err("connection refused".to_string()),
            requested_urls: Mutex::new(Vec::new()),
        })
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        self.response.clone().map_err(TransportError::Other)
    }
}
