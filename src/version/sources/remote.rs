//! Remote endpoint version source

use std::sync::Arc;

use tracing::{debug, warn};

use crate::version::decoder::decode_response;
use crate::version::error::VersionError;
use crate::version::number::VersionNumber;
use crate::version::source::VersionSource;
use crate::version::transport::Transport;

/// Version source fetching the latest published version over HTTP
#[derive(Clone)]
pub struct RemoteVersionSource {
    url: String,
    transport: Arc<dyn Transport>,
}

impl RemoteVersionSource {
    /// Creates a source for `url`; no request is made until `fetch` is awaited
    pub fn new(url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            url: url.to_string(),
            transport,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl VersionSource for RemoteVersionSource {
    async fn fetch(&self) -> Result<VersionNumber, VersionError> {
        debug!("Fetching online version from {}", self.url);

        let response = self.transport.get(&self.url).await.map_err(|e| {
            warn!("Failed to reach version endpoint {}: {}", self.url, e);
            VersionError::NoConnection
        })?;

        decode_response(&response)
    }
}
