//! Sequential fetch of the online and device versions

use std::sync::Arc;

use tracing::debug;

use crate::version::error::VersionError;
use crate::version::number::VersionNumber;
use crate::version::source::VersionSource;

/// Device and online versions fetched for one validation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPair {
    pub device: VersionNumber,
    pub online: VersionNumber,
}

/// Fetches the online version, then the device version
///
/// The first failure is returned as-is and the remaining source is not
/// queried.
#[derive(Clone)]
pub struct VersionPairFetcher {
    local: Arc<dyn VersionSource>,
    remote: Arc<dyn VersionSource>,
}

impl VersionPairFetcher {
    pub fn new(local: Arc<dyn VersionSource>, remote: Arc<dyn VersionSource>) -> Self {
        Self { local, remote }
    }

    pub async fn fetch_pair(&self) -> Result<VersionPair, VersionError> {
        let online = self.remote.fetch().await?;
        debug!("Online version: {}", online);

        let device = self.local.fetch().await?;
        debug!("Device version: {}", device);

        Ok(VersionPair { device, online })
    }
}
