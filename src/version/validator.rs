//! Update-required decision for the installed application

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ValidatorConfig;
use crate::version::error::{TransportError, VersionError};
use crate::version::fetcher::{VersionPair, VersionPairFetcher};
use crate::version::number::VersionNumberType;
use crate::version::source::VersionSource;
use crate::version::sources::RemoteVersionSource;
use crate::version::transport::ReqwestTransport;

/// Compares the device version against the online version
///
/// The comparison granularity is fixed at construction.
#[derive(Clone)]
pub struct AppVersionValidator {
    fetcher: VersionPairFetcher,
    version_number_type: VersionNumberType,
}

impl AppVersionValidator {
    pub fn new(fetcher: VersionPairFetcher, version_number_type: VersionNumberType) -> Self {
        Self {
            fetcher,
            version_number_type,
        }
    }

    /// Builds a validator fetching the online version over HTTP
    ///
    /// Returns `None` inside `Ok` when the config has no remote URL.
    pub fn from_config(
        config: &ValidatorConfig,
        local: Arc<dyn VersionSource>,
    ) -> Result<Option<Self>, TransportError> {
        let Some(url) = config.remote_url.as_deref() else {
            return Ok(None);
        };

        let transport = ReqwestTransport::new(Duration::from_millis(config.timeout_ms))?;
        let remote = RemoteVersionSource::new(url, Arc::new(transport));

        Ok(Some(Self::new(
            VersionPairFetcher::new(local, Arc::new(remote)),
            config.version_number_type,
        )))
    }

    pub fn version_number_type(&self) -> VersionNumberType {
        self.version_number_type
    }

    /// Checks whether the application must be updated
    ///
    /// # Returns
    /// * `Ok(())` - The device version is up to date
    /// * `Err(VersionError::UpdateRequired { .. })` - The device version is behind
    /// * `Err(_)` - Any other error is the upstream fetch failure, unchanged
    pub async fn check_app_version(&self) -> Result<(), VersionError> {
        check_pair(&self.fetcher, self.version_number_type).await
    }

    /// Runs the check on the tokio runtime
    ///
    /// The task owns a clone of the fetcher and the policy, so the validator
    /// can be dropped while the check is still running.
    pub fn spawn_check(&self) -> JoinHandle<Result<(), VersionError>> {
        let fetcher = self.fetcher.clone();
        let version_number_type = self.version_number_type;

        tokio::spawn(async move { check_pair(&fetcher, version_number_type).await })
    }
}

async fn check_pair(
    fetcher: &VersionPairFetcher,
    version_number_type: VersionNumberType,
) -> Result<(), VersionError> {
    let VersionPair { device, online } = fetcher.fetch_pair().await?;

    if version_number_type.update_required(&device, &online) {
        info!(
            "Update required ({} policy): device {} < online {}",
            version_number_type, device, online
        );
        return Err(VersionError::UpdateRequired { device, online });
    }

    info!(
        "Device version {} is up to date with {} ({} policy)",
        device, online, version_number_type
    );
    Ok(())
}
