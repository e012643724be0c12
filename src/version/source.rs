//! Version source trait for fetching a single version number

#[cfg(test)]
use mockall::automock;

use crate::version::error::VersionError;
use crate::version::number::VersionNumber;

/// Trait for fetching one version number from a local or remote source
///
/// Each call resolves exactly once; dropping the future before it resolves
/// discards the result.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the version number
    ///
    /// # Returns
    /// * `Ok(VersionNumber)` - The parsed or decoded version
    /// * `Err(VersionError)` - Why the version could not be obtained
    async fn fetch(&self) -> Result<VersionNumber, VersionError>;
}
