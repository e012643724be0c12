use thiserror::Error;

use crate::version::number::VersionNumber;

/// Errors reported by version sources, the pair fetcher and the validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Local metadata is absent or lacks the version key
    #[error("Missing version id in local metadata")]
    MissingVersionId,

    /// A component of the local version string is not an integer
    #[error("Version string contains a component that is not a number")]
    MissingNumber,

    /// Remote payload (or a local metadata value) could not be decoded
    #[error("Invalid version data")]
    InvalidData,

    /// The remote version endpoint could not be reached
    #[error("No connection to the remote version service")]
    NoConnection,

    /// The device version is behind the online version
    #[error("Update required: device version {device} is behind online version {online}")]
    UpdateRequired {
        device: VersionNumber,
        online: VersionNumber,
    },
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
