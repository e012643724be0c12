//! Remote version payload decoding

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::version::error::VersionError;
use crate::version::number::VersionNumber;
use crate::version::transport::TransportResponse;

const OK_200: u16 = 200;

/// Response body of the remote version endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteVersionNumber {
    major_num: u64,
    minor_num: u64,
    patch_num: u64,
}

/// Decode a JSON object with required `majorNum`, `minorNum` and `patchNum` fields
///
/// Only an object is accepted; a positional array such as `[4, 0, 5]` is
/// `InvalidData` even though it has three integers.
pub fn decode_remote_version(payload: &[u8]) -> Result<VersionNumber, VersionError> {
    let value: Value = serde_json::from_slice(payload).map_err(|e| {
        warn!("Failed to parse remote version payload: {}", e);
        VersionError::InvalidData
    })?;

    if !value.is_object() {
        warn!("Remote version payload is not a JSON object");
        return Err(VersionError::InvalidData);
    }

    let remote = RemoteVersionNumber::deserialize(value).map_err(|e| {
        warn!("Remote version payload has invalid fields: {}", e);
        VersionError::InvalidData
    })?;

    Ok(VersionNumber::new(
        remote.major_num,
        remote.minor_num,
        remote.patch_num,
    ))
}

/// Decode a transport response, rejecting anything but HTTP 200
pub fn decode_response(response: &TransportResponse) -> Result<VersionNumber, VersionError> {
    if response.status != OK_200 {
        warn!("Remote version endpoint returned status {}", response.status);
        return Err(VersionError::InvalidData);
    }

    decode_remote_version(&response.body)
}
