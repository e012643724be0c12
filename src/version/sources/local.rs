//! Device metadata version source

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DEFAULT_VERSION_KEY;
use crate::version::error::VersionError;
use crate::version::number::VersionNumber;
use crate::version::parser::parse_device_version;
use crate::version::source::VersionSource;

/// Key-value metadata describing the installed application
pub type Metadata = serde_json::Map<String, Value>;

/// Version source reading the device version from local metadata
#[derive(Debug, Clone)]
pub struct LocalVersionSource {
    metadata: Option<Metadata>,
    version_key: String,
}

impl LocalVersionSource {
    /// Creates a source over the given metadata (`None` when no metadata is available)
    pub fn new(metadata: Option<Metadata>) -> Self {
        Self {
            metadata,
            version_key: DEFAULT_VERSION_KEY.to_string(),
        }
    }

    /// Creates a source whose metadata holds only the given version string
    pub fn from_version_string(version: &str) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(
            DEFAULT_VERSION_KEY.to_string(),
            Value::String(version.to_string()),
        );
        Self::new(Some(metadata))
    }

    /// Creates a source from a JSON object stored on disk
    ///
    /// A file that cannot be read or is not a JSON object counts as absent
    /// metadata, so fetching reports `MissingVersionId`.
    pub fn from_metadata_file(path: &Path) -> Self {
        let metadata = std::fs::read(path)
            .inspect_err(|e| warn!("Failed to read metadata file {:?}: {}", path, e))
            .ok()
            .and_then(|content| {
                serde_json::from_slice::<Metadata>(&content)
                    .inspect_err(|e| warn!("Failed to parse metadata file {:?}: {}", path, e))
                    .ok()
            });

        Self::new(metadata)
    }

    /// Overrides the metadata key holding the version string
    pub fn with_version_key(mut self, version_key: &str) -> Self {
        self.version_key = version_key.to_string();
        self
    }

    fn version_string(&self) -> Result<&str, VersionError> {
        let value = self
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.get(&self.version_key))
            .ok_or(VersionError::MissingVersionId)?;

        value.as_str().ok_or(VersionError::InvalidData)
    }
}

#[async_trait::async_trait]
impl VersionSource for LocalVersionSource {
    async fn fetch(&self) -> Result<VersionNumber, VersionError> {
        let version_string = self.version_string().inspect_err(|e| {
            warn!("Device version unavailable under '{}': {}", self.version_key, e)
        })?;

        debug!("Parsing device version '{}'", version_string);
        parse_device_version(version_string)
    }
}
