//! Three-part version number and comparison granularity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Immutable `major.minor.patch` triple
///
/// Serialized with the remote wire names (`majorNum`, `minorNum`, `patchNum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VersionNumber {
    #[serde(rename = "majorNum")]
    major: u64,
    #[serde(rename = "minorNum")]
    minor: u64,
    #[serde(rename = "patchNum")]
    patch: u64,
}

impl VersionNumber {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the field selected by the given granularity
    pub fn component(&self, number_type: VersionNumberType) -> u64 {
        match number_type {
            VersionNumberType::Major => self.major,
            VersionNumberType::Minor => self.minor,
            VersionNumberType::Patch => self.patch,
        }
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component decides whether the device is behind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionNumberType {
    #[default]
    Major,
    Minor,
    Patch,
}

impl VersionNumberType {
    /// Returns the string representation of the granularity
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionNumberType::Major => "major",
            VersionNumberType::Minor => "minor",
            VersionNumberType::Patch => "patch",
        }
    }

    /// Whether `device` is behind `online` at this granularity
    ///
    /// Only the selected component is compared; a lower major number does not
    /// count under the `Minor` policy.
    pub fn update_required(&self, device: &VersionNumber, online: &VersionNumber) -> bool {
        device.component(*self) < online.component(*self)
    }
}

impl fmt::Display for VersionNumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionNumberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(VersionNumberType::Major),
            "minor" => Ok(VersionNumberType::Minor),
            "patch" => Ok(VersionNumberType::Patch),
            _ => Err(format!(
                "unknown version number type '{s}' (expected major, minor or patch)"
            )),
        }
    }
}
