//! Version source test utilities

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use app_version_validator::version::{VersionError, VersionNumber, VersionSource};

/// Source returning a fixed result and counting how often it was fetched
pub struct SpySource {
    result: Result<VersionNumber, VersionError>,
    calls: AtomicUsize,
}

impl SpySource {
    pub fn succeeding(major: u64, minor: u64, patch: u64) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(VersionNumber::new(major, minor, patch)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: VersionError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionSource for SpySource {
    async fn fetch(&self) -> Result<VersionNumber, VersionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
