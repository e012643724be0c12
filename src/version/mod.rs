//! Version checking layer for the installed application
//!
//! This module provides the core functionality for reading the device version,
//! fetching the online version, and deciding whether an update is required.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Validator  │────▶│   Fetcher   │────▶│   Remote    │──▶ Transport
//! │  (policy)   │     │   (pair)    │     │  (decoder)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │    Local    │──▶ Metadata
//!                     │  (parser)   │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`number`]: `VersionNumber` and the `VersionNumberType` policy
//! - [`parser`]: Parses the dotted device version string
//! - [`decoder`]: Decodes the remote JSON payload
//! - [`source`]: `VersionSource` trait shared by local and remote sources
//! - [`sources`]: Device metadata and remote endpoint sources
//! - [`transport`]: `Transport` trait and the `reqwest` implementation
//! - [`fetcher`]: Remote-then-local pair fetch
//! - [`validator`]: Update-required decision
//! - [`error`]: Error types for sources, transports and the validator

pub mod decoder;
pub mod error;
pub mod fetcher;
pub mod number;
pub mod parser;
pub mod source;
pub mod sources;
pub mod transport;
pub mod validator;

pub use error::{TransportError, VersionError};
pub use fetcher::{VersionPair, VersionPairFetcher};
pub use number::{VersionNumber, VersionNumberType};
pub use source::VersionSource;
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use validator::AppVersionValidator;
