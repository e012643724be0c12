//! Version source implementations (device metadata, remote endpoint)

pub mod local;
pub mod remote;

pub use local::{LocalVersionSource, Metadata};
pub use remote::RemoteVersionSource;
