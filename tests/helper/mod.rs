#![allow(dead_code)]

pub mod source;
pub mod transport;

pub use source::SpySource;
pub use transport::StubTransport;
