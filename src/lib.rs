//! Header Echo Backend
//!
//! A small HTTP test fixture for exercising proxies, WAFs, and other
//! header-rewriting intermediaries. Every request's headers are flattened
//! into an ordered name → value snapshot and echoed back, as JSON page
//! data on `/headers` and as a server-rendered page on `/`, so a harness
//! can assert exactly which headers reached the origin.

pub mod config;
pub mod http;
pub mod observability;
pub mod snapshot;

pub use config::EchoConfig;
pub use http::HttpServer;
pub use snapshot::{snapshot, HeaderSnapshot};
