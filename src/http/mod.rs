//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route dispatch)
//!     → request.rs (attach request ID)
//!     → snapshot of the incoming headers (crate::snapshot)
//!     → render.rs (embed page data in HTML) or JSON page data
//!     → Send to client
//! ```

pub mod render;
pub mod request;
pub mod server;

pub use request::{EchoMakeRequestId, X_REQUEST_ID};
pub use server::HttpServer;
