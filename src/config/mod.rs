//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → EchoConfig (immutable once loaded)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a minimal or absent config works
//! - Config is immutable once loaded

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::EchoConfig;
pub use schema::ListenerConfig;
