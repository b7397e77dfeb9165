//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → NetworkConfig handed to EthClient::connect
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - `[network]` starts from a named preset; explicit fields override it
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, LoggingConfig, NetworkSection};
pub use validation::{validate_config, ValidationError};
