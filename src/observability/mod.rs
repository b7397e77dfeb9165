//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! blockchain/ and signature/ emit tracing events
//!     → logging.rs (subscriber, level filter)
//!     → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
