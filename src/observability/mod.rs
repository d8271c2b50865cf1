//! Observability module
//!
//! Logging infrastructure for `docsmith` command runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
