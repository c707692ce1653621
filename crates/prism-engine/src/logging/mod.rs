//! Logger setup for the demo binary.
//!
//! The engine itself only emits through the `log` facade; `init_logging`
//! picks the filter and installs `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
