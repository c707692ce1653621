//! Environment-driven configuration overrides.
//!
//! Configuration itself lives in plain structs with `Default`
//! ([`GpuInit`](crate::device::GpuInit),
//! [`RuntimeConfig`](crate::window::RuntimeConfig),
//! [`LoggingConfig`](crate::logging::LoggingConfig)). This module only parses the
//! handful of values that may be overridden from the environment.

mod env;

pub use env::{parse_backends, parse_present_mode, BACKEND_VAR, PRESENT_MODE_VAR};
