//! Prism engine crate.
//!
//! Owns the platform + GPU runtime pieces needed to put one triangle on screen:
//! device and surface setup, the shader library, the triangle renderer, and the
//! display-driven frame loop.

pub mod config;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
