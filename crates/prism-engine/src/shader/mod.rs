//! Shader library: parsed and validated WGSL plus the entry points it declares.
//!
//! Pipelines resolve their stage functions by name through
//! [`ShaderLibrary::function`], so a renamed or missing function surfaces as an
//! initialization error naming what is available. Source that does not parse
//! or validate is rejected before it reaches the device.

mod library;

pub use library::{EntryPoint, ShaderLibrary, ShaderStage};
