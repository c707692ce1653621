//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring drawables and providing encoders/views for rendering
//! - reporting what was selected, for startup diagnostics

mod diagnostics;
mod error;
mod frame;
mod gpu;
mod init;
pub(crate) mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
