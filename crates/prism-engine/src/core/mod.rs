//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: a one-time init hook and a per-frame callback, each with a
//! context that exposes only what that phase needs.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InitCtx, WindowCtx};
