//! GPU rendering subsystem.
//!
//! One renderer lives here: [`triangle::TriangleRenderer`], which owns the
//! static vertex buffer and pipeline and encodes a clear plus a single draw
//! into each frame.

mod color;
mod ctx;
pub mod triangle;

pub use color::Color;
pub use ctx::{RenderCtx, RenderTarget};
