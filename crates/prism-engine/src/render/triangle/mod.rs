//! The one thing this engine draws.

mod pipeline;
mod renderer;
mod vertex;

pub use pipeline::{create_pipeline, shader_library, FRAGMENT_ENTRY, VERTEX_ENTRY};
pub use renderer::TriangleRenderer;
pub use vertex::{Vertex, INSTANCE_COUNT, TRIANGLE_VERTICES, VERTEX_COUNT};
