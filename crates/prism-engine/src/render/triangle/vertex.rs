use bytemuck::{Pod, Zeroable};

/// Position-only vertex, already in normalized device coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Apex at the top centre, base along the bottom edge. Counter-clockwise.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(0.0, 1.0, 0.0),
    Vertex::new(-1.0, -1.0, 0.0),
    Vertex::new(1.0, -1.0, 0.0),
];

pub const VERTEX_COUNT: u32 = TRIANGLE_VERTICES.len() as u32;
pub const INSTANCE_COUNT: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_covers_expected_corners() {
        let xy: Vec<[f32; 2]> = TRIANGLE_VERTICES
            .iter()
            .map(|v| [v.position[0], v.position[1]])
            .collect();
        assert_eq!(xy, vec![[0.0, 1.0], [-1.0, -1.0], [1.0, -1.0]]);
        assert!(TRIANGLE_VERTICES.iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn buffer_is_nine_tightly_packed_floats() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 36);
        assert_eq!(Vertex::layout().array_stride, 12);

        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(floats, &[0.0, 1.0, 0.0, -1.0, -1.0, 0.0, 1.0, -1.0, 0.0]);
    }

    #[test]
    fn layout_has_single_position_attribute() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn winding_is_counter_clockwise() {
        let [a, b, c] = TRIANGLE_VERTICES.map(|v| v.position);
        let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        assert!(cross > 0.0);
    }

    #[test]
    fn one_draw_of_three_vertices() {
        assert_eq!(VERTEX_COUNT, 3);
        assert_eq!(INSTANCE_COUNT, 1);
    }
}
