/// One acquired drawable plus the encoder recording into it.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// drawable. Hand it back through [`Gpu::present`](super::Gpu::present).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
