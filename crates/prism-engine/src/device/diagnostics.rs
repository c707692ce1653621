//! Startup dumps of what the device layer selected.

pub(crate) fn log_adapter(info: &wgpu::AdapterInfo) {
    log::info!(
        "adapter: {} ({:?}, {:?})",
        info.name,
        info.backend,
        info.device_type
    );
    if !info.driver.is_empty() || !info.driver_info.is_empty() {
        log::debug!("driver: {} {}", info.driver, info.driver_info);
    }
}

pub(crate) fn log_surface(config: &wgpu::SurfaceConfiguration) {
    log::info!("{}", describe_surface(config));
}

fn describe_surface(config: &wgpu::SurfaceConfiguration) -> String {
    format!(
        "surface: {}x{} {:?} alpha={:?} present={:?} framebuffer_only={}",
        config.width,
        config.height,
        config.format,
        config.alpha_mode,
        config.present_mode,
        config.usage == wgpu::TextureUsages::RENDER_ATTACHMENT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_description_names_the_selection() {
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8Unorm,
            width: 640,
            height: 480,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let s = describe_surface(&config);
        assert!(s.contains("640x480"));
        assert!(s.contains("Bgra8Unorm"));
        assert!(s.contains("Opaque"));
        assert!(s.contains("framebuffer_only=true"));
    }
}
